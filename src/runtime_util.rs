//! Utilities for driving the runtime event loop outside the main binary.

use crossterm::event::Event;

use crate::{
  app::App,
  error::Result,
  host::Host,
};

/// Process a single crossterm event and return `Ok(true)` if the app should
/// exit. Resizes need no work here; the next frame re-measures.
pub fn process_event(
  app: &mut App,
  ev: Event,
  host: &mut dyn Host,
) -> Result<bool>
{
  match ev
  {
    Event::Key(key) => crate::input::handle_key(app, key, host),
    Event::Resize(_, _) => Ok(false),
    _ => Ok(false),
  }
}
