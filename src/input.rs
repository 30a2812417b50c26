//! Input handling for keyboard events.

use crossterm::event::{
  KeyEvent,
  KeyEventKind,
};

use crate::{
  actions::dispatch_action,
  app::App,
  error::Result,
  host::Host,
  keymap::{
    action_for_key,
    build_token,
  },
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Release and repeat
/// events are ignored so a key acts exactly once.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
  host: &mut dyn Host,
) -> Result<bool>
{
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }
  let Some(action) = action_for_key(&key)
  else
  {
    log::trace!("[input] unbound key {}", build_token(&key));
    return Ok(false);
  };
  log::trace!("[input] {} -> {}", build_token(&key), action.name());
  dispatch_action(app, action, host)?;
  Ok(app.should_quit())
}
