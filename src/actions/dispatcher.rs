// Central action dispatcher.
//
// Routes one parsed action to the matching App operation. Operations that
// prompt or shell out receive the host; the rest only touch state.
use super::Action;
use crate::{
  app::App,
  error::Result,
  host::Host,
};

/// Execute `action`. Errors are returned for the frame loop to report.
pub fn dispatch_action(
  app: &mut App,
  action: Action,
  host: &mut dyn Host,
) -> Result<()>
{
  log::debug!("[dispatch] action='{}'", action.name());
  match action
  {
    Action::MoveUp => app.move_cursor(-1),
    Action::MoveDown => app.move_cursor(1),
    Action::JumpToStart => app.jump_to_start(),
    Action::JumpToEnd => app.jump_to_end(),
    Action::ToggleSelection => app.toggle_selection(),
    Action::Open => app.open(host)?,
    Action::NavigateUp => app.navigate_up(host),
    Action::ToggleHidden => app.toggle_hidden(host),
    Action::Rename => app.rename(host)?,
    Action::Delete => app.delete(host)?,
    Action::Create => app.create(host)?,
    Action::Yank => app.yank(),
    Action::Cut => app.cut(),
    Action::Paste => app.paste(host)?,
    Action::Extract => app.extract(host)?,
    Action::Compress => app.compress(host)?,
    Action::FuzzyFind => app.fuzzy_find(host)?,
    Action::Quit => app.quit(),
  }
  Ok(())
}
