//! Browser actions and their dispatch onto [`App`](crate::app::App).

mod dispatcher;

pub use dispatcher::dispatch_action;

/// Everything a single key press can ask the browser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action
{
  MoveUp,
  MoveDown,
  JumpToStart,
  JumpToEnd,
  ToggleSelection,
  Open,
  NavigateUp,
  ToggleHidden,
  Rename,
  Delete,
  Create,
  Yank,
  Cut,
  Paste,
  Extract,
  Compress,
  FuzzyFind,
  Quit,
}

impl Action
{
  /// Stable name used in trace output.
  pub fn name(self) -> &'static str
  {
    match self
    {
      Action::MoveUp => "nav:up",
      Action::MoveDown => "nav:down",
      Action::JumpToStart => "nav:top",
      Action::JumpToEnd => "nav:bottom",
      Action::ToggleSelection => "select:toggle",
      Action::Open => "open",
      Action::NavigateUp => "nav:parent",
      Action::ToggleHidden => "hidden:toggle",
      Action::Rename => "rename",
      Action::Delete => "delete",
      Action::Create => "create",
      Action::Yank => "yank",
      Action::Cut => "cut",
      Action::Paste => "paste",
      Action::Extract => "extract",
      Action::Compress => "compress",
      Action::FuzzyFind => "find",
      Action::Quit => "quit",
    }
  }
}
