use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};

use crate::actions::Action;

/// Map a key press to its action. Ctrl/Alt chords are not bound.
pub fn action_for_key(key: &KeyEvent) -> Option<Action>
{
  if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
  {
    return None;
  }
  let action = match key.code
  {
    KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
    KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
    KeyCode::Char(' ') => Action::ToggleSelection,
    KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Action::Open,
    KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Action::NavigateUp,
    KeyCode::Char('.') => Action::ToggleHidden,
    KeyCode::Char('r') => Action::Rename,
    KeyCode::Char('d') => Action::Delete,
    KeyCode::Char('a') => Action::Create,
    KeyCode::Char('y') => Action::Yank,
    KeyCode::Char('x') => Action::Cut,
    KeyCode::Char('p') => Action::Paste,
    KeyCode::Char('e') => Action::Extract,
    KeyCode::Char('c') => Action::Compress,
    KeyCode::Char('z') => Action::FuzzyFind,
    KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
    KeyCode::Home | KeyCode::Char('g') => Action::JumpToStart,
    KeyCode::End | KeyCode::Char('G') => Action::JumpToEnd,
    _ => return None,
  };
  Some(action)
}

/// Build a key token for trace output.
/// Examples: 'x' -> "x", Ctrl-x -> "<C-x>", Enter -> "<Enter>"
pub fn build_token(key: &KeyEvent) -> String
{
  let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
  let alt = key.modifiers.contains(KeyModifiers::ALT);
  let base = match key.code
  {
    KeyCode::Char(ch) => ch.to_string(),
    other => format!("{:?}", other),
  };
  if !ctrl && !alt && matches!(key.code, KeyCode::Char(_))
  {
    return base;
  }
  let mut tok = String::from("<");
  if ctrl
  {
    tok.push_str("C-");
  }
  if alt
  {
    tok.push_str("M-");
  }
  tok.push_str(&base);
  tok.push('>');
  tok
}

#[cfg(test)]
mod tests
{
  use super::*;

  fn key(
    code: KeyCode,
    mods: KeyModifiers,
  ) -> KeyEvent
  {
    KeyEvent::new(code, mods)
  }

  #[test]
  fn bindings()
  {
    assert_eq!(action_for_key(&key(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Action::MoveDown));
    assert_eq!(action_for_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(Action::JumpToEnd));
    assert_eq!(action_for_key(&key(KeyCode::Char('g'), KeyModifiers::NONE)), Some(Action::JumpToStart));
    assert_eq!(action_for_key(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
    assert_eq!(action_for_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), None);
    assert_eq!(action_for_key(&key(KeyCode::Char('?'), KeyModifiers::NONE)), None);
  }

  #[test]
  fn tokens()
  {
    assert_eq!(build_token(&key(KeyCode::Char('x'), KeyModifiers::NONE)), "x");
    assert_eq!(build_token(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), "<C-x>");
    assert_eq!(build_token(&key(KeyCode::Enter, KeyModifiers::NONE)), "<Enter>");
  }
}
