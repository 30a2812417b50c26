use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};
use ratatui::{
  layout::{
    Position,
    Rect,
  },
  style::Style,
};
use unicode_width::UnicodeWidthStr;

use crate::config::{
  Theme,
  ThemeRole,
};

/// Result of feeding one key to a [`LineInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome
{
  Pending,
  Submit(String),
  Cancel,
}

/// Single-line text editor backing the bottom-row prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput
{
  text:   String,
  /// Cursor position in chars.
  cursor: usize,
}

impl LineInput
{
  pub fn text(&self) -> &str
  {
    &self.text
  }

  fn byte_at(
    &self,
    char_idx: usize,
  ) -> usize
  {
    self.text.char_indices().nth(char_idx).map(|(b, _)| b).unwrap_or(self.text.len())
  }

  fn char_len(&self) -> usize
  {
    self.text.chars().count()
  }

  pub fn handle_key(
    &mut self,
    key: KeyEvent,
  ) -> InputOutcome
  {
    match key.code
    {
      KeyCode::Enter => return InputOutcome::Submit(self.text.clone()),
      KeyCode::Esc => return InputOutcome::Cancel,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) =>
      {
        return InputOutcome::Cancel;
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) =>
      {
        let at = self.byte_at(self.cursor);
        self.text.replace_range(..at, "");
        self.cursor = 0;
      }
      KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
      {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
      }
      KeyCode::Backspace if self.cursor > 0 =>
      {
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.text.remove(at);
      }
      KeyCode::Delete if self.cursor < self.char_len() =>
      {
        let at = self.byte_at(self.cursor);
        self.text.remove(at);
      }
      KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
      KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
      KeyCode::Home => self.cursor = 0,
      KeyCode::End => self.cursor = self.char_len(),
      _ =>
      {}
    }
    InputOutcome::Pending
  }
}

/// Draw `prompt` followed by the input on `row` and place the terminal
/// cursor at the edit position.
pub fn draw_prompt_line(
  f: &mut ratatui::Frame,
  row: Rect,
  prompt: &str,
  input: &LineInput,
  theme: &Theme,
)
{
  let width = row.width as usize;
  let buf = f.buffer_mut();
  super::clear_row(buf, row, Style::default());
  let label_style = Style::default().fg(theme.get(ThemeRole::Confirmation));
  let (x, _) = buf.set_stringn(row.x, row.y, prompt, width, label_style);
  let used = (x - row.x) as usize;
  buf.set_stringn(x, row.y, input.text(), width.saturating_sub(used), Style::default());
  let before: String = input.text.chars().take(input.cursor).collect();
  let cx = (used + before.width()).min(width.saturating_sub(1)) as u16;
  f.set_cursor_position(Position::new(row.x + cx, row.y));
}

#[cfg(test)]
mod tests
{
  use super::*;

  fn key(code: KeyCode) -> KeyEvent
  {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn typed(s: &str) -> LineInput
  {
    let mut input = LineInput::default();
    for ch in s.chars()
    {
      input.handle_key(key(KeyCode::Char(ch)));
    }
    input
  }

  #[test]
  fn edit_and_submit()
  {
    let mut input = typed("helo");
    input.handle_key(key(KeyCode::Left));
    input.handle_key(key(KeyCode::Char('l')));
    assert_eq!(input.text(), "hello");
    input.handle_key(key(KeyCode::End));
    input.handle_key(key(KeyCode::Backspace));
    assert_eq!(input.handle_key(key(KeyCode::Enter)), InputOutcome::Submit("hell".to_string()));
  }

  #[test]
  fn multibyte_editing()
  {
    let mut input = typed("añb");
    input.handle_key(key(KeyCode::Left));
    input.handle_key(key(KeyCode::Backspace));
    assert_eq!(input.text(), "ab");
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Delete));
    assert_eq!(input.text(), "b");
  }

  #[test]
  fn escape_cancels()
  {
    let mut input = typed("x");
    assert_eq!(input.handle_key(key(KeyCode::Esc)), InputOutcome::Cancel);
  }
}
