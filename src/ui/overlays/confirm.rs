use crossterm::event::{
  KeyCode,
  KeyEvent,
};
use ratatui::{
  layout::Rect,
  style::Style,
};

use crate::config::{
  Theme,
  ThemeRole,
};

/// Only `y`/`Y` confirms; every other key declines.
pub fn confirm_answer(key: &KeyEvent) -> bool
{
  matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
}

pub fn draw_confirm_line(
  f: &mut ratatui::Frame,
  row: Rect,
  question: &str,
  theme: &Theme,
)
{
  let style = Style::default().fg(theme.get(ThemeRole::Confirmation));
  let buf = f.buffer_mut();
  super::clear_row(buf, row, Style::default());
  buf.set_stringn(row.x, row.y, format!("{} (y/N)", question), row.width as usize, style);
}
