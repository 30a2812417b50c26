use ratatui::{
  layout::Rect,
  style::Style,
};

use crate::config::{
  Theme,
  ThemeRole,
};

/// Error banner across `row`; stays until the next key.
pub fn draw_error_line(
  f: &mut ratatui::Frame,
  row: Rect,
  message: &str,
  theme: &Theme,
)
{
  let style = Style::default().bg(theme.get(ThemeRole::ErrorBg)).fg(theme.get(ThemeRole::ErrorFg));
  let buf = f.buffer_mut();
  super::clear_row(buf, row, style);
  buf.set_stringn(row.x, row.y, format!(" {}", message), row.width as usize, style);
}
