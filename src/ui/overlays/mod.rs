//! Blocking one-line overlays drawn over the footer row.

pub mod confirm;
pub mod messages;
pub mod prompt;

use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::Style,
};

pub use confirm::{
  confirm_answer,
  draw_confirm_line,
};
pub use messages::draw_error_line;
pub use prompt::{
  InputOutcome,
  LineInput,
  draw_prompt_line,
};

/// The last row of `area`, where overlays are drawn.
pub fn bottom_row(area: Rect) -> Rect
{
  Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, area.height.min(1))
}

/// Blank every cell of `row` so nothing from the frame underneath shows
/// through, then apply `style`.
pub(crate) fn clear_row(
  buf: &mut Buffer,
  row: Rect,
  style: Style,
)
{
  for x in row.left()..row.right()
  {
    if let Some(cell) = buf.cell_mut((x, row.y))
    {
      cell.reset();
      cell.set_style(style);
    }
  }
}
