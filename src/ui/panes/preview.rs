use ratatui::{
  layout::Rect,
  text::Line,
};

use crate::{
  preview::PreviewContent,
  ui::ansi::{
    ansi_spans,
    fit_ansi,
  },
};

/// Draw text previews. Graphics leave the pane blank; the runtime writes
/// them after the frame is flushed.
pub fn draw_preview_pane(
  f: &mut ratatui::Frame,
  area: Rect,
  content: &PreviewContent,
)
{
  let PreviewContent::Lines(lines) = content
  else
  {
    return;
  };
  let width = area.width as usize;
  let buf = f.buffer_mut();
  for (row, text) in lines.iter().take(area.height as usize).enumerate()
  {
    let fitted = fit_ansi(text, width);
    let line = Line::from(ansi_spans(&fitted));
    buf.set_line(area.x, area.y + row as u16, &line, area.width);
  }
}
