use ratatui::layout::Rect;

pub const HEADER_ROWS: u16 = 4;
pub const FOOTER_ROWS: u16 = 2;

/// Fixed two-column geometry derived from the terminal size.
///
/// Rows: path (0), top border (1), column titles (2), separator (3), list
/// rows, bottom border (`H-2`), footer (`H-1`). Column `mid_x` holds the
/// vertical divider; columns 0 and `W-1` the outer borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout
{
  pub width:       u16,
  pub height:      u16,
  pub mid_x:       u16,
  pub list_height: usize,
}

impl Layout
{
  pub fn compute(
    width: u16,
    height: u16,
  ) -> Self
  {
    Self {
      width,
      height,
      mid_x: width / 2,
      list_height: height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize,
    }
  }

  pub fn from_area(area: Rect) -> Self
  {
    Self::compute(area.width, area.height)
  }

  /// Content cells of the file list (between the left border and the
  /// divider).
  pub fn list_area(&self) -> Rect
  {
    Rect::new(1, HEADER_ROWS, self.mid_x.saturating_sub(1), self.list_height as u16)
  }

  /// Content cells of the preview (between the divider and the right
  /// border).
  pub fn preview_area(&self) -> Rect
  {
    let x = self.mid_x + 1;
    Rect::new(
      x.min(self.width),
      HEADER_ROWS,
      self.width.saturating_sub(1).saturating_sub(x),
      self.list_height as u16,
    )
  }

  /// Whether the screen is large enough to draw the frame at all.
  pub fn is_drawable(&self) -> bool
  {
    self.width >= 4 && self.height >= HEADER_ROWS + FOOTER_ROWS
  }

  pub fn bottom_border_row(&self) -> u16
  {
    self.height.saturating_sub(2)
  }

  pub fn footer_row(&self) -> u16
  {
    self.height.saturating_sub(1)
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn geometry_for_80x24()
  {
    let l = Layout::compute(80, 24);
    assert_eq!(l.mid_x, 40);
    assert_eq!(l.list_height, 18);
    assert_eq!(l.list_area(), Rect::new(1, 4, 39, 18));
    assert_eq!(l.preview_area(), Rect::new(41, 4, 38, 18));
    assert_eq!(l.bottom_border_row(), 22);
    assert_eq!(l.footer_row(), 23);
  }

  #[test]
  fn tiny_terminal_saturates()
  {
    let l = Layout::compute(3, 4);
    assert_eq!(l.list_height, 0);
    assert!(!l.is_drawable());
    assert_eq!(l.preview_area().width, 0);
  }
}
