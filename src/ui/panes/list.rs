use ratatui::{
  layout::Rect,
  style::Style,
};

use crate::{
  app::{
    App,
    DirEntryInfo,
  },
  config::{
    Theme,
    ThemeRole,
  },
  ui::format::list_date,
};

/// Width of the date column, not counting the separating spaces.
pub const DATE_COLUMN: usize = 20;

/// Text of one list row: `" {date:<20} {name}"`.
pub fn row_text(e: &DirEntryInfo) -> String
{
  format!(" {:<width$} {}", list_date(e.mtime), e.name, width = DATE_COLUMN)
}

/// Column titles matching [`row_text`].
pub fn header_text() -> String
{
  format!(" {:<width$} Name", "Date", width = DATE_COLUMN)
}

pub fn row_style(
  theme: &Theme,
  e: &DirEntryInfo,
  highlighted: bool,
  marked: bool,
) -> Style
{
  if highlighted
  {
    let fg = if marked { ThemeRole::ListMultiSelectedFg } else { ThemeRole::ListSelectedFg };
    return Style::default().bg(theme.get(ThemeRole::ListSelectedBg)).fg(theme.get(fg));
  }
  let role = if marked
  {
    ThemeRole::ListMultiSelectedFg
  }
  else if e.is_dir()
  {
    ThemeRole::ListDirectory
  }
  else if e.is_executable()
  {
    ThemeRole::ListExecutable
  }
  else
  {
    ThemeRole::ListDefault
  };
  Style::default().fg(theme.get(role))
}

/// Draw the visible window of the listing into `area`.
pub fn draw_list_pane(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let selected = app.selected_index();
  let theme = app.theme();
  let buf = f.buffer_mut();
  let visible = app.entries().iter().enumerate().skip(app.scroll_offset()).take(area.height as usize);
  for (row, (idx, entry)) in visible.enumerate()
  {
    let y = area.y + row as u16;
    let style = row_style(theme, entry, idx == selected, app.is_marked(&entry.path));
    buf.set_style(Rect::new(area.x, y, area.width, 1), style);
    buf.set_stringn(area.x, y, row_text(entry), area.width as usize, style);
  }
}
