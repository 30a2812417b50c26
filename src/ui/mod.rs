//! Frame rendering: header, borders, list, preview and footer.

pub mod ansi;
pub mod colors;
pub mod format;
pub mod graphics;
pub mod overlays;
pub mod panes;

use ratatui::{
  buffer::Buffer,
  style::Style,
  symbols::line,
};
use unicode_width::UnicodeWidthStr;

use crate::{
  app::App,
  config::{
    Theme,
    ThemeRole,
  },
  preview::PreviewContent,
  ui::{
    format::human_size,
    panes::Layout,
  },
};

pub const LEGEND: &str = "[r]ename [d]elete [a]dd [y]ank [x]cut [p]aste [q]uit";

/// Draw one full frame of the browser.
pub fn draw(
  f: &mut ratatui::Frame,
  app: &App,
  preview: &PreviewContent,
)
{
  let layout = Layout::from_area(f.area());
  let theme = app.theme();
  draw_header_path(f.buffer_mut(), &layout, app, theme);
  if !layout.is_drawable()
  {
    return;
  }
  draw_borders(f.buffer_mut(), &layout, theme);
  panes::draw_list_pane(f, layout.list_area(), app);
  panes::draw_preview_pane(f, layout.preview_area(), preview);
  draw_footer(f.buffer_mut(), &layout, app, theme);
}

fn draw_header_path(
  buf: &mut Buffer,
  layout: &Layout,
  app: &App,
  theme: &Theme,
)
{
  if layout.height == 0
  {
    return;
  }
  let style = Style::default().fg(theme.get(ThemeRole::HeaderPath));
  buf.set_stringn(0, 0, format!(" {}", app.cwd().display()), layout.width as usize, style);
}

/// Horizontal rule with `left`, `mid` and `right` junctions.
fn rule(
  layout: &Layout,
  left: &str,
  mid: &str,
  right: &str,
) -> String
{
  let mut s = String::with_capacity(layout.width as usize * 3);
  for x in 0..layout.width
  {
    let ch = if x == 0
    {
      left
    }
    else if x + 1 == layout.width
    {
      right
    }
    else if x == layout.mid_x
    {
      mid
    }
    else
    {
      line::HORIZONTAL
    };
    s.push_str(ch);
  }
  s
}

fn draw_borders(
  buf: &mut Buffer,
  layout: &Layout,
  theme: &Theme,
)
{
  let border = Style::default().fg(theme.get(ThemeRole::Border));
  let title = Style::default().fg(theme.get(ThemeRole::HeaderTitle));
  let w = layout.width as usize;

  buf.set_stringn(0, 1, rule(layout, line::TOP_LEFT, line::HORIZONTAL_DOWN, line::TOP_RIGHT), w, border);
  buf.set_stringn(0, 3, rule(layout, line::VERTICAL_RIGHT, line::CROSS, line::VERTICAL_LEFT), w, border);
  buf.set_stringn(
    0,
    layout.bottom_border_row(),
    rule(layout, line::BOTTOM_LEFT, line::HORIZONTAL_UP, line::BOTTOM_RIGHT),
    w,
    border,
  );

  let last = layout.bottom_border_row();
  for y in (2..last).filter(|y| *y != 3)
  {
    for x in [0, layout.mid_x, layout.width - 1]
    {
      buf.set_string(x, y, line::VERTICAL, border);
    }
  }

  let list = layout.list_area();
  let preview = layout.preview_area();
  buf.set_stringn(list.x, 2, panes::header_text(), list.width as usize, title);
  buf.set_stringn(preview.x, 2, " Preview", preview.width as usize, title);
}

fn draw_footer(
  buf: &mut Buffer,
  layout: &Layout,
  app: &App,
  theme: &Theme,
)
{
  let row = layout.footer_row();
  let status = match app.selected_entry()
  {
    Some(e) =>
    {
      let size = e.size().map(|s| format!(" {}", human_size(s))).unwrap_or_default();
      format!(" {}/{} : {}{}", app.selected_index() + 1, app.entries().len(), e.name, size)
    }
    None => " 0/0".to_string(),
  };
  let w = layout.width as usize;
  let (status_end, _) =
    buf.set_stringn(0, row, &status, w, Style::default().fg(theme.get(ThemeRole::ListDefault)));
  // The legend yields to the status: it starts after the status and loses
  // its tail when the row is too narrow.
  let legend_x = layout.width.saturating_sub(LEGEND.width() as u16).max(status_end.saturating_add(1));
  if legend_x >= layout.width
  {
    return;
  }
  buf.set_stringn(
    legend_x,
    row,
    LEGEND,
    (layout.width - legend_x) as usize,
    Style::default().fg(theme.get(ThemeRole::Footer)),
  );
}
