mod common;

use std::fs;

use duopane::{
  App,
  config::{
    Config,
    ConfigStore,
    Theme,
    ThemeRole,
  },
  preview::PreviewContent,
  ui::{
    self,
    LEGEND,
  },
};
use ratatui::{
  Terminal,
  backend::TestBackend,
  buffer::Buffer,
  style::Color,
};

use common::{
  app_in,
  select,
  touch,
};

fn render(
  app: &App,
  width: u16,
  height: u16,
) -> Buffer
{
  let content = app.preview(width, height as usize);
  let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
  terminal.draw(|f| ui::draw(f, app, &content)).unwrap();
  terminal.backend().buffer().clone()
}

fn row(
  buf: &Buffer,
  y: u16,
) -> String
{
  (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

#[test]
fn empty_directory_frame()
{
  let tmp = tempfile::tempdir().unwrap();
  let app = app_in(tmp.path());
  let buf = render(&app, 80, 24);

  assert!(row(&buf, 0).starts_with(&format!(" {}", tmp.path().display())));
  let top = row(&buf, 1);
  assert!(top.starts_with('┌') && top.ends_with('┐'));
  assert_eq!(buf[(40, 1)].symbol(), "┬");
  assert_eq!(buf[(40, 3)].symbol(), "┼");
  assert_eq!(buf[(40, 22)].symbol(), "┴");
  assert_eq!(buf[(0, 10)].symbol(), "│");
  assert_eq!(buf[(79, 10)].symbol(), "│");

  let titles = row(&buf, 2);
  assert!(titles.contains(" Date"));
  assert!(titles.contains("Name"));
  assert!(titles.contains(" Preview"));

  let footer = row(&buf, 23);
  assert!(footer.starts_with(" 0/0"));
  assert!(footer.ends_with(LEGEND));
}

#[test]
fn listing_rows_and_status()
{
  let tmp = tempfile::tempdir().unwrap();
  fs::create_dir(tmp.path().join("docs")).unwrap();
  touch(tmp.path(), "a.txt");
  let mut app = app_in(tmp.path());
  app.move_cursor(1);
  let buf = render(&app, 80, 24);

  assert!(row(&buf, 4).contains(" docs"));
  assert!(row(&buf, 5).contains(" a.txt"));
  assert!(row(&buf, 23).starts_with(" 2/2 : a.txt"));
  assert_eq!(buf[(40, 4)].symbol(), "│");
}

#[test]
fn preview_text_lands_in_right_pane()
{
  let tmp = tempfile::tempdir().unwrap();
  let dir = tmp.path().join("box");
  fs::create_dir(&dir).unwrap();
  touch(&dir, "inside.txt");
  let app = app_in(tmp.path());
  let buf = render(&app, 80, 24);

  let first = row(&buf, 4);
  let right: String = first.chars().skip(41).collect();
  assert!(right.starts_with("inside.txt"), "{right:?}");
}

#[test]
fn tiny_terminal_does_not_panic()
{
  let tmp = tempfile::tempdir().unwrap();
  touch(tmp.path(), "a");
  let app = app_in(tmp.path());
  for (w, h) in [(1, 1), (3, 5), (4, 6), (10, 3)]
  {
    let _ = render(&app, w, h);
  }
  assert_eq!(app.preview(0, 0), PreviewContent::Lines(Vec::new()));
}

#[test]
fn legend_never_covers_a_long_status()
{
  let tmp = tempfile::tempdir().unwrap();
  touch(tmp.path(), "quarterly_financial_report.txt");
  let app = app_in(tmp.path());
  let buf = render(&app, 80, 24);

  let status = " 1/1 : quarterly_financial_report.txt 30 B";
  let footer = row(&buf, 23);
  assert!(footer.starts_with(&format!("{status} [r]ename")), "{footer:?}");
  let tail: String = footer.chars().skip(status.len() + 1).collect();
  assert!(LEGEND.starts_with(tail.as_str()), "{tail:?}");

  let narrow = render(&app, 30, 24);
  assert_eq!(row(&narrow, 23), status[..30]);
}

fn rgb(n: u8) -> Color
{
  Color::Rgb(n, n, n)
}

#[test]
fn list_rows_follow_theme_roles()
{
  let tmp = tempfile::tempdir().unwrap();
  fs::create_dir(tmp.path().join("d")).unwrap();
  for name in ["p.txt", "q.txt", "run.sh"]
  {
    touch(tmp.path(), name);
  }
  let mut theme = Theme::default();
  theme.set(ThemeRole::ListSelectedBg, rgb(1));
  theme.set(ThemeRole::ListSelectedFg, rgb(2));
  theme.set(ThemeRole::ListMultiSelectedFg, rgb(3));
  theme.set(ThemeRole::ListDirectory, rgb(4));
  theme.set(ThemeRole::ListExecutable, rgb(5));
  theme.set(ThemeRole::ListDefault, rgb(6));
  let mut app = App::with_parts(tmp.path().to_path_buf(), Config::default(), ConfigStore::in_memory(), theme, false);
  app.load_listing().unwrap();

  select(&mut app, "p.txt");
  app.toggle_selection();
  select(&mut app, "d");
  let buf = render(&app, 80, 24);
  assert!(row(&buf, 4).contains(" d"));
  assert_eq!((buf[(1, 4)].fg, buf[(1, 4)].bg), (rgb(2), rgb(1)));
  assert_eq!(buf[(30, 4)].bg, rgb(1));
  assert!(row(&buf, 5).contains(" p.txt"));
  assert_eq!(buf[(1, 5)].fg, rgb(3));
  assert_ne!(buf[(1, 5)].bg, rgb(1));
  assert!(row(&buf, 6).contains(" q.txt"));
  assert_eq!(buf[(1, 6)].fg, rgb(6));
  assert!(row(&buf, 7).contains(" run.sh"));
  assert_eq!(buf[(1, 7)].fg, rgb(5));

  select(&mut app, "p.txt");
  let buf = render(&app, 80, 24);
  assert_eq!((buf[(1, 5)].fg, buf[(1, 5)].bg), (rgb(3), rgb(1)));
  assert_eq!(buf[(1, 4)].fg, rgb(4));
  assert_ne!(buf[(1, 4)].bg, rgb(1));
}
