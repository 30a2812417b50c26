mod common;

use std::fs;

use common::{
  ScriptedHost,
  app_in,
  names,
  select,
  touch,
};

fn populated(n: usize) -> tempfile::TempDir
{
  let tmp = tempfile::tempdir().unwrap();
  for i in 0..n
  {
    touch(tmp.path(), &format!("file{i:03}"));
  }
  tmp
}

#[test]
fn jump_to_end_scrolls_to_last_page()
{
  let tmp = populated(50);
  let mut app = app_in(tmp.path());
  app.set_viewport_height(10);
  app.jump_to_end();
  assert_eq!(app.selected_index(), 49);
  assert_eq!(app.scroll_offset(), 40);
  app.jump_to_start();
  assert_eq!((app.selected_index(), app.scroll_offset()), (0, 0));
}

#[test]
fn cursor_window_invariant_under_moves_and_resizes()
{
  let tmp = populated(37);
  let mut app = app_in(tmp.path());
  let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
  for _ in 0..2000
  {
    seed ^= seed << 13;
    seed ^= seed >> 7;
    seed ^= seed << 17;
    match seed % 6
    {
      0 => app.move_cursor(1),
      1 => app.move_cursor(-1),
      2 => app.jump_to_end(),
      3 => app.jump_to_start(),
      4 => app.set_viewport_height((seed % 15) as usize + 1),
      _ => app.move_cursor(if seed & 1 == 0 { 5 } else { -5 }),
    }
    let (sel, off, h) = (app.selected_index(), app.scroll_offset(), app.viewport_height());
    assert!(sel < 37);
    assert!(off <= sel && sel < off + h, "sel={sel} off={off} h={h}");
    assert!(off <= 37usize.saturating_sub(h));
  }
}

#[test]
fn moves_stop_at_edges()
{
  let tmp = populated(3);
  let mut app = app_in(tmp.path());
  app.move_cursor(-1);
  assert_eq!(app.selected_index(), 0);
  app.move_cursor(1);
  app.move_cursor(1);
  app.move_cursor(1);
  assert_eq!(app.selected_index(), 2);
}

#[test]
fn empty_directory_has_no_selection()
{
  let tmp = tempfile::tempdir().unwrap();
  let mut app = app_in(tmp.path());
  app.move_cursor(1);
  app.jump_to_end();
  assert!(app.selected_entry().is_none());
  assert_eq!((app.selected_index(), app.scroll_offset()), (0, 0));
}

#[test]
fn open_directory_and_navigate_up()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  fs::create_dir(root.join("sub")).unwrap();
  touch(&root.join("sub"), "inner.txt");
  touch(root, "top.txt");

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  app.toggle_selection();
  app.jump_to_start();
  select(&mut app, "sub");
  app.open(&mut host).unwrap();
  assert_eq!(app.cwd(), root.join("sub"));
  assert_eq!(names(&app), vec!["inner.txt"]);
  assert!(app.marked().is_empty());

  app.navigate_up(&mut host);
  assert_eq!(app.cwd(), root);
  assert_eq!(app.selected_index(), 0);
  assert!(host.errors.is_empty());
}

#[test]
fn open_file_goes_to_editor_or_system_opener()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  touch(root, "notes.txt");
  touch(root, "photo.png");

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "notes.txt");
  app.open(&mut host).unwrap();
  assert_eq!(host.edited, vec![root.join("notes.txt")]);
  assert_eq!(app.cwd(), root);
  assert_eq!(app.selected_entry().map(|e| e.name.as_str()), Some("notes.txt"));

  select(&mut app, "photo.png");
  app.open(&mut host).unwrap();
  assert_eq!(host.opened, vec![root.join("photo.png")]);
}

#[test]
fn vanished_directory_falls_back_to_parent()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  fs::create_dir(root.join("gone")).unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "gone");
  app.open(&mut host).unwrap();
  fs::remove_dir(root.join("gone")).unwrap();
  app.refresh(&mut host);
  assert_eq!(app.cwd(), root);
  assert_eq!(host.errors.len(), 1);
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_refused()
{
  use std::os::unix::fs::PermissionsExt;
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  let locked = root.join("locked");
  fs::create_dir(&locked).unwrap();
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
  if fs::read_dir(&locked).is_ok()
  {
    // Running as root: permissions are not enforced.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    return;
  }

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "locked");
  app.open(&mut host).unwrap();
  assert_eq!(app.cwd(), root);
  assert_eq!(host.errors, vec!["Cannot access locked: Access Denied".to_string()]);
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
