mod common;

use std::fs;

use duopane::app::ClipboardMode;

use common::{
  ScriptedHost,
  app_in,
  select,
  touch,
};

#[test]
fn copy_pastes_repeatedly()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  let src = root.join("src");
  fs::create_dir_all(src.join("tree/leaf")).unwrap();
  fs::write(src.join("tree/leaf/x.txt"), b"x").unwrap();
  touch(&src, "a.txt");
  fs::create_dir(root.join("one")).unwrap();
  fs::create_dir(root.join("two")).unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(&src);
  select(&mut app, "a.txt");
  app.toggle_selection();
  select(&mut app, "tree");
  app.toggle_selection();
  app.yank();
  assert!(app.marked().is_empty());
  assert_eq!(app.clipboard().map(|c| c.mode), Some(ClipboardMode::Copy));

  for dest in ["one", "two"]
  {
    app.navigate_up(&mut host);
    select(&mut app, dest);
    app.open(&mut host).unwrap();
    app.paste(&mut host).unwrap();
    assert_eq!(fs::read(root.join(dest).join("a.txt")).unwrap(), b"a.txt");
    assert_eq!(fs::read(root.join(dest).join("tree/leaf/x.txt")).unwrap(), b"x");
    assert!(app.clipboard().is_some());
  }
  assert!(src.join("a.txt").exists());
  assert!(host.errors.is_empty());
}

#[test]
fn cut_moves_and_clears_clipboard()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  touch(root, "move.txt");
  fs::create_dir(root.join("dest")).unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "move.txt");
  app.cut();
  assert_eq!(app.clipboard().map(|c| c.mode), Some(ClipboardMode::Cut));
  select(&mut app, "dest");
  app.open(&mut host).unwrap();
  app.paste(&mut host).unwrap();

  assert!(!root.join("move.txt").exists());
  assert!(root.join("dest/move.txt").exists());
  assert!(app.clipboard().is_none());
  assert_eq!(app.selected_entry().map(|e| e.name.as_str()), Some("move.txt"));
}

#[test]
fn collision_is_reported_and_other_items_continue()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  let src = root.join("src");
  fs::create_dir(&src).unwrap();
  touch(&src, "clash.txt");
  touch(&src, "fresh.txt");
  let dest = root.join("dest");
  fs::create_dir(&dest).unwrap();
  fs::write(dest.join("clash.txt"), b"original").unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(&src);
  select(&mut app, "clash.txt");
  app.toggle_selection();
  select(&mut app, "fresh.txt");
  app.toggle_selection();
  app.cut();

  app.navigate_up(&mut host);
  select(&mut app, "dest");
  app.open(&mut host).unwrap();
  app.paste(&mut host).unwrap();

  assert_eq!(host.errors, vec!["'clash.txt' already exists".to_string()]);
  assert_eq!(fs::read(dest.join("clash.txt")).unwrap(), b"original");
  assert!(src.join("clash.txt").exists());
  assert!(dest.join("fresh.txt").exists());
  assert!(!src.join("fresh.txt").exists());
  assert!(app.clipboard().is_none());
}

#[test]
fn missing_source_is_reported()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  let doomed = touch(root, "doomed.txt");
  fs::create_dir(root.join("dest")).unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "doomed.txt");
  app.yank();
  fs::remove_file(&doomed).unwrap();
  select(&mut app, "dest");
  app.open(&mut host).unwrap();
  app.paste(&mut host).unwrap();

  assert_eq!(host.errors.len(), 1);
  assert!(host.errors[0].starts_with("Source no longer exists: "), "{}", host.errors[0]);
  assert!(fs::read_dir(root.join("dest")).unwrap().next().is_none());
}

#[test]
fn directory_cannot_be_pasted_into_itself()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  fs::create_dir_all(root.join("outer/inner")).unwrap();

  let mut host = ScriptedHost::new();
  let mut app = app_in(root);
  select(&mut app, "outer");
  app.yank();
  app.open(&mut host).unwrap();
  select(&mut app, "inner");
  app.open(&mut host).unwrap();
  app.paste(&mut host).unwrap();

  assert_eq!(host.errors, vec!["cannot place 'outer' inside itself".to_string()]);
  assert!(!root.join("outer/inner/outer").exists());
}

#[test]
fn paste_without_clipboard_does_nothing()
{
  let tmp = tempfile::tempdir().unwrap();
  touch(tmp.path(), "a");
  let mut host = ScriptedHost::new();
  let mut app = app_in(tmp.path());
  app.paste(&mut host).unwrap();
  assert!(host.errors.is_empty());
  assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn toggle_selection_twice_restores_set()
{
  let tmp = tempfile::tempdir().unwrap();
  touch(tmp.path(), "a");
  touch(tmp.path(), "b");
  let mut app = app_in(tmp.path());
  app.toggle_selection();
  assert_eq!(app.selected_index(), 1);
  assert!(app.is_marked(&tmp.path().join("a")));
  app.move_cursor(-1);
  app.toggle_selection();
  assert!(app.marked().is_empty());
}
