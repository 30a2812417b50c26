use std::{
  fs,
  io,
  path::{
    MAIN_SEPARATOR,
    Path,
  },
};

/// Recursively copy a file or directory tree from `src` to `dst`. Symbolic
/// links are recreated as links, never followed.
pub fn copy_path_recursive(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  let meta = fs::symlink_metadata(src)?;
  if meta.file_type().is_symlink()
  {
    copy_symlink(src, dst)
  }
  else if meta.is_dir()
  {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)?
    {
      let de = entry?;
      let target = dst.join(de.file_name());
      copy_path_recursive(&de.path(), &target)?;
    }
    Ok(())
  }
  else
  {
    fs::copy(src, dst).map(|_| ())
  }
}

#[cfg(unix)]
fn copy_symlink(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  std::os::unix::fs::symlink(fs::read_link(src)?, dst)
}

#[cfg(windows)]
fn copy_symlink(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  let target = fs::read_link(src)?;
  // Windows needs to know which kind of link to make; dangling links count as files.
  if fs::metadata(src).map(|m| m.is_dir()).unwrap_or(false)
  {
    std::os::windows::fs::symlink_dir(target, dst)
  }
  else
  {
    std::os::windows::fs::symlink_file(target, dst)
  }
}

/// Move a path via rename, falling back to copy+remove on cross-device moves.
pub fn move_path_with_fallback(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  match fs::rename(src, dst)
  {
    Ok(()) => Ok(()),
    Err(e) =>
    {
      log::debug!(
        "[fs] rename {} -> {} failed ({}); copying instead",
        src.display(),
        dst.display(),
        e
      );
      copy_path_recursive(src, dst)?;
      remove_path_all(src)
    }
  }
}

/// Remove a path (file, symlink, or directory recursively). Symlinks are
/// removed themselves, never their targets.
pub fn remove_path_all(path: &Path) -> io::Result<()>
{
  let meta = fs::symlink_metadata(path)?;
  if meta.is_dir()
  {
    fs::remove_dir_all(path)
  }
  else
  {
    fs::remove_file(path)
  }
}

/// Whether `name` asks for a directory (trailing `/` or platform separator).
pub fn wants_directory(name: &str) -> bool
{
  name.ends_with('/') || name.ends_with(MAIN_SEPARATOR)
}

/// Create `name` below `dir`. A trailing separator creates a directory
/// (with parents); otherwise missing parents are created and an empty file
/// is made. An existing file is never truncated.
pub fn create_entry(
  dir: &Path,
  name: &str,
) -> io::Result<()>
{
  let target = dir.join(name);
  if wants_directory(name)
  {
    return fs::create_dir_all(&target);
  }
  if let Some(parent) = target.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)?;
  }
  fs::OpenOptions::new().write(true).create_new(true).open(&target).map(|_| ())
}

/// Whether `path` exists without following a final symlink, so dangling
/// links still count as occupying the name.
pub fn path_exists(path: &Path) -> bool
{
  fs::symlink_metadata(path).is_ok()
}
