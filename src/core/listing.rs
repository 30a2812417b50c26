use std::{
  cmp::Ordering,
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
  time::SystemTime,
};

/// What kind of filesystem child an entry is. File-only data rides on the
/// `File` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind
{
  Directory,
  File
  {
    size:       u64,
    executable: bool,
  },
}

/// Immutable snapshot of one directory child, produced fresh on every
/// listing. Identity for selection and clipboard purposes is `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo
{
  pub name:      String,
  pub path:      PathBuf,
  pub kind:      EntryKind,
  pub mtime:     Option<SystemTime>,
  /// Lower-cased extension without the dot; empty when there is none.
  pub extension: String,
}

impl DirEntryInfo
{
  /// Build an entry by reading metadata for `path`. Symlinks are followed;
  /// a dangling link is reported as a zero-sized file.
  pub fn from_path(path: &Path) -> io::Result<Self>
  {
    let meta = match fs::metadata(path)
    {
      Ok(m) => m,
      Err(_) => fs::symlink_metadata(path)?,
    };
    let name = path
      .file_name()
      .map(|s| s.to_string_lossy().to_string())
      .unwrap_or_else(|| path.to_string_lossy().to_string());
    let extension = extension_of(&name);
    let kind = if meta.is_dir()
    {
      EntryKind::Directory
    }
    else
    {
      EntryKind::File {
        size:       meta.len(),
        executable: is_executable(&meta, &extension),
      }
    };
    Ok(Self {
      name,
      path: path.to_path_buf(),
      kind,
      mtime: meta.modified().ok(),
      extension,
    })
  }

  pub fn is_dir(&self) -> bool
  {
    matches!(self.kind, EntryKind::Directory)
  }

  pub fn is_executable(&self) -> bool
  {
    matches!(self.kind, EntryKind::File { executable: true, .. })
  }

  /// Size in bytes for files, `None` for directories.
  pub fn size(&self) -> Option<u64>
  {
    match self.kind
    {
      EntryKind::File { size, .. } => Some(size),
      EntryKind::Directory => None,
    }
  }
}

/// Lower-cased extension of a file name, without the leading dot. Dotfiles
/// such as `.bashrc` have no extension.
pub fn extension_of(name: &str) -> String
{
  Path::new(name)
    .extension()
    .map(|e| e.to_string_lossy().to_ascii_lowercase())
    .unwrap_or_default()
}

#[cfg(unix)]
fn is_executable(
  meta: &fs::Metadata,
  ext: &str,
) -> bool
{
  use std::os::unix::fs::PermissionsExt;
  meta.permissions().mode() & 0o111 != 0 || is_executable_ext(ext)
}

#[cfg(not(unix))]
fn is_executable(
  _meta: &fs::Metadata,
  ext: &str,
) -> bool
{
  is_executable_ext(ext)
}

fn is_executable_ext(ext: &str) -> bool
{
  matches!(ext, "exe" | "sh" | "bat" | "cmd")
}

/// Directories first, then files; each group ordered by byte-wise name.
pub fn compare_entries(
  a: &DirEntryInfo,
  b: &DirEntryInfo,
) -> Ordering
{
  match (a.is_dir(), b.is_dir())
  {
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    _ => a.name.cmp(&b.name),
  }
}

/// Read a directory and return its entries, directories first.
/// Hidden files (dotfiles) are filtered when `show_hidden` is false.
/// Children whose metadata cannot be read are skipped.
pub fn read_dir_sorted(
  path: &Path,
  show_hidden: bool,
) -> io::Result<Vec<DirEntryInfo>>
{
  let mut entries: Vec<DirEntryInfo> = fs::read_dir(path)?
    .filter_map(|res| res.ok())
    .filter(|e| show_hidden || !e.file_name().to_string_lossy().starts_with('.'))
    .filter_map(|e| DirEntryInfo::from_path(&e.path()).ok())
    .collect();
  entries.sort_by(compare_entries);
  log::debug!(
    "[listing] {} -> {} entries (hidden={})",
    path.display(),
    entries.len(),
    show_hidden
  );
  Ok(entries)
}
