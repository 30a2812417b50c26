//! Selection and clipboard operations for App.

use std::path::{
  Path,
  PathBuf,
};

use crate::{
  app::{
    App,
    Clipboard,
    ClipboardMode,
  },
  core::fs_ops,
  error::{
    Error,
    Result,
  },
  host::Host,
};

impl App
{
  /// Toggle the highlighted entry in the selection set and advance one row.
  pub fn toggle_selection(&mut self)
  {
    let Some(path) = self.selected_entry().map(|e| e.path.clone())
    else
    {
      return;
    };
    if !self.marked.remove(&path)
    {
      self.marked.insert(path);
    }
    self.move_cursor(1);
  }

  /// Selected paths in stable order, or the highlighted entry when nothing
  /// is selected.
  pub(crate) fn targets(&self) -> Vec<PathBuf>
  {
    if self.marked.is_empty()
    {
      return self.selected_entry().map(|e| vec![e.path.clone()]).unwrap_or_default();
    }
    let mut paths: Vec<PathBuf> = self.marked.iter().cloned().collect();
    paths.sort();
    paths
  }

  pub fn yank(&mut self)
  {
    self.capture(ClipboardMode::Copy);
  }

  pub fn cut(&mut self)
  {
    self.capture(ClipboardMode::Cut);
  }

  fn capture(
    &mut self,
    mode: ClipboardMode,
  )
  {
    let paths = self.targets();
    if paths.is_empty()
    {
      return;
    }
    log::debug!("[clipboard] {:?} {} item(s)", mode, paths.len());
    self.clipboard = Some(Clipboard { paths, mode });
    self.marked.clear();
  }

  /// Paste the clipboard into the current directory. Each item succeeds or
  /// fails on its own; failures are reported and the rest continue. A cut
  /// clipboard is emptied afterwards, a copied one stays for further pastes.
  pub fn paste(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let Some(clip) = self.clipboard.clone()
    else
    {
      return Ok(());
    };
    let dest_dir = self.cwd.clone();
    let mut last_name = None;
    let mut failures = 0usize;
    for src in &clip.paths
    {
      match paste_one(src, &dest_dir, clip.mode)
      {
        Ok(name) => last_name = Some(name),
        Err(e) =>
        {
          failures += 1;
          log::warn!("[paste] {}: {}", src.display(), e);
          host.display_error(&e.to_string());
        }
      }
    }
    log::info!(
      "[paste] {:?} {} item(s) into {} ({} failed)",
      clip.mode,
      clip.paths.len(),
      dest_dir.display(),
      failures
    );
    if clip.mode == ClipboardMode::Cut
    {
      self.clipboard = None;
    }
    self.refresh(host);
    if let Some(name) = last_name
    {
      self.select_name(&name);
    }
    Ok(())
  }
}

fn paste_one(
  src: &Path,
  dest_dir: &Path,
  mode: ClipboardMode,
) -> Result<String>
{
  if !fs_ops::path_exists(src)
  {
    return Err(Error::SourceMissing(src.to_path_buf()));
  }
  let name = src
    .file_name()
    .ok_or_else(|| Error::SourceMissing(src.to_path_buf()))?
    .to_string_lossy()
    .to_string();
  let dest = dest_dir.join(&name);
  if fs_ops::path_exists(&dest)
  {
    return Err(Error::AlreadyExists(PathBuf::from(&name)));
  }
  if src.is_dir() && dest_dir.starts_with(src)
  {
    return Err(Error::IntoItself(PathBuf::from(&name)));
  }
  match mode
  {
    ClipboardMode::Copy => fs_ops::copy_path_recursive(src, &dest)?,
    ClipboardMode::Cut => fs_ops::move_path_with_fallback(src, &dest)?,
  }
  Ok(name)
}
