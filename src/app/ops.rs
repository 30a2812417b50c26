//! File operations that prompt the user or call external tools.

use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use crate::{
  app::App,
  core::{
    archive,
    fs_ops,
  },
  error::{
    Error,
    Result,
  },
  host::Host,
};

fn file_name_of(path: &Path) -> String
{
  path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| path.display().to_string())
}

impl App
{
  /// Rename the highlighted entry. Blank input cancels.
  pub fn rename(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let Some(entry) = self.selected_entry().cloned()
    else
    {
      return Ok(());
    };
    let Some(input) = host.read_input(&format!("Rename '{}' to: ", entry.name))?
    else
    {
      return Ok(());
    };
    let new_name = input.trim();
    if new_name.is_empty() || new_name == entry.name
    {
      return Ok(());
    }
    let target = self.cwd.join(new_name);
    if fs_ops::path_exists(&target)
    {
      return Err(Error::AlreadyExists(PathBuf::from(new_name)));
    }
    log::info!("[ops] rename {} -> {}", entry.path.display(), target.display());
    fs::rename(&entry.path, &target)?;
    self.marked.remove(&entry.path);
    self.refresh(host);
    self.select_name(new_name);
    Ok(())
  }

  /// Delete the selection set, or the highlighted entry when nothing is
  /// selected, after confirmation.
  pub fn delete(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let targets: Vec<PathBuf> = self.targets().into_iter().filter(|p| fs_ops::path_exists(p)).collect();
    if targets.is_empty()
    {
      self.marked.clear();
      return Ok(());
    }
    let question = match targets.as_slice()
    {
      [one] => format!("Delete '{}'?", file_name_of(one)),
      many => format!("Delete {} items?", many.len()),
    };
    if !host.confirm(&question)?
    {
      return Ok(());
    }
    for path in &targets
    {
      log::info!("[ops] delete {}", path.display());
      if let Err(e) = fs_ops::remove_path_all(path)
      {
        log::warn!("[ops] delete {} failed: {}", path.display(), e);
        host.display_error(&format!("Delete failed: {}: {}", file_name_of(path), e));
      }
    }
    self.marked.clear();
    self.refresh(host);
    Ok(())
  }

  /// Create a file, or a directory when the name ends with a separator.
  pub fn create(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let Some(input) = host.read_input("Create (end with / for dir): ")?
    else
    {
      return Ok(());
    };
    let name = input.trim();
    if name.is_empty()
    {
      return Ok(());
    }
    let is_dir = fs_ops::wants_directory(name);
    if !is_dir && fs_ops::path_exists(&self.cwd.join(name))
    {
      return Err(Error::AlreadyExists(PathBuf::from(name)));
    }
    log::info!("[ops] create {} in {}", name, self.cwd.display());
    fs_ops::create_entry(&self.cwd, name)?;
    self.refresh(host);
    let first = name.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    let first = Path::new(first)
      .components()
      .next()
      .map(|c| c.as_os_str().to_string_lossy().to_string())
      .unwrap_or_default();
    self.select_name(&first);
    Ok(())
  }

  /// Flip the hidden-file filter, persist it, and reload.
  pub fn toggle_hidden(
    &mut self,
    host: &mut dyn Host,
  )
  {
    self.config.show_hidden_files = !self.config.show_hidden_files;
    if let Err(e) = self.store.save(&self.config)
    {
      log::warn!("[config] save failed: {}", e);
    }
    let keep = self.selected_entry().map(|e| e.name.clone());
    self.refresh(host);
    if let Some(name) = keep
    {
      self.select_name(&name);
    }
  }

  /// Extract the highlighted archive into `<cwd>/<stem>`.
  pub fn extract(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let Some(entry) = self.selected_entry().cloned()
    else
    {
      return Ok(());
    };
    if entry.is_dir() || archive::detect(&entry.name).is_none()
    {
      return Err(Error::NotAnArchive(PathBuf::from(&entry.name)));
    }
    let stem = archive::stem_without_archive_ext(&entry.name);
    let dest = self.cwd.join(&stem);
    log::info!("[ops] extract {} -> {}", entry.path.display(), dest.display());
    let result = host.extract(&entry.path, &dest);
    self.refresh(host);
    result?;
    self.select_name(&stem);
    Ok(())
  }

  /// Archive the selection (or highlighted entry) under a prompted name.
  pub fn compress(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let sources: Vec<PathBuf> = self
      .targets()
      .into_iter()
      .filter(|p| fs_ops::path_exists(p))
      .map(|p| p.strip_prefix(&self.cwd).map(Path::to_path_buf).unwrap_or(p))
      .collect();
    if sources.is_empty()
    {
      return Ok(());
    }
    let Some(input) = host.read_input("Archive name: ")?
    else
    {
      return Ok(());
    };
    let name = input.trim();
    if name.is_empty()
    {
      return Ok(());
    }
    let dest = self.cwd.join(name);
    if fs_ops::path_exists(&dest)
    {
      return Err(Error::AlreadyExists(PathBuf::from(name)));
    }
    log::info!("[ops] compress {} item(s) -> {}", sources.len(), dest.display());
    let cwd = self.cwd.clone();
    let result = host.compress(&sources, &dest, &cwd);
    self.marked.clear();
    self.refresh(host);
    result?;
    self.select_name(name);
    Ok(())
  }

  /// Jump to a path picked with the fuzzy finder.
  pub fn fuzzy_find(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let root = self.cwd.clone();
    let picked = host.run_finder(&root)?;
    let Some(path) = picked
    else
    {
      self.refresh(host);
      return Ok(());
    };
    log::debug!("[finder] picked {}", path.display());
    if path.is_dir()
    {
      self.cwd = path;
      self.cursor.reset();
      self.marked.clear();
      self.refresh(host);
      return Ok(());
    }
    let name = file_name_of(&path);
    if let Some(parent) = path.parent()
    {
      self.cwd = parent.to_path_buf();
      self.cursor.reset();
      self.marked.clear();
    }
    self.refresh(host);
    self.select_name(&name);
    Ok(())
  }
}
