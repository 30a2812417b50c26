use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use super::Config;

/// Reads and writes [`Config`] at a fixed path. A store without a path is
/// in-memory only (saves are no-ops).
#[derive(Debug, Clone, Default)]
pub struct ConfigStore
{
  path: Option<PathBuf>,
}

impl ConfigStore
{
  pub fn at(path: PathBuf) -> Self
  {
    Self { path: Some(path) }
  }

  pub fn in_memory() -> Self
  {
    Self { path: None }
  }

  pub fn path(&self) -> Option<&Path>
  {
    self.path.as_deref()
  }

  /// Load the preferences. Never fails: a missing or broken file gives the
  /// defaults.
  pub fn load(&self) -> Config
  {
    let Some(path) = self.path.as_ref()
    else
    {
      return Config::default();
    };
    match fs::read_to_string(path)
    {
      Ok(text) => Config::from_toml_or_default(&text),
      Err(e) =>
      {
        if e.kind() != io::ErrorKind::NotFound
        {
          log::warn!("[config] cannot read {}: {}", path.display(), e);
        }
        Config::default()
      }
    }
  }

  /// Persist the preferences, creating the parent directory when needed.
  pub fn save(
    &self,
    cfg: &Config,
  ) -> io::Result<()>
  {
    let Some(path) = self.path.as_ref()
    else
    {
      return Ok(());
    };
    if let Some(parent) = path.parent()
    {
      fs::create_dir_all(parent)?;
    }
    let text = toml::to_string(cfg).map_err(io::Error::other)?;
    fs::write(path, text)?;
    log::debug!("[config] saved {}", path.display());
    Ok(())
  }
}
