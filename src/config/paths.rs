use std::{
  env,
  path::{
    Path,
    PathBuf,
  },
};

pub const CONFIG_DIR_ENV: &str = "DUOPANE_CONFIG_DIR";

/// Resolved configuration locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths
{
  pub root:         PathBuf,
  /// `config.toml` with the persisted preferences.
  pub config_file:  PathBuf,
  /// `scripts/colors.lua` defining the `Colors` table.
  pub theme_script: PathBuf,
}

impl ConfigPaths
{
  pub fn under(root: PathBuf) -> Self
  {
    Self {
      config_file: root.join("config.toml"),
      theme_script: root.join("scripts").join("colors.lua"),
      root,
    }
  }
}

/// Discover the effective configuration directory.
///
/// Checks `DUOPANE_CONFIG_DIR`, then `XDG_CONFIG_HOME/duopane`.
///
/// Platform-specific fallbacks:
/// - Unix: `~/.config/duopane`
/// - Windows: `%APPDATA%\\duopane`, then `%USERPROFILE%\\.config\\duopane`
pub fn discover_config_paths() -> ConfigPaths
{
  fn non_empty(key: &str) -> Option<String>
  {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
  }

  let root = if let Some(over) = non_empty(CONFIG_DIR_ENV)
  {
    PathBuf::from(over)
  }
  else if let Some(xdg) = non_empty("XDG_CONFIG_HOME")
  {
    Path::new(&xdg).join("duopane")
  }
  else
  {
    #[cfg(windows)]
    {
      if let Some(app) = non_empty("APPDATA")
      {
        Path::new(&app).join("duopane")
      }
      else if let Some(up) = non_empty("USERPROFILE")
      {
        Path::new(&up).join(".config").join("duopane")
      }
      else
      {
        Path::new(".config").join("duopane")
      }
    }
    #[cfg(not(windows))]
    {
      if let Some(home) = non_empty("HOME")
      {
        Path::new(&home).join(".config").join("duopane")
      }
      else
      {
        Path::new(".config").join("duopane")
      }
    }
  };
  ConfigPaths::under(root)
}
