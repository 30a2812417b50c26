//! Preferences, configuration paths and the Lua colour theme.
//!
//! The preferences file is TOML and only ever degrades to defaults: a missing,
//! unreadable or malformed file is logged and otherwise ignored. The theme is
//! a Lua script evaluated in a sandbox (see [`LuaEngine`]).

pub mod lua_engine;
pub mod paths;
pub mod store;
pub mod theme;

use serde::{
  Deserialize,
  Serialize,
};

pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
};
pub use store::ConfigStore;
pub use theme::{
  Theme,
  ThemeRole,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// `[chafa]` section: character-cell graphics fallback for images.
pub struct ChafaConfig
{
  /// Value passed to `chafa --format` (e.g. `symbols`, `sixels`). Unset
  /// disables the fallback.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub backend: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level preferences persisted in `config.toml`.
pub struct Config
{
  #[serde(default)]
  pub show_hidden_files: bool,
  #[serde(default)]
  pub chafa:             ChafaConfig,
}

impl Config
{
  /// Parse TOML text. A file that is not valid TOML is scanned line by line
  /// instead, so hand-written `key = value` lines still apply and anything
  /// unrecognised is skipped.
  pub fn from_toml_or_default(text: &str) -> Self
  {
    match toml::from_str::<Config>(text)
    {
      Ok(cfg) => cfg,
      Err(e) =>
      {
        log::warn!("[config] not valid TOML, scanning lines: {}", e);
        Config::scan_lines(text)
      }
    }
  }

  fn scan_lines(text: &str) -> Self
  {
    let mut cfg = Config::default();
    let mut section = String::new();
    for raw in text.lines()
    {
      let line = raw.trim();
      if line.is_empty() || line.starts_with('#')
      {
        continue;
      }
      if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']'))
      {
        section = name.trim().to_ascii_lowercase();
        continue;
      }
      let Some((key, value)) = line.split_once('=')
      else
      {
        log::debug!("[config] ignoring line '{}'", line);
        continue;
      };
      let key = key.trim().to_ascii_lowercase();
      let value = unquote(value.trim());
      match (section.as_str(), key.as_str())
      {
        ("", "show_hidden_files") => match value.to_ascii_lowercase().as_str()
        {
          "true" => cfg.show_hidden_files = true,
          "false" => cfg.show_hidden_files = false,
          other => log::debug!("[config] ignoring show_hidden_files = {}", other),
        },
        ("chafa", "backend") if !value.is_empty() => cfg.chafa.backend = Some(value.to_string()),
        _ => log::debug!("[config] ignoring line '{}'", line),
      }
    }
    cfg
  }

  /// Configured chafa backend, ignoring blank values.
  pub fn graphics_backend(&self) -> Option<&str>
  {
    self.chafa.backend.as_deref().map(str::trim).filter(|s| !s.is_empty())
  }
}

fn unquote(value: &str) -> &str
{
  for q in ['"', '\'']
  {
    if let Some(inner) = value.strip_prefix(q).and_then(|v| v.strip_suffix(q))
    {
      return inner;
    }
  }
  value
}
