use std::{
  collections::HashMap,
  fs,
  path::Path,
};

use mlua::{
  Table,
  Value,
};
use ratatui::style::Color;

use super::LuaEngine;
use crate::ui::colors::parse_color;

/// Named colour roles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole
{
  HeaderPath,
  HeaderTitle,
  Border,
  ListSelectedBg,
  ListSelectedFg,
  ListMultiSelectedFg,
  ListDirectory,
  ListExecutable,
  ListDefault,
  Footer,
  ErrorBg,
  ErrorFg,
  Confirmation,
}

impl ThemeRole
{
  pub const ALL: [ThemeRole; 13] = [
    ThemeRole::HeaderPath,
    ThemeRole::HeaderTitle,
    ThemeRole::Border,
    ThemeRole::ListSelectedBg,
    ThemeRole::ListSelectedFg,
    ThemeRole::ListMultiSelectedFg,
    ThemeRole::ListDirectory,
    ThemeRole::ListExecutable,
    ThemeRole::ListDefault,
    ThemeRole::Footer,
    ThemeRole::ErrorBg,
    ThemeRole::ErrorFg,
    ThemeRole::Confirmation,
  ];

  /// Key used in the `Colors` table.
  pub fn key(self) -> &'static str
  {
    match self
    {
      ThemeRole::HeaderPath => "HeaderPath",
      ThemeRole::HeaderTitle => "HeaderTitle",
      ThemeRole::Border => "Border",
      ThemeRole::ListSelectedBg => "ListSelectedBg",
      ThemeRole::ListSelectedFg => "ListSelectedFg",
      ThemeRole::ListMultiSelectedFg => "ListMultiSelectedFg",
      ThemeRole::ListDirectory => "ListDirectory",
      ThemeRole::ListExecutable => "ListExecutable",
      ThemeRole::ListDefault => "ListDefault",
      ThemeRole::Footer => "Footer",
      ThemeRole::ErrorBg => "ErrorBg",
      ThemeRole::ErrorFg => "ErrorFg",
      ThemeRole::Confirmation => "Confirmation",
    }
  }

  pub fn from_key(key: &str) -> Option<ThemeRole>
  {
    ThemeRole::ALL.iter().copied().find(|r| r.key() == key)
  }

  fn default_color(self) -> Color
  {
    match self
    {
      ThemeRole::HeaderPath => Color::Magenta,
      ThemeRole::HeaderTitle => Color::DarkGray,
      ThemeRole::Border => Color::White,
      ThemeRole::ListSelectedBg => Color::DarkGray,
      ThemeRole::ListSelectedFg => Color::White,
      ThemeRole::ListMultiSelectedFg => Color::Yellow,
      ThemeRole::ListDirectory => Color::LightBlue,
      ThemeRole::ListExecutable => Color::LightGreen,
      ThemeRole::ListDefault => Color::Gray,
      ThemeRole::Footer => Color::DarkGray,
      ThemeRole::ErrorBg => Color::Red,
      ThemeRole::ErrorFg => Color::White,
      ThemeRole::Confirmation => Color::Yellow,
    }
  }
}

/// Role to colour map. Always complete: every role has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme
{
  colors: HashMap<ThemeRole, Color>,
}

impl Default for Theme
{
  fn default() -> Self
  {
    Self { colors: ThemeRole::ALL.iter().map(|r| (*r, r.default_color())).collect() }
  }
}

impl Theme
{
  pub fn get(
    &self,
    role: ThemeRole,
  ) -> Color
  {
    self.colors.get(&role).copied().unwrap_or(Color::White)
  }

  /// Lookup by role name; unknown names resolve to white.
  pub fn get_color(
    &self,
    name: &str,
  ) -> Color
  {
    ThemeRole::from_key(name).map(|r| self.get(r)).unwrap_or(Color::White)
  }

  pub fn set(
    &mut self,
    role: ThemeRole,
    color: Color,
  )
  {
    self.colors.insert(role, color);
  }

  /// Load the theme script at `path`. A missing file is silent; script
  /// errors are logged. Either way the defaults fill any gaps.
  pub fn load(path: &Path) -> Theme
  {
    match fs::read_to_string(path)
    {
      Ok(code) => Theme::from_lua_source(&code, &path.display().to_string()),
      Err(e) =>
      {
        if e.kind() != std::io::ErrorKind::NotFound
        {
          log::warn!("[theme] cannot read {}: {}", path.display(), e);
        }
        Theme::default()
      }
    }
  }

  /// Evaluate Lua `code` and merge its `Colors` table (or a returned table)
  /// over the defaults.
  pub fn from_lua_source(
    code: &str,
    chunk_name: &str,
  ) -> Theme
  {
    let mut theme = Theme::default();
    if let Err(e) = theme.merge_script(code, chunk_name)
    {
      log::warn!("[theme] {}: {}", chunk_name, e);
    }
    theme
  }

  fn merge_script(
    &mut self,
    code: &str,
    chunk_name: &str,
  ) -> mlua::Result<()>
  {
    let engine = LuaEngine::new()?;
    let table = engine.eval_table(code, chunk_name, "Colors")?;
    match table
    {
      Some(t) => self.merge_table(&t),
      None => log::debug!("[theme] {} defines no Colors table", chunk_name),
    }
    Ok(())
  }

  fn merge_table(
    &mut self,
    tbl: &Table,
  )
  {
    for (key, value) in tbl.pairs::<String, Value>().flatten()
    {
      let Some(role) = ThemeRole::from_key(&key)
      else
      {
        log::debug!("[theme] ignoring unknown role {}", key);
        continue;
      };
      let parsed = match &value
      {
        Value::String(s) => s.to_str().ok().and_then(|s| parse_color(&s)),
        _ => None,
      };
      match parsed
      {
        Some(c) =>
        {
          self.colors.insert(role, c);
        }
        None => log::warn!("[theme] invalid colour for {}, keeping default", key),
      }
    }
  }
}
