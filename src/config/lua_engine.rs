use mlua::{
  Lua,
  LuaOptions,
  Result as LuaResult,
  StdLib,
  Table,
  Value,
};

/// Sandboxed Lua runtime for theme scripts.
///
/// Only the string, table and math libraries are loaded on top of the base
/// library; there is no `io`, `os`, `debug` or `package`.
pub struct LuaEngine
{
  lua: Lua,
}

impl LuaEngine
{
  pub fn new() -> LuaResult<Self>
  {
    let lua = Lua::new_with(StdLib::STRING | StdLib::TABLE | StdLib::MATH, LuaOptions::default())?;
    Ok(Self { lua })
  }

  /// Run `code` and pick the table it defines: the global `name` when the
  /// script assigned one, otherwise the script's return value.
  pub fn eval_table(
    &self,
    code: &str,
    chunk_name: &str,
    name: &str,
  ) -> LuaResult<Option<Table>>
  {
    let returned: Value = self.lua.load(code).set_name(chunk_name).eval()?;
    if let Value::Table(t) = self.lua.globals().get::<Value>(name)?
    {
      return Ok(Some(t));
    }
    match returned
    {
      Value::Table(t) => Ok(Some(t)),
      _ => Ok(None),
    }
  }
}
