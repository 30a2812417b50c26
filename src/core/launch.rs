//! Launching external programs for opened files.

use std::{
  path::Path,
  process::{
    Command,
    Stdio,
  },
};

use crate::error::{
  Error,
  Result,
};

const DEFAULT_EDITOR: &str = "nano";

/// Extensions handed to the OS opener instead of the text editor.
pub const OPEN_EXTERNALLY: &[&str] = &[
  "exe", "dll", "bin", "iso", "zip", "tar", "gz", "7z", "png", "jpg", "jpeg", "gif", "bmp", "pdf",
];

pub fn opens_externally(ext: &str) -> bool
{
  OPEN_EXTERNALLY.contains(&ext)
}

/// Editor command from `$EDITOR`, split on whitespace so values such as
/// `code -w` work.
pub fn editor_command() -> (String, Vec<String>)
{
  let raw = std::env::var("EDITOR").ok().filter(|s| !s.trim().is_empty());
  parse_editor(raw.as_deref().unwrap_or(DEFAULT_EDITOR))
}

fn parse_editor(raw: &str) -> (String, Vec<String>)
{
  let mut parts = raw.split_whitespace().map(str::to_string);
  let program = parts.next().unwrap_or_else(|| DEFAULT_EDITOR.to_string());
  (program, parts.collect())
}

/// Run the editor on `path` and wait for it. The terminal must already be
/// released by the caller.
pub fn open_in_editor(path: &Path) -> Result<()>
{
  let (program, args) = editor_command();
  log::info!("[launch] editor {} {}", program, path.display());
  let status = Command::new(&program).args(&args).arg(path).status().map_err(|e| {
    if e.kind() == std::io::ErrorKind::NotFound
    {
      Error::ToolFailed { tool: program.clone(), status: "not found".to_string(), detail: e.to_string() }
    }
    else
    {
      Error::Io(e)
    }
  })?;
  log::debug!("[launch] editor exited {:?}", status.code());
  Ok(())
}

/// Hand `path` to the platform opener without waiting for it.
pub fn open_with_system(path: &Path) -> Result<()>
{
  let mut cmd = system_opener();
  cmd.arg(path).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
  log::info!("[launch] system open {}", path.display());
  cmd.spawn().map(|_| ()).map_err(|e| Error::from_spawn(opener_name(), e))
}

#[cfg(target_os = "macos")]
fn system_opener() -> Command
{
  Command::new("open")
}

#[cfg(windows)]
fn system_opener() -> Command
{
  let mut c = Command::new("cmd");
  c.args(["/C", "start", ""]);
  c
}

#[cfg(not(any(target_os = "macos", windows)))]
fn system_opener() -> Command
{
  Command::new("xdg-open")
}

fn opener_name() -> &'static str
{
  if cfg!(target_os = "macos")
  {
    "open"
  }
  else if cfg!(windows)
  {
    "cmd"
  }
  else
  {
    "xdg-open"
  }
}
