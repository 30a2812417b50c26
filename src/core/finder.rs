//! Fuzzy file finder hand-off (`fzf`).
//!
//! The caller must have released the terminal (raw mode off, main screen)
//! before [`run_finder`]; fzf draws on the tty and prints the pick to stdout.

use std::{
  io::Read,
  path::{
    Path,
    PathBuf,
  },
  process::{
    Command,
    Stdio,
  },
};

use crate::error::{
  Error,
  Result,
};

const FZF: &str = "fzf";

pub fn fzf_installed() -> bool
{
  which::which(FZF).is_ok()
}

/// Run fzf rooted at `root` and return the chosen path (absolute), or `None`
/// when the user aborted.
pub fn run_finder(root: &Path) -> Result<Option<PathBuf>>
{
  if !fzf_installed()
  {
    return Err(Error::ToolMissing(FZF));
  }
  log::info!("[finder] fzf in {}", root.display());
  let mut child = Command::new(FZF)
    .current_dir(root)
    .stdout(Stdio::piped())
    .spawn()
    .map_err(|e| Error::from_spawn(FZF, e))?;
  let mut out = String::new();
  if let Some(mut stdout) = child.stdout.take()
  {
    stdout.read_to_string(&mut out)?;
  }
  let status = child.wait()?;
  log::debug!("[finder] exit={:?} picked={:?}", status.code(), out.trim());
  Ok(resolve_pick(root, &out))
}

/// Turn fzf output into an absolute path; blank output means no pick.
pub fn resolve_pick(
  root: &Path,
  output: &str,
) -> Option<PathBuf>
{
  let picked = output.lines().next().map(str::trim).unwrap_or("");
  if picked.is_empty()
  {
    None
  }
  else
  {
    Some(root.join(picked))
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn resolve_pick_joins_relative_and_ignores_blank()
  {
    let root = Path::new("/srv/data");
    assert_eq!(resolve_pick(root, "sub/file.txt\n"), Some(PathBuf::from("/srv/data/sub/file.txt")));
    assert_eq!(resolve_pick(root, "  \n"), None);
    assert_eq!(resolve_pick(root, ""), None);
    assert_eq!(resolve_pick(root, "/abs/pick\n"), Some(PathBuf::from("/abs/pick")));
  }
}
