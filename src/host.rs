//! Side-effect seam between the navigation controller and the outside world.
//!
//! Everything that blocks on the user or hands the terminal to another
//! program goes through [`Host`]. The terminal session implements it for the
//! real binary; tests script it.

use std::path::{
  Path,
  PathBuf,
};

use crate::error::Result;

pub trait Host
{
  /// Ask for one line of text. `None` when the user cancelled.
  fn read_input(
    &mut self,
    prompt: &str,
  ) -> Result<Option<String>>;

  /// Ask a yes/no question; only an explicit yes returns `true`.
  fn confirm(
    &mut self,
    question: &str,
  ) -> Result<bool>;

  /// Show an error and wait for acknowledgement.
  fn display_error(
    &mut self,
    message: &str,
  );

  /// Run the text editor on `path` and wait for it to exit.
  fn open_in_editor(
    &mut self,
    path: &Path,
  ) -> Result<()>;

  /// Hand `path` to the platform opener without waiting.
  fn open_with_system(
    &mut self,
    path: &Path,
  ) -> Result<()>;

  /// Run the fuzzy finder rooted at `root`.
  fn run_finder(
    &mut self,
    root: &Path,
  ) -> Result<Option<PathBuf>>;

  fn extract(
    &mut self,
    archive: &Path,
    dest: &Path,
  ) -> Result<()>;

  fn compress(
    &mut self,
    sources: &[PathBuf],
    dest: &Path,
    cwd: &Path,
  ) -> Result<()>;
}
