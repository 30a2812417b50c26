//! Error type shared by file operations and external tool adapters.

use std::{
  io,
  path::PathBuf,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error
{
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error("Source no longer exists: {}", .0.display())]
  SourceMissing(PathBuf),

  #[error("'{}' already exists", .0.display())]
  AlreadyExists(PathBuf),

  #[error("cannot place '{}' inside itself", .0.display())]
  IntoItself(PathBuf),

  #[error("'{}' is not a supported archive", .0.display())]
  NotAnArchive(PathBuf),

  #[error("{0} is not installed")]
  ToolMissing(&'static str),

  #[error("{tool} failed ({status}): {detail}")]
  ToolFailed
  {
    tool:   String,
    status: String,
    detail: String,
  },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error
{
  /// Map a spawn failure to [`Error::ToolMissing`] when the program was not
  /// found on PATH.
  pub fn from_spawn(
    tool: &'static str,
    err: io::Error,
  ) -> Self
  {
    if err.kind() == io::ErrorKind::NotFound
    {
      Error::ToolMissing(tool)
    }
    else
    {
      Error::Io(err)
    }
  }
}
