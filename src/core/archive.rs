//! Archive extraction and creation via external tools (`unzip`/`zip`, `tar`,
//! `7z`). Command construction is kept separate from execution so the format
//! rules can be checked without the tools installed.

use std::{
  ffi::OsString,
  path::{
    Path,
    PathBuf,
  },
};

use crate::error::{
  Error,
  Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat
{
  Zip,
  SevenZip,
  Tar,
  TarGz,
  TarXz,
}

/// Suffixes checked longest first so `.tar.gz` wins over `.gz`.
const SUFFIXES: &[(&str, ArchiveFormat)] = &[
  (".tar.gz", ArchiveFormat::TarGz),
  (".tar.xz", ArchiveFormat::TarXz),
  (".tgz", ArchiveFormat::TarGz),
  (".txz", ArchiveFormat::TarXz),
  (".tar", ArchiveFormat::Tar),
  (".zip", ArchiveFormat::Zip),
  (".7z", ArchiveFormat::SevenZip),
  (".rar", ArchiveFormat::SevenZip),
  // A bare `.gz` is a single compressed file, not a tarball.
  (".gz", ArchiveFormat::SevenZip),
];

/// Detect the archive format and the matched suffix from a file name.
pub fn detect(name: &str) -> Option<(ArchiveFormat, &'static str)>
{
  let low = name.to_ascii_lowercase();
  SUFFIXES.iter().find(|(suf, _)| low.ends_with(suf) && low.len() > suf.len()).map(|(s, f)| (*f, *s))
}

/// File name with its archive suffix removed, used as the default extraction
/// directory: `photos.tar.gz` -> `photos`.
pub fn stem_without_archive_ext(name: &str) -> String
{
  match detect(name)
  {
    Some((_, suf)) => name[..name.len() - suf.len()].to_string(),
    None => name.to_string(),
  }
}

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand
{
  pub program: &'static str,
  pub args:    Vec<OsString>,
}

impl ToolCommand
{
  fn new(program: &'static str) -> Self
  {
    Self { program, args: Vec::new() }
  }

  fn arg<S: Into<OsString>>(
    mut self,
    a: S,
  ) -> Self
  {
    self.args.push(a.into());
    self
  }
}

/// Command that extracts `archive` into `dest`. Unknown formats go to `7z`,
/// which understands most containers.
pub fn extract_command(
  archive: &Path,
  dest: &Path,
) -> ToolCommand
{
  let name = archive.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
  match detect(&name).map(|(f, _)| f)
  {
    Some(ArchiveFormat::Zip) => ToolCommand::new("unzip").arg("-q").arg(archive).arg("-d").arg(dest),
    Some(ArchiveFormat::Tar | ArchiveFormat::TarGz | ArchiveFormat::TarXz) =>
    {
      ToolCommand::new("tar").arg("-xf").arg(archive).arg("-C").arg(dest)
    }
    Some(ArchiveFormat::SevenZip) | None =>
    {
      let mut out = OsString::from("-o");
      out.push(dest);
      ToolCommand::new("7z").arg("x").arg("-y").arg(archive).arg(out)
    }
  }
}

/// Command that packs `sources` into `dest`. The format follows the
/// destination's extension; anything unrecognised becomes a zip.
pub fn compress_command(
  sources: &[PathBuf],
  dest: &Path,
) -> ToolCommand
{
  let name = dest.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
  let mut cmd = match detect(&name).map(|(f, _)| f)
  {
    Some(ArchiveFormat::SevenZip) => ToolCommand::new("7z").arg("a").arg(dest),
    Some(ArchiveFormat::Tar) => ToolCommand::new("tar").arg("-cf").arg(dest),
    Some(ArchiveFormat::TarGz) => ToolCommand::new("tar").arg("-czf").arg(dest),
    Some(ArchiveFormat::TarXz) => ToolCommand::new("tar").arg("-cJf").arg(dest),
    Some(ArchiveFormat::Zip) | None => ToolCommand::new("zip").arg("-r").arg("-q").arg(dest),
  };
  for s in sources
  {
    cmd = cmd.arg(s);
  }
  cmd
}

/// Extract `archive` into `dest`, creating `dest` first. Blocks until the
/// tool exits.
pub fn extract(
  archive: &Path,
  dest: &Path,
) -> Result<()>
{
  std::fs::create_dir_all(dest)?;
  run(&extract_command(archive, dest), None)
}

/// Compress `sources` into `dest`. `cwd` is the working directory for the
/// tool so relative source paths stay relative inside the archive.
pub fn compress(
  sources: &[PathBuf],
  dest: &Path,
  cwd: &Path,
) -> Result<()>
{
  run(&compress_command(sources, dest), Some(cwd))
}

fn run(
  cmd: &ToolCommand,
  cwd: Option<&Path>,
) -> Result<()>
{
  log::info!("[archive] {} {:?}", cmd.program, cmd.args);
  let (status, stderr) =
    crate::core::proc::run_quiet(cmd.program, &cmd.args, cwd).map_err(|e| Error::from_spawn(cmd.program, e))?;
  if status.success()
  {
    Ok(())
  }
  else
  {
    Err(Error::ToolFailed {
      tool:   cmd.program.to_string(),
      status: status.code().map(|c| format!("exit {c}")).unwrap_or_else(|| "signal".to_string()),
      detail: stderr.lines().next().unwrap_or("").to_string(),
    })
  }
}
