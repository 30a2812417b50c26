use std::{
  ffi::OsStr,
  fs::File,
  io,
  path::MAIN_SEPARATOR,
  sync::OnceLock,
  time::Duration,
};

use super::{
  PreviewContent,
  PreviewRequest,
  extensions,
};
use crate::{
  core::{
    archive::{
      self,
      ArchiveFormat,
    },
    listing::read_dir_sorted,
    proc::{
      self,
      DEFAULT_WAIT,
      MAX_CAPTURE_LINES,
    },
  },
  util::{
    read_file_head,
    sanitize_ansi_line,
    sanitize_line,
  },
};

const PROBE_WAIT: Duration = Duration::from_secs(1);
const MAX_GRAPHICS_BYTES: usize = 8 * 1024 * 1024;

static BAT_AVAILABLE: OnceLock<bool> = OnceLock::new();

fn bat_available() -> bool
{
  *BAT_AVAILABLE.get_or_init(|| {
    let ok = proc::run_capture("bat", ["--version"], None, 1, PROBE_WAIT)
      .map(|c| c.success())
      .unwrap_or(false);
    log::debug!("[preview] bat available: {}", ok);
    ok
  })
}

pub(super) fn always(_req: &PreviewRequest<'_>) -> bool
{
  true
}

pub(super) fn is_directory(req: &PreviewRequest<'_>) -> bool
{
  req.entry.is_dir()
}

pub(super) fn is_image(req: &PreviewRequest<'_>) -> bool
{
  extensions::is_image(&req.entry.extension)
}

pub(super) fn is_media(req: &PreviewRequest<'_>) -> bool
{
  extensions::is_media(&req.entry.extension)
}

pub(super) fn is_archive(req: &PreviewRequest<'_>) -> bool
{
  extensions::is_archive(&req.entry.extension)
}

pub(super) fn is_binary(req: &PreviewRequest<'_>) -> bool
{
  extensions::is_binary(&req.entry.extension)
}

pub(super) fn is_too_large(req: &PreviewRequest<'_>) -> bool
{
  req.entry.size().is_some_and(|s| s > extensions::MAX_TEXT_BYTES)
}

pub(super) fn directory(req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  match read_dir_sorted(&req.entry.path, req.show_hidden)
  {
    Ok(children) => Ok(Some(PreviewContent::Lines(
      children
        .iter()
        .take(req.max_lines)
        .map(|c| if c.is_dir() { format!("{}{}", c.name, MAIN_SEPARATOR) } else { c.name.clone() })
        .collect(),
    ))),
    Err(e) if e.kind() == io::ErrorKind::PermissionDenied =>
    {
      Ok(Some(PreviewContent::message("Access Denied")))
    }
    Err(e) => Err(e),
  }
}

pub(super) fn image(req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  if req.inline_images
  {
    return Ok(Some(PreviewContent::ImagePath(req.entry.path.clone())));
  }
  if let Some(backend) = req.graphics_backend
  {
    let size = format!("{}x{}", req.width, req.max_lines);
    let args: [&OsStr; 5] = [
      OsStr::new("--format"),
      OsStr::new(backend),
      OsStr::new("--size"),
      OsStr::new(&size),
      req.entry.path.as_os_str(),
    ];
    match proc::run_capture_bytes("chafa", args, MAX_GRAPHICS_BYTES, DEFAULT_WAIT)
    {
      Ok((bytes, status)) if !bytes.is_empty() && status.is_none_or(|s| s.success()) =>
      {
        return Ok(Some(PreviewContent::RawGraphics(bytes)));
      }
      Ok((_, status)) => log::debug!("[preview] chafa produced nothing (status={:?})", status),
      Err(e) => log::debug!("[preview] chafa unavailable: {}", e),
    }
  }
  Ok(Some(PreviewContent::message("Image file (No preview)")))
}

pub(super) fn media(req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  let captured = match proc::run_capture(
    "mediainfo",
    [req.entry.path.as_os_str()],
    None,
    MAX_CAPTURE_LINES,
    DEFAULT_WAIT,
  )
  {
    Ok(c) => c,
    Err(e) =>
    {
      log::debug!("[preview] mediainfo unavailable: {}", e);
      return Ok(None);
    }
  };
  if captured.lines.iter().all(|l| l.trim().is_empty())
  {
    return Ok(None);
  }
  Ok(Some(PreviewContent::Lines(
    captured.lines.iter().take(req.max_lines).map(|l| sanitize_line(l)).collect(),
  )))
}

pub(super) fn archive(req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  let names = match archive::detect(&req.entry.name).map(|(f, _)| f)
  {
    Some(ArchiveFormat::Zip) => zip_entry_names(req)?,
    Some(ArchiveFormat::Tar | ArchiveFormat::TarGz | ArchiveFormat::TarXz) =>
    {
      tool_listing("tar", &["-tf"], req)?
    }
    Some(ArchiveFormat::SevenZip) | None => tool_listing("7z", &["l"], req)?,
  };
  Ok(Some(PreviewContent::Lines(names)))
}

fn zip_entry_names(req: &PreviewRequest<'_>) -> io::Result<Vec<String>>
{
  let file = File::open(&req.entry.path)?;
  let mut archive = zip::ZipArchive::new(file).map_err(io::Error::other)?;
  let count = archive.len().min(req.max_lines);
  let mut names = Vec::with_capacity(count);
  for i in 0..count
  {
    let entry = archive.by_index_raw(i).map_err(io::Error::other)?;
    names.push(sanitize_line(entry.name()));
  }
  Ok(names)
}

fn tool_listing(
  tool: &str,
  flags: &[&str],
  req: &PreviewRequest<'_>,
) -> io::Result<Vec<String>>
{
  let mut args: Vec<&OsStr> = flags.iter().map(OsStr::new).collect();
  args.push(req.entry.path.as_os_str());
  let captured = proc::run_capture(tool, args, None, MAX_CAPTURE_LINES, DEFAULT_WAIT)?;
  if captured.lines.is_empty() && !captured.success()
  {
    return Err(io::Error::other(format!("{} could not list the archive", tool)));
  }
  Ok(captured.lines.iter().take(req.max_lines).map(|l| sanitize_line(l)).collect())
}

pub(super) fn binary(_req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  Ok(Some(PreviewContent::message("Binary file")))
}

pub(super) fn too_large(_req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  Ok(Some(PreviewContent::message("File too large to preview")))
}

pub(super) fn text(req: &PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>
{
  if req.max_lines == 0
  {
    return Ok(Some(PreviewContent::Lines(Vec::new())));
  }
  if bat_available()
  {
    let range = format!("--line-range=:{}", req.max_lines);
    let args: [&OsStr; 5] = [
      OsStr::new("--color=always"),
      OsStr::new("--style=plain"),
      OsStr::new("--paging=never"),
      OsStr::new(&range),
      req.entry.path.as_os_str(),
    ];
    match proc::run_capture("bat", args, None, req.max_lines, DEFAULT_WAIT)
    {
      Ok(c) if c.success() || !c.lines.is_empty() =>
      {
        return Ok(Some(PreviewContent::Lines(c.lines.iter().map(|l| sanitize_ansi_line(l)).collect())));
      }
      Ok(_) => log::debug!("[preview] bat failed for {}", req.entry.path.display()),
      Err(e) => log::debug!("[preview] bat spawn failed: {}", e),
    }
  }
  let lines = read_file_head(&req.entry.path, req.max_lines)?;
  Ok(Some(PreviewContent::Lines(lines.iter().map(|l| sanitize_line(l)).collect())))
}
