//! File-backed diagnostics.
//!
//! Tracing is off unless `DUOPANE_TRACE` is set or `--trace` is passed.
//! When enabled, a [`simplelog::WriteLogger`] is installed and every
//! `log::debug!`/`info!`/`warn!` in the crate lands in the trace file.

use std::{
  fs::OpenOptions,
  path::PathBuf,
};

use simplelog::{
  ConfigBuilder,
  LevelFilter,
  WriteLogger,
};

pub const TRACE_ENV: &str = "DUOPANE_TRACE";
pub const TRACE_FILE_ENV: &str = "DUOPANE_TRACE_FILE";

pub fn enabled() -> bool
{
  std::env::var(TRACE_ENV).map(|v| !v.is_empty() && v != "0").unwrap_or(false)
}

/// Install the file logger when tracing is requested (`force`) or enabled
/// through the environment. `file` overrides [`file_path`]. Failures to open
/// the file leave logging disabled.
pub fn init(
  force: bool,
  file: Option<PathBuf>,
)
{
  if !force && !enabled()
  {
    return;
  }
  let path = file.unwrap_or_else(file_path);
  let file = match OpenOptions::new().create(true).append(true).open(&path)
  {
    Ok(f) => f,
    Err(e) =>
    {
      eprintln!("duopane: cannot open trace file {}: {}", path.display(), e);
      return;
    }
  };
  let cfg = ConfigBuilder::new().set_time_format_rfc3339().build();
  let _ = WriteLogger::init(LevelFilter::Debug, cfg, file);
  log::info!("[trace] logging to {}", path.display());
}

/// Install a panic hook that logs panic message, location, and backtrace
/// to the trace log and attempts to restore the terminal state so the
/// panic is visible to the user.
pub fn install_panic_hook()
{
  std::panic::set_hook(Box::new(|info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    let bt = std::backtrace::Backtrace::force_capture();
    log::error!("[panic] {msg} @ {loc}");
    log::error!("[panic] backtrace:\n{bt}");
    // Best-effort terminal restore so the panic is visible
    let _ = crossterm::terminal::disable_raw_mode();
    let mut out = std::io::stdout();
    let _ = crossterm::execute!(
      out,
      crossterm::terminal::LeaveAlternateScreen,
      crossterm::cursor::Show
    );
    eprintln!("duopane panicked: {msg} @ {loc}");
  }));
}

pub fn file_path() -> PathBuf
{
  if let Ok(fp) = std::env::var(TRACE_FILE_ENV)
    && !fp.is_empty()
  {
    return PathBuf::from(fp);
  }
  std::env::temp_dir().join("duopane-trace.log")
}
