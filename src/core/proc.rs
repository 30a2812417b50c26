//! The single "run a program, capture stdout, bounded wait" primitive used by
//! every adapter that shells out for preview content.
//!
//! Stdout is drained first (to end-of-stream or the line cap) and only then is
//! the child given `wait` to exit. A child still running after that is left
//! alone; it is never killed.

use std::{
  ffi::OsStr,
  io::{
    self,
    BufReader,
    Read,
  },
  path::Path,
  process::{
    Command,
    ExitStatus,
    Stdio,
  },
  thread,
  time::{
    Duration,
    Instant,
  },
};

/// Default post-drain wait for preview tools.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(100);

/// Upper bound on captured lines for preview tools.
pub const MAX_CAPTURE_LINES: usize = 200;

const POLL_STEP: Duration = Duration::from_millis(5);

#[derive(Debug, Clone, Default)]
pub struct Captured
{
  pub lines:  Vec<String>,
  /// `None` when the child had not exited within the bounded wait.
  pub status: Option<ExitStatus>,
}

impl Captured
{
  pub fn success(&self) -> bool
  {
    self.status.map(|s| s.success()).unwrap_or(false)
  }
}

/// Run `program` with `args`, capture up to `max_lines` of stdout, then wait
/// at most `wait` for it to exit. Spawn failures (e.g. the tool is missing)
/// come back as `Err`.
pub fn run_capture<I, S>(
  program: &str,
  args: I,
  cwd: Option<&Path>,
  max_lines: usize,
  wait: Duration,
) -> io::Result<Captured>
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut child = capture_command(program, args, cwd).spawn()?;
  let lines = match child.stdout.take()
  {
    Some(out) => crate::util::read_lines_lossy(BufReader::new(out), max_lines)?,
    None => Vec::new(),
  };
  let status = wait_bounded(&mut child, wait)?;
  log::debug!(
    "[proc] {} -> {} lines, status={:?}",
    program,
    lines.len(),
    status.map(|s| s.code())
  );
  Ok(Captured { lines, status })
}

/// Like [`run_capture`] but keeps stdout as raw bytes (at most
/// `max_bytes`). Used for graphics payloads that are not line oriented.
pub fn run_capture_bytes<I, S>(
  program: &str,
  args: I,
  max_bytes: usize,
  wait: Duration,
) -> io::Result<(Vec<u8>, Option<ExitStatus>)>
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut child = capture_command(program, args, None).spawn()?;
  let mut buf = Vec::new();
  if let Some(out) = child.stdout.take()
  {
    out.take(max_bytes as u64).read_to_end(&mut buf)?;
  }
  let status = wait_bounded(&mut child, wait)?;
  log::debug!("[proc] {} -> {} bytes, status={:?}", program, buf.len(), status.map(|s| s.code()));
  Ok((buf, status))
}

fn capture_command<I, S>(
  program: &str,
  args: I,
  cwd: Option<&Path>,
) -> Command
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut cmd = Command::new(program);
  cmd.args(args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::null());
  if let Some(dir) = cwd
  {
    cmd.current_dir(dir);
  }
  cmd
}

/// Run `program` to completion with stdout discarded and stderr captured.
/// Used for archivers, whose output would otherwise scribble over the UI.
pub fn run_quiet<I, S>(
  program: &str,
  args: I,
  cwd: Option<&Path>,
) -> io::Result<(ExitStatus, String)>
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut cmd = Command::new(program);
  cmd.args(args).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::piped());
  if let Some(dir) = cwd
  {
    cmd.current_dir(dir);
  }
  let mut child = cmd.spawn()?;
  let mut err = String::new();
  if let Some(mut stderr) = child.stderr.take()
  {
    let mut buf = Vec::new();
    stderr.read_to_end(&mut buf)?;
    err = String::from_utf8_lossy(&buf).trim().to_string();
  }
  let status = child.wait()?;
  log::debug!("[proc] {} exited {:?}", program, status.code());
  Ok((status, err))
}

fn wait_bounded(
  child: &mut std::process::Child,
  wait: Duration,
) -> io::Result<Option<ExitStatus>>
{
  let deadline = Instant::now() + wait;
  loop
  {
    if let Some(status) = child.try_wait()?
    {
      return Ok(Some(status));
    }
    if Instant::now() >= deadline
    {
      return Ok(None);
    }
    thread::sleep(POLL_STEP);
  }
}
