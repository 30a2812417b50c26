//! Small utility helpers shared across the codebase.

use std::{
  fs::File,
  io::{
    self,
    BufRead,
    BufReader,
  },
  path::Path,
};

/// Read at most `n` lines from the start of `path`. Invalid UTF-8 is
/// replaced rather than aborting the read.
pub fn read_file_head(
  path: &Path,
  n: usize,
) -> io::Result<Vec<String>>
{
  let file = File::open(path)?;
  read_lines_lossy(BufReader::new(file), n)
}

/// Collect up to `n` lines from `reader`, decoding lossily and dropping the
/// line terminator.
pub fn read_lines_lossy<R: BufRead>(
  mut reader: R,
  n: usize,
) -> io::Result<Vec<String>>
{
  let mut lines = Vec::new();
  let mut buf = Vec::new();
  while lines.len() < n
  {
    buf.clear();
    if reader.read_until(b'\n', &mut buf)? == 0
    {
      break;
    }
    while matches!(buf.last(), Some(b'\n') | Some(b'\r'))
    {
      buf.pop();
    }
    lines.push(String::from_utf8_lossy(&buf).into_owned());
  }
  Ok(lines)
}

/// Expand tabs, strip carriage returns, and replace control characters with
/// spaces.
pub fn sanitize_line(s: &str) -> String
{
  let mut out = String::with_capacity(s.len());
  for ch in s.chars()
  {
    match ch
    {
      '\t' => out.push_str("    "),
      '\r' =>
      {}
      c if c.is_control() => out.push(' '),
      c => out.push(c),
    }
  }
  out
}

/// Like [`sanitize_line`] but keeps ESC so colour sequences emitted by
/// tools such as `bat` survive.
pub fn sanitize_ansi_line(s: &str) -> String
{
  let mut out = String::with_capacity(s.len());
  for ch in s.chars()
  {
    match ch
    {
      '\t' => out.push_str("    "),
      '\r' =>
      {}
      '\x1b' => out.push(ch),
      c if c.is_control() => out.push(' '),
      c => out.push(c),
    }
  }
  out
}
