use std::time::SystemTime;

/// Date column format in the file list.
pub const LIST_DATE_FORMAT: &str = "%b %d %H:%M";

pub fn human_size(bytes: u64) -> String
{
  const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
  let mut val = bytes as f64;
  let mut idx = 0usize;
  while val >= 1024.0 && idx + 1 < UNITS.len()
  {
    val /= 1024.0;
    idx += 1;
  }
  if idx == 0
  {
    format!("{} {}", bytes, UNITS[idx])
  }
  else
  {
    format!("{:.1} {}", val, UNITS[idx])
  }
}

pub fn format_time_abs(
  t: SystemTime,
  fmt: &str,
) -> String
{
  use chrono::{
    DateTime,
    Local,
  };
  let dt: DateTime<Local> = DateTime::from(t);
  dt.format(fmt).to_string()
}

/// Date column text for an entry; blank when the time is unknown.
pub fn list_date(t: Option<SystemTime>) -> String
{
  t.map(|t| format_time_abs(t, LIST_DATE_FORMAT)).unwrap_or_default()
}
