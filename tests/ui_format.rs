use std::time::{
  Duration,
  SystemTime,
};

#[test]
fn human_size_basic()
{
  use duopane::ui::format::human_size;
  assert_eq!(human_size(0), "0 B");
  assert_eq!(human_size(999), "999 B");
  assert_eq!(human_size(1024), "1.0 KB");
  assert_eq!(human_size(1536), "1.5 KB");
  assert_eq!(human_size(1024 * 1024), "1.0 MB");
}

#[test]
fn format_time_abs_has_expected_pattern()
{
  use duopane::ui::format::format_time_abs;
  let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
  let s = format_time_abs(t, "%Y-%m-%d %H:%M");
  // Light checks only; the local timezone varies.
  assert!(s.len() >= 10, "unexpected formatted length: {}", s);
  assert!(s.contains('-') && s.contains(':'), "unexpected format: {}", s);
}

#[test]
fn list_date_is_month_day_time_or_blank()
{
  use duopane::ui::format::list_date;
  assert_eq!(list_date(None), "");
  let s = list_date(Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)));
  // "Nov 14 22:13" in UTC; shape only.
  assert_eq!(s.len(), 12, "got: {}", s);
  assert_eq!(&s[6..7], " ");
  assert_eq!(&s[9..10], ":");
}
