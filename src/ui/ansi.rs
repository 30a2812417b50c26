use ratatui::{
  style::{
    Color,
    Modifier,
    Style,
  },
  text::Span,
};
use unicode_width::UnicodeWidthChar;

const RESET: &str = "\x1b[0m";

/// Byte length of the escape sequence starting at `i` (where `bytes[i]` is
/// ESC). CSI runs to its final byte, OSC to BEL or ST, charset designators
/// (`ESC ( B`) take one more byte; anything else is a two-byte escape.
/// Unterminated sequences consume the rest of the input.
fn escape_len(
  bytes: &[u8],
  i: usize,
) -> usize
{
  let n = bytes.len();
  if i + 1 >= n
  {
    return n - i;
  }
  match bytes[i + 1]
  {
    b'[' =>
    {
      let mut j = i + 2;
      while j < n && !(0x40..=0x7E).contains(&bytes[j])
      {
        j += 1;
      }
      (j + 1).min(n) - i
    }
    b']' =>
    {
      let mut j = i + 2;
      while j < n
      {
        if bytes[j] == 0x07
        {
          return j + 1 - i;
        }
        if bytes[j] == 0x1B && j + 1 < n && bytes[j + 1] == b'\\'
        {
          return j + 2 - i;
        }
        j += 1;
      }
      n - i
    }
    b'(' | b')' | b'*' | b'+' if i + 2 < n => (2 + utf8_len(bytes[i + 2])).min(n - i),
    b => (1 + utf8_len(b)).min(n - i),
  }
}

fn utf8_len(lead: u8) -> usize
{
  match lead
  {
    0xF0..=0xFF => 4,
    0xE0..=0xEF => 3,
    0xC0..=0xDF => 2,
    _ => 1,
  }
}

/// Display width of `s` with escape sequences excluded.
pub fn visible_width(s: &str) -> usize
{
  let bytes = s.as_bytes();
  let mut width = 0usize;
  let mut i = 0usize;
  while i < bytes.len()
  {
    if bytes[i] == 0x1B
    {
      i += escape_len(bytes, i);
      continue;
    }
    let Some(ch) = s[i..].chars().next()
    else
    {
      break;
    };
    width += ch.width().unwrap_or(0);
    i += ch.len_utf8();
  }
  width
}

/// Cut `s` to at most `max` visible columns. Escape sequences are copied
/// whole, never split. When text was dropped a reset is appended so styles
/// do not bleed past the cut.
pub fn truncate_ansi(
  s: &str,
  max: usize,
) -> String
{
  let bytes = s.as_bytes();
  let mut out = String::with_capacity(s.len().min(max * 4 + 8));
  let mut width = 0usize;
  let mut i = 0usize;
  let mut cut = false;
  while i < bytes.len()
  {
    if bytes[i] == 0x1B
    {
      let len = escape_len(bytes, i);
      out.push_str(&s[i..i + len]);
      i += len;
      continue;
    }
    let Some(ch) = s[i..].chars().next()
    else
    {
      break;
    };
    let w = ch.width().unwrap_or(0);
    if width + w > max
    {
      cut = true;
      break;
    }
    width += w;
    out.push(ch);
    i += ch.len_utf8();
  }
  if cut
  {
    out.push_str(RESET);
  }
  out
}

/// Truncate to `width` columns and pad with spaces to exactly `width`.
pub fn fit_ansi(
  s: &str,
  width: usize,
) -> String
{
  let mut out = truncate_ansi(s, width);
  let have = visible_width(&out);
  for _ in have..width
  {
    out.push(' ');
  }
  out
}

pub fn ansi_spans(s: &str) -> Vec<Span<'_>>
{
  let bytes = s.as_bytes();
  let mut spans: Vec<Span> = Vec::new();
  let mut style = Style::default();
  let mut i: usize = 0;
  let mut seg_start: usize = 0;
  while i < bytes.len()
  {
    if bytes[i] == 0x1B && i + 1 < bytes.len()
    {
      if seg_start < i
      {
        if let Some(seg) = s.get(seg_start..i)
        {
          spans.push(Span::styled(seg.to_string(), style));
        }
      }
      match bytes[i + 1]
      {
        b'[' =>
        {
          i += 2;
          let start = i;
          while i < bytes.len() && !(bytes[i] >= 0x40 && bytes[i] <= 0x7E)
          {
            i += 1;
          }
          if i >= bytes.len()
          {
            break;
          }
          let finalb = bytes[i];
          let params = &s[start..i];
          if finalb == b'm'
          {
            apply_sgr_seq(params, &mut style);
          }
          i += 1;
          seg_start = i;
        }
        b']' =>
        {
          i += 2;
          loop
          {
            if i >= bytes.len()
            {
              break;
            }
            if bytes[i] == 0x07
            {
              i += 1;
              break;
            }
            if bytes[i] == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == b'\\'
            {
              i += 2;
              break;
            }
            i += 1;
          }
          seg_start = i;
        }
        b'(' | b')' | b'*' | b'+' =>
        {
          i += escape_len(bytes, i);
          seg_start = i;
        }
        _ =>
        {
          i += 2;
          seg_start = i;
        }
      }
    }
    else if bytes[i] == b'\r'
    {
      i += 1;
      seg_start = i;
    }
    else
    {
      i += 1;
    }
  }
  if seg_start < bytes.len()
  {
    if let Some(seg) = s.get(seg_start..bytes.len())
    {
      spans.push(Span::styled(seg.to_string(), style));
    }
  }
  spans
}

fn apply_sgr_seq(
  seq: &str,
  style: &mut Style,
)
{
  let nums: Vec<i32> =
    seq.split(';').filter_map(|t| t.parse::<i32>().ok()).collect();
  if nums.is_empty()
  {
    *style = Style::default();
    return;
  }
  let mut i = 0;
  while i < nums.len()
  {
    match nums[i]
    {
      0 =>
      {
        *style = Style::default();
      }
      1 =>
      {
        *style = style.add_modifier(Modifier::BOLD);
      }
      3 =>
      {
        *style = style.add_modifier(Modifier::ITALIC);
      }
      4 =>
      {
        *style = style.add_modifier(Modifier::UNDERLINED);
      }
      22 =>
      {
        *style = style.remove_modifier(Modifier::BOLD);
      }
      23 =>
      {
        *style = style.remove_modifier(Modifier::ITALIC);
      }
      24 =>
      {
        *style = style.remove_modifier(Modifier::UNDERLINED);
      }
      30..=37 =>
      {
        style.fg = Some(basic_color((nums[i] - 30) as u8, false));
      }
      90..=97 =>
      {
        style.fg = Some(basic_color((nums[i] - 90) as u8, true));
      }
      40..=47 =>
      {
        style.bg = Some(basic_color((nums[i] - 40) as u8, false));
      }
      100..=107 =>
      {
        style.bg = Some(basic_color((nums[i] - 100) as u8, true));
      }
      38 =>
      {
        if i + 1 < nums.len()
        {
          match nums[i + 1]
          {
            5 =>
            {
              if i + 2 < nums.len()
              {
                style.fg = Some(Color::Indexed(nums[i + 2] as u8));
                i += 2;
              }
            }
            2 =>
            {
              if i + 4 < nums.len()
              {
                style.fg = Some(Color::Rgb(
                  nums[i + 2] as u8,
                  nums[i + 3] as u8,
                  nums[i + 4] as u8,
                ));
                i += 4;
              }
            }
            _ =>
            {}
          }
        }
      }
      48 =>
      {
        if i + 1 < nums.len()
        {
          match nums[i + 1]
          {
            5 =>
            {
              if i + 2 < nums.len()
              {
                style.bg = Some(Color::Indexed(nums[i + 2] as u8));
                i += 2;
              }
            }
            2 =>
            {
              if i + 4 < nums.len()
              {
                style.bg = Some(Color::Rgb(
                  nums[i + 2] as u8,
                  nums[i + 3] as u8,
                  nums[i + 4] as u8,
                ));
                i += 4;
              }
            }
            _ =>
            {}
          }
        }
      }
      _ =>
      {}
    }
    i += 1;
  }
}

fn basic_color(
  code: u8,
  bright: bool,
) -> Color
{
  match (code, bright)
  {
    (0, false) => Color::Black,
    (1, false) => Color::Red,
    (2, false) => Color::Green,
    (3, false) => Color::Yellow,
    (4, false) => Color::Blue,
    (5, false) => Color::Magenta,
    (6, false) => Color::Cyan,
    (7, false) => Color::Gray,
    (0, true) => Color::DarkGray,
    (1, true) => Color::LightRed,
    (2, true) => Color::LightGreen,
    (3, true) => Color::LightYellow,
    (4, true) => Color::LightBlue,
    (5, true) => Color::LightMagenta,
    (6, true) => Color::LightCyan,
    (7, true) => Color::White,
    _ => Color::White,
  }
}
