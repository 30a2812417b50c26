use ratatui::style::Color;

/// Parse a colour name (console palette names, case-insensitive) or
/// `#RRGGBB`.
pub fn parse_color(s: &str) -> Option<Color>
{
  let low = s.trim().to_ascii_lowercase();
  match low.as_str()
  {
    "black" => Some(Color::Black),
    // Bare names are the bright shades; `dark*` selects the dim one.
    "red" | "lightred" => Some(Color::LightRed),
    "darkred" => Some(Color::Red),
    "green" | "lightgreen" => Some(Color::LightGreen),
    "darkgreen" => Some(Color::Green),
    "yellow" | "lightyellow" => Some(Color::LightYellow),
    "darkyellow" => Some(Color::Yellow),
    "blue" | "lightblue" => Some(Color::LightBlue),
    "darkblue" => Some(Color::Blue),
    "magenta" | "purple" | "lightmagenta" => Some(Color::LightMagenta),
    "darkmagenta" => Some(Color::Magenta),
    "cyan" | "lightcyan" => Some(Color::LightCyan),
    "darkcyan" => Some(Color::Cyan),
    "gray" | "grey" => Some(Color::Gray),
    "darkgray" | "darkgrey" => Some(Color::DarkGray),
    "white" => Some(Color::White),
    _ => parse_hex_rgb(&low),
  }
}

fn parse_hex_rgb(s: &str) -> Option<Color>
{
  let t = s.strip_prefix('#')?;
  if t.len() != 6 || !t.is_ascii()
  {
    return None;
  }
  let r = u8::from_str_radix(&t[0..2], 16).ok()?;
  let g = u8::from_str_radix(&t[2..4], 16).ok()?;
  let b = u8::from_str_radix(&t[4..6], 16).ok()?;
  Some(Color::Rgb(r, g, b))
}
