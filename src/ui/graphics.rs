//! Inline image support via the kitty graphics protocol.

use std::path::Path;

use base64::{
  Engine as _,
  engine::general_purpose::STANDARD,
};

/// Deletes every image placement with id 1. Sent before each frame.
pub const CLEAR_IMAGES: &str = "\x1b_Ga=d,d=i,i=1\x1b\\";

/// Transmit-and-display sequence for the file at `path`, scaled to
/// `cols` x `rows` cells. The cursor is not moved (`C=1`).
pub fn display_image_sequence(
  path: &Path,
  cols: u16,
  rows: u16,
) -> String
{
  let encoded = STANDARD.encode(path.as_os_str().as_encoded_bytes());
  format!("\x1b_Ga=T,t=f,i=1,z=0,C=1,c={},r={};{}\x1b\\", cols, rows, encoded)
}

/// Whether the running terminal understands the kitty graphics protocol.
pub fn detect_inline_images() -> bool
{
  detect_inline_images_with(|key| std::env::var(key).ok())
}

pub fn detect_inline_images_with<F>(lookup: F) -> bool
where
  F: Fn(&str) -> Option<String>,
{
  if lookup("TERM").is_some_and(|t| t.contains("kitty"))
  {
    return true;
  }
  if lookup("TERM_PROGRAM").is_some_and(|p| p.contains("WezTerm") || p.contains("ghostty"))
  {
    return true;
  }
  lookup("KONSOLE_VERSION").is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests
{
  use std::collections::HashMap;

  use super::*;

  fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String>
  {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
  }

  #[test]
  fn detection_rules()
  {
    assert!(detect_inline_images_with(env_of(&[("TERM", "xterm-kitty")])));
    assert!(detect_inline_images_with(env_of(&[("TERM_PROGRAM", "WezTerm")])));
    assert!(detect_inline_images_with(env_of(&[("TERM_PROGRAM", "ghostty")])));
    assert!(detect_inline_images_with(env_of(&[("KONSOLE_VERSION", "230804")])));
    assert!(!detect_inline_images_with(env_of(&[("KONSOLE_VERSION", "")])));
    assert!(!detect_inline_images_with(env_of(&[("TERM", "xterm-256color")])));
  }

  #[test]
  fn display_sequence_encodes_path()
  {
    let seq = display_image_sequence(Path::new("/tmp/a.png"), 40, 20);
    assert_eq!(seq, "\x1b_Ga=T,t=f,i=1,z=0,C=1,c=40,r=20;L3RtcC9hLnBuZw==\x1b\\");
  }
}
