//! Preview resolution: decide what to show for the highlighted entry.
//!
//! Strategies are tried in table order. The first whose predicate matches
//! runs its producer; a producer returning `Ok(None)` declines and the
//! search continues with the next row. Any error ends the search with a
//! single error line.

pub mod extensions;
mod strategies;

use std::{
  io,
  path::PathBuf,
};

use crate::core::listing::DirEntryInfo;

/// What the preview pane should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent
{
  /// Text lines, possibly carrying SGR colour sequences.
  Lines(Vec<String>),
  /// Terminal graphics bytes written verbatim at the pane origin.
  RawGraphics(Vec<u8>),
  /// Image to be displayed with the inline graphics protocol.
  ImagePath(PathBuf),
}

impl PreviewContent
{
  pub fn message(text: impl Into<String>) -> Self
  {
    PreviewContent::Lines(vec![text.into()])
  }
}

/// Inputs for one preview resolution.
#[derive(Debug, Clone)]
pub struct PreviewRequest<'a>
{
  pub entry:            &'a DirEntryInfo,
  /// Pane height in rows; caps the number of produced lines.
  pub max_lines:        usize,
  /// Pane width in columns.
  pub width:            u16,
  pub inline_images:    bool,
  pub show_hidden:      bool,
  /// `chafa --format` value, when the character-graphics fallback is on.
  pub graphics_backend: Option<&'a str>,
}

type Predicate = fn(&PreviewRequest<'_>) -> bool;
type Producer = fn(&PreviewRequest<'_>) -> io::Result<Option<PreviewContent>>;

struct Strategy
{
  name:    &'static str,
  matches: Predicate,
  produce: Producer,
}

const STRATEGIES: &[Strategy] = &[
  Strategy { name: "directory", matches: strategies::is_directory, produce: strategies::directory },
  Strategy { name: "image", matches: strategies::is_image, produce: strategies::image },
  Strategy { name: "media", matches: strategies::is_media, produce: strategies::media },
  Strategy { name: "archive", matches: strategies::is_archive, produce: strategies::archive },
  Strategy { name: "binary", matches: strategies::is_binary, produce: strategies::binary },
  Strategy { name: "too-large", matches: strategies::is_too_large, produce: strategies::too_large },
  Strategy { name: "text", matches: strategies::always, produce: strategies::text },
];

/// Resolve the preview for `req.entry`.
pub fn resolve(req: &PreviewRequest) -> PreviewContent
{
  for strategy in STRATEGIES
  {
    if !(strategy.matches)(req)
    {
      continue;
    }
    match (strategy.produce)(req)
    {
      Ok(Some(content)) =>
      {
        log::trace!("[preview] {} via {}", req.entry.path.display(), strategy.name);
        return content;
      }
      Ok(None) =>
      {
        log::trace!("[preview] {} declined {}", strategy.name, req.entry.path.display());
      }
      Err(e) =>
      {
        log::debug!("[preview] {} failed for {}: {}", strategy.name, req.entry.path.display(), e);
        return PreviewContent::message(format!("Error reading preview: {}", e));
      }
    }
  }
  PreviewContent::Lines(Vec::new())
}
