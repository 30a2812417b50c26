//! Preview glue: build a request for the highlighted entry.

use crate::{
  app::App,
  preview::{
    self,
    PreviewContent,
    PreviewRequest,
  },
};

impl App
{
  pub fn preview_request(
    &self,
    width: u16,
    height: usize,
  ) -> Option<PreviewRequest<'_>>
  {
    let entry = self.selected_entry()?;
    Some(PreviewRequest {
      entry,
      max_lines: height,
      width,
      inline_images: self.inline_images,
      show_hidden: self.config.show_hidden_files,
      graphics_backend: self.config.graphics_backend(),
    })
  }

  /// Preview content for the highlighted entry sized to a `width` x
  /// `height` pane; empty when the listing is empty.
  pub fn preview(
    &self,
    width: u16,
    height: usize,
  ) -> PreviewContent
  {
    match self.preview_request(width, height)
    {
      Some(req) => preview::resolve(&req),
      None => PreviewContent::Lines(Vec::new()),
    }
  }
}
