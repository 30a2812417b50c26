pub mod layout;
mod list;
mod preview;

pub use self::{
  layout::Layout,
  list::{
    draw_list_pane,
    header_text,
    row_style,
    row_text,
  },
  preview::draw_preview_pane,
};
