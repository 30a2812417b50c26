//! Cursor and scroll-window arithmetic for the list pane.
//!
//! After every mutating call the window holds
//! `offset <= selected < offset + height`, with `selected < len` when the
//! list is non-empty and both fields zero when it is empty.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor
{
  selected: usize,
  offset:   usize,
}

impl ListCursor
{
  pub fn selected(&self) -> usize
  {
    self.selected
  }

  pub fn offset(&self) -> usize
  {
    self.offset
  }

  pub fn reset(&mut self)
  {
    self.selected = 0;
    self.offset = 0;
  }

  /// Move by `delta` rows, stopping at the list edges, then scroll by the
  /// minimum amount needed to keep the selection visible.
  pub fn move_by(
    &mut self,
    delta: isize,
    len: usize,
    height: usize,
  )
  {
    if len == 0
    {
      self.reset();
      return;
    }
    let target = (self.selected as isize).saturating_add(delta);
    self.selected = target.clamp(0, len as isize - 1) as usize;
    self.offset = self.offset.min(len.saturating_sub(height.max(1)));
    self.scroll_into_view(len, height);
  }

  pub fn jump_start(&mut self)
  {
    self.reset();
  }

  pub fn jump_end(
    &mut self,
    len: usize,
    height: usize,
  )
  {
    self.selected = len.saturating_sub(1);
    self.offset = len.saturating_sub(height.max(1));
  }

  /// Place the cursor on `idx` (clamped) and scroll it into view.
  pub fn select(
    &mut self,
    idx: usize,
    len: usize,
    height: usize,
  )
  {
    self.selected = idx;
    self.clamp(len, height);
  }

  /// Re-establish the invariants after the list length or the viewport
  /// height changed.
  pub fn clamp(
    &mut self,
    len: usize,
    height: usize,
  )
  {
    if len == 0
    {
      self.reset();
      return;
    }
    self.selected = self.selected.min(len - 1);
    self.offset = self.offset.min(len.saturating_sub(height.max(1)));
    self.scroll_into_view(len, height);
  }

  fn scroll_into_view(
    &mut self,
    len: usize,
    height: usize,
  )
  {
    let height = height.max(1);
    if self.selected < self.offset
    {
      self.offset = self.selected;
    }
    else if self.selected >= self.offset + height
    {
      self.offset = self.selected + 1 - height;
    }
    debug_assert!(self.offset <= len.saturating_sub(height));
  }
}
