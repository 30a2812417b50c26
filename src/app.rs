//! Core application state, used both by the TUI and integration tests.
//!
//! [`App`] owns the current directory, its listing, the cursor window, the
//! multi-selection and the clipboard. Operations that need the user or an
//! external program take a [`Host`](crate::host::Host); everything else is
//! plain state mutation, which keeps the controller testable without a
//! terminal.

mod nav;
mod ops;
mod preview;
mod selection;

use std::{
  collections::HashSet,
  path::{
    Path,
    PathBuf,
  },
};

pub use crate::core::listing::{
  DirEntryInfo,
  EntryKind,
};
use crate::{
  config::{
    Config,
    ConfigPaths,
    ConfigStore,
    Theme,
  },
  core::cursor::ListCursor,
};

const DEFAULT_VIEWPORT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode
{
  Copy,
  Cut,
}

/// Paths captured by a yank or cut, waiting for a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard
{
  pub paths: Vec<PathBuf>,
  pub mode:  ClipboardMode,
}

/// Mutable application state driving the two-pane UI.
pub struct App
{
  pub(crate) cwd:             PathBuf,
  pub(crate) entries:         Vec<DirEntryInfo>,
  pub(crate) cursor:          ListCursor,
  pub(crate) viewport_height: usize,
  pub(crate) marked:          HashSet<PathBuf>,
  pub(crate) clipboard:       Option<Clipboard>,
  pub(crate) config:          Config,
  pub(crate) store:           ConfigStore,
  pub(crate) theme:           Theme,
  pub(crate) inline_images:   bool,
  pub(crate) should_quit:     bool,
}

impl App
{
  /// Start in `start_dir` with preferences and theme read from `paths`.
  /// Unreadable configuration falls back to defaults; an unreadable start
  /// directory leaves the listing empty.
  pub fn initialize(
    start_dir: PathBuf,
    paths: &ConfigPaths,
  ) -> App
  {
    let store = ConfigStore::at(paths.config_file.clone());
    let config = store.load();
    let theme = Theme::load(&paths.theme_script);
    let inline_images = crate::ui::graphics::detect_inline_images();
    log::info!(
      "[app] start in {} (config={}, inline_images={})",
      start_dir.display(),
      paths.config_file.display(),
      inline_images
    );
    let mut app = App::with_parts(start_dir, config, store, theme, inline_images);
    if let Err(e) = app.load_listing()
    {
      log::warn!("[app] initial listing of {} failed: {}", app.cwd.display(), e);
    }
    app
  }

  /// Assemble an `App` from already-loaded parts without touching the
  /// filesystem.
  pub fn with_parts(
    cwd: PathBuf,
    config: Config,
    store: ConfigStore,
    theme: Theme,
    inline_images: bool,
  ) -> App
  {
    App {
      cwd,
      entries: Vec::new(),
      cursor: ListCursor::default(),
      viewport_height: DEFAULT_VIEWPORT,
      marked: HashSet::new(),
      clipboard: None,
      config,
      store,
      theme,
      inline_images,
      should_quit: false,
    }
  }

  pub fn cwd(&self) -> &Path
  {
    &self.cwd
  }

  pub fn entries(&self) -> &[DirEntryInfo]
  {
    &self.entries
  }

  pub fn selected_index(&self) -> usize
  {
    self.cursor.selected()
  }

  pub fn scroll_offset(&self) -> usize
  {
    self.cursor.offset()
  }

  pub fn viewport_height(&self) -> usize
  {
    self.viewport_height
  }

  pub fn selected_entry(&self) -> Option<&DirEntryInfo>
  {
    self.entries.get(self.cursor.selected())
  }

  pub fn is_marked(
    &self,
    path: &Path,
  ) -> bool
  {
    self.marked.contains(path)
  }

  pub fn marked(&self) -> &HashSet<PathBuf>
  {
    &self.marked
  }

  pub fn clipboard(&self) -> Option<&Clipboard>
  {
    self.clipboard.as_ref()
  }

  pub fn config(&self) -> &Config
  {
    &self.config
  }

  pub fn show_hidden(&self) -> bool
  {
    self.config.show_hidden_files
  }

  pub fn theme(&self) -> &Theme
  {
    &self.theme
  }

  pub fn inline_images(&self) -> bool
  {
    self.inline_images
  }

  pub fn should_quit(&self) -> bool
  {
    self.should_quit
  }

  pub fn quit(&mut self)
  {
    log::info!("[app] quit");
    self.should_quit = true;
  }
}
