//! Terminal session: setup and teardown, the frame loop, and the real
//! [`Host`] used by the binary.

use std::{
  io::{
    self,
    Stdout,
    Write,
  },
  path::{
    Path,
    PathBuf,
  },
};

use crossterm::{
  cursor::{
    Hide,
    MoveTo,
    Show,
  },
  event::{
    self,
    Event,
    KeyEvent,
    KeyEventKind,
  },
  execute,
  queue,
  style::Print,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    SetTitle,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
  buffer::Buffer,
};

use crate::{
  app::App,
  config::Theme,
  core::{
    archive,
    finder,
    launch,
  },
  error::{
    Error,
    Result,
  },
  host::Host,
  preview::PreviewContent,
  ui::{
    self,
    graphics,
    overlays::{
      self,
      InputOutcome,
      LineInput,
    },
    panes::Layout,
  },
};

const TITLE: &str = "duopane";

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of the browser.
pub struct Session
{
  terminal:      Term,
  theme:         Theme,
  inline_images: bool,
  /// Repaint every cell on the next frame instead of diffing.
  needs_clear:   bool,
  /// Cells of the last full frame, redrawn under blocking overlays.
  last_frame:    Buffer,
  active:        bool,
}

impl Session
{
  pub fn start(
    theme: Theme,
    inline_images: bool,
  ) -> io::Result<Session>
  {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide, SetTitle(TITLE))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    log::debug!("[runtime] session started (inline_images={})", inline_images);
    Ok(Session {
      terminal,
      theme,
      inline_images,
      needs_clear: false,
      last_frame: Buffer::empty(Default::default()),
      active: true,
    })
  }

  /// Restore the terminal. Safe to call more than once.
  pub fn finish(&mut self) -> io::Result<()>
  {
    if !self.active
    {
      return Ok(());
    }
    self.active = false;
    if self.inline_images
    {
      write!(self.terminal.backend_mut(), "{}", graphics::CLEAR_IMAGES)?;
    }
    disable_raw_mode()?;
    execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    log::debug!("[runtime] session finished");
    Ok(())
  }

  fn suspend(&mut self) -> io::Result<()>
  {
    if self.inline_images
    {
      write!(self.terminal.backend_mut(), "{}", graphics::CLEAR_IMAGES)?;
    }
    disable_raw_mode()?;
    execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)
  }

  fn resume(&mut self) -> io::Result<()>
  {
    enable_raw_mode()?;
    execute!(self.terminal.backend_mut(), EnterAlternateScreen, Hide, SetTitle(TITLE))?;
    self.terminal.clear()?;
    self.needs_clear = true;
    Ok(())
  }

  /// Hand the terminal to an interactive program for the duration of `f`.
  fn released<T>(
    &mut self,
    f: impl FnOnce() -> Result<T>,
  ) -> Result<T>
  {
    self.suspend()?;
    let result = f();
    self.resume()?;
    result
  }

  /// Lay out, resolve the preview, and draw one frame.
  pub fn draw_frame(
    &mut self,
    app: &mut App,
  ) -> io::Result<()>
  {
    let size = self.terminal.size()?;
    let layout = Layout::compute(size.width, size.height);
    app.set_viewport_height(layout.list_height);
    let area = layout.preview_area();
    let content = app.preview(area.width, area.height as usize);

    if self.needs_clear
    {
      self.terminal.clear()?;
      self.needs_clear = false;
    }
    if self.inline_images
    {
      write!(self.terminal.backend_mut(), "{}", graphics::CLEAR_IMAGES)?;
    }
    let completed = self.terminal.draw(|f| ui::draw(f, app, &content))?;
    self.last_frame = completed.buffer.clone();

    if area.width == 0 || area.height == 0 || !layout.is_drawable()
    {
      return Ok(());
    }
    let backend = self.terminal.backend_mut();
    match &content
    {
      PreviewContent::ImagePath(path) =>
      {
        queue!(
          backend,
          MoveTo(area.x, area.y),
          Print(graphics::display_image_sequence(path, area.width, area.height))
        )?;
        backend.flush()?;
      }
      PreviewContent::RawGraphics(bytes) =>
      {
        for (row, chunk) in bytes.split(|b| *b == b'\n').take(area.height as usize).enumerate()
        {
          queue!(backend, MoveTo(area.x, area.y + row as u16))?;
          backend.write_all(chunk)?;
        }
        backend.flush()?;
        self.needs_clear = true;
      }
      PreviewContent::Lines(_) =>
      {}
    }
    Ok(())
  }

  /// Block until a key is pressed. Other events are dropped.
  fn next_key(&mut self) -> io::Result<KeyEvent>
  {
    loop
    {
      if let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
      {
        return Ok(key);
      }
    }
  }

  /// Redraw the last frame with an overlay on the bottom row.
  fn draw_overlay(
    &mut self,
    overlay: impl FnOnce(&mut ratatui::Frame, ratatui::layout::Rect, &Theme),
  ) -> io::Result<()>
  {
    let snapshot = &self.last_frame;
    let theme = &self.theme;
    self.terminal.draw(|f| {
      if snapshot.area == f.area()
      {
        f.buffer_mut().merge(snapshot);
      }
      let row = overlays::bottom_row(f.area());
      overlay(f, row, theme);
    })?;
    self.needs_clear = true;
    Ok(())
  }
}

impl Drop for Session
{
  fn drop(&mut self)
  {
    if let Err(e) = self.finish()
    {
      log::warn!("[runtime] terminal restore failed: {}", e);
    }
  }
}

impl Host for Session
{
  fn read_input(
    &mut self,
    prompt: &str,
  ) -> Result<Option<String>>
  {
    let mut input = LineInput::default();
    loop
    {
      self.draw_overlay(|f, row, theme| overlays::draw_prompt_line(f, row, prompt, &input, theme))?;
      match input.handle_key(self.next_key()?)
      {
        InputOutcome::Pending =>
        {}
        InputOutcome::Submit(text) => return Ok(Some(text)),
        InputOutcome::Cancel => return Ok(None),
      }
    }
  }

  fn confirm(
    &mut self,
    question: &str,
  ) -> Result<bool>
  {
    self.draw_overlay(|f, row, theme| overlays::draw_confirm_line(f, row, question, theme))?;
    let key = self.next_key()?;
    Ok(overlays::confirm_answer(&key))
  }

  fn display_error(
    &mut self,
    message: &str,
  )
  {
    log::warn!("[runtime] {}", message);
    let shown = self
      .draw_overlay(|f, row, theme| overlays::draw_error_line(f, row, message, theme))
      .and_then(|_| self.next_key());
    if let Err(e) = shown
    {
      log::warn!("[runtime] could not show error: {}", e);
    }
  }

  fn open_in_editor(
    &mut self,
    path: &Path,
  ) -> Result<()>
  {
    self.released(|| launch::open_in_editor(path))
  }

  fn open_with_system(
    &mut self,
    path: &Path,
  ) -> Result<()>
  {
    launch::open_with_system(path)
  }

  fn run_finder(
    &mut self,
    root: &Path,
  ) -> Result<Option<PathBuf>>
  {
    if !finder::fzf_installed()
    {
      return Err(Error::ToolMissing("fzf"));
    }
    self.released(|| finder::run_finder(root))
  }

  fn extract(
    &mut self,
    archive_path: &Path,
    dest: &Path,
  ) -> Result<()>
  {
    archive::extract(archive_path, dest)
  }

  fn compress(
    &mut self,
    sources: &[PathBuf],
    dest: &Path,
    cwd: &Path,
  ) -> Result<()>
  {
    archive::compress(sources, dest, cwd)
  }
}

/// Run the browser until the user quits. The terminal is restored on every
/// exit path.
pub fn run_app(app: &mut App) -> io::Result<()>
{
  let mut session = Session::start(app.theme().clone(), app.inline_images())?;
  let result = event_loop(app, &mut session);
  let restored = session.finish();
  result.and(restored)
}

fn event_loop(
  app: &mut App,
  session: &mut Session,
) -> io::Result<()>
{
  loop
  {
    session.draw_frame(app)?;
    let ev = event::read()?;
    match crate::runtime_util::process_event(app, ev, session)
    {
      Ok(true) => return Ok(()),
      Ok(false) =>
      {}
      Err(e) =>
      {
        log::warn!("[runtime] action failed: {}", e);
        session.display_error(&e.to_string());
      }
    }
  }
}
