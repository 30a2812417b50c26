//! Navigation and list refresh for App.

use std::{
  fs,
  io,
};

use crate::{
  app::App,
  core::{
    launch,
    listing::read_dir_sorted,
  },
  error::Result,
  host::Host,
};

const ACCESS_DENIED_RETURN: &str = "Access Denied, press any key to return.";

impl App
{
  /// Re-read the current directory and re-clamp the cursor. Errors are
  /// returned untouched; see [`App::refresh`] for the reporting variant.
  pub fn load_listing(&mut self) -> io::Result<()>
  {
    let entries = read_dir_sorted(&self.cwd, self.config.show_hidden_files)?;
    self.entries = entries;
    self.cursor.clamp(self.entries.len(), self.viewport_height);
    Ok(())
  }

  /// Reload the listing. When the directory cannot be read the problem is
  /// reported and the controller climbs to the nearest readable parent.
  pub fn refresh(
    &mut self,
    host: &mut dyn Host,
  )
  {
    loop
    {
      let Err(e) = self.load_listing()
      else
      {
        return;
      };
      log::warn!("[listing] {} unreadable: {}", self.cwd.display(), e);
      let msg = if e.kind() == io::ErrorKind::PermissionDenied
      {
        ACCESS_DENIED_RETURN.to_string()
      }
      else
      {
        e.to_string()
      };
      host.display_error(&msg);
      let Some(parent) = self.cwd.parent().map(|p| p.to_path_buf())
      else
      {
        self.entries.clear();
        self.cursor.reset();
        return;
      };
      self.cwd = parent;
      self.cursor.reset();
      self.marked.clear();
    }
  }

  pub fn move_cursor(
    &mut self,
    delta: isize,
  )
  {
    self.cursor.move_by(delta, self.entries.len(), self.viewport_height);
  }

  pub fn jump_to_start(&mut self)
  {
    self.cursor.jump_start();
  }

  pub fn jump_to_end(&mut self)
  {
    self.cursor.jump_end(self.entries.len(), self.viewport_height);
  }

  /// Record the number of visible list rows and keep the cursor inside
  /// the new window.
  pub fn set_viewport_height(
    &mut self,
    height: usize,
  )
  {
    self.viewport_height = height;
    self.cursor.clamp(self.entries.len(), height);
  }

  /// Highlight the entry called `name`, if present.
  pub fn select_name(
    &mut self,
    name: &str,
  ) -> bool
  {
    match self.entries.iter().position(|e| e.name == name)
    {
      Some(idx) =>
      {
        self.cursor.select(idx, self.entries.len(), self.viewport_height);
        true
      }
      None => false,
    }
  }

  /// Open the highlighted entry: descend into directories, hand files to
  /// the system opener or the editor.
  pub fn open(
    &mut self,
    host: &mut dyn Host,
  ) -> Result<()>
  {
    let Some(entry) = self.selected_entry().cloned()
    else
    {
      return Ok(());
    };
    if entry.is_dir()
    {
      if let Err(e) = fs::read_dir(&entry.path)
      {
        log::warn!("[nav] cannot enter {}: {}", entry.path.display(), e);
        let reason = if e.kind() == io::ErrorKind::PermissionDenied
        {
          "Access Denied".to_string()
        }
        else
        {
          e.to_string()
        };
        host.display_error(&format!("Cannot access {}: {}", entry.name, reason));
        return Ok(());
      }
      log::debug!("[nav] enter {}", entry.path.display());
      self.cwd = entry.path;
      self.marked.clear();
      self.cursor.reset();
      self.refresh(host);
      return Ok(());
    }
    if launch::opens_externally(&entry.extension)
    {
      return host.open_with_system(&entry.path);
    }
    let result = host.open_in_editor(&entry.path);
    self.refresh(host);
    self.select_name(&entry.name);
    result
  }

  /// Go to the parent directory. No-op at the filesystem root.
  pub fn navigate_up(
    &mut self,
    host: &mut dyn Host,
  )
  {
    let Some(parent) = self.cwd.parent().map(|p| p.to_path_buf())
    else
    {
      return;
    };
    log::debug!("[nav] up to {}", parent.display());
    self.cwd = parent;
    self.cursor.reset();
    self.marked.clear();
    self.refresh(host);
  }
}
