//! Scripted host and fixtures shared by the integration tests.
#![allow(dead_code)]

use std::{
  collections::VecDeque,
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use duopane::{
  App,
  Error,
  Result,
  config::{
    Config,
    ConfigStore,
    Theme,
  },
  host::Host,
};

/// Host that answers prompts from queues and records everything else.
#[derive(Default)]
pub struct ScriptedHost
{
  pub inputs:     VecDeque<Option<String>>,
  pub confirms:   VecDeque<bool>,
  pub errors:     Vec<String>,
  pub prompts:    Vec<String>,
  pub questions:  Vec<String>,
  pub edited:     Vec<PathBuf>,
  pub opened:     Vec<PathBuf>,
  pub finder:     Option<Result<Option<PathBuf>>>,
  pub extracted:  Vec<(PathBuf, PathBuf)>,
  pub compressed: Vec<(Vec<PathBuf>, PathBuf, PathBuf)>,
}

impl ScriptedHost
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn with_input(
    mut self,
    text: &str,
  ) -> Self
  {
    self.inputs.push_back(Some(text.to_string()));
    self
  }

  pub fn with_confirm(
    mut self,
    yes: bool,
  ) -> Self
  {
    self.confirms.push_back(yes);
    self
  }
}

impl Host for ScriptedHost
{
  fn read_input(
    &mut self,
    prompt: &str,
  ) -> Result<Option<String>>
  {
    self.prompts.push(prompt.to_string());
    Ok(self.inputs.pop_front().flatten())
  }

  fn confirm(
    &mut self,
    question: &str,
  ) -> Result<bool>
  {
    self.questions.push(question.to_string());
    Ok(self.confirms.pop_front().unwrap_or(false))
  }

  fn display_error(
    &mut self,
    message: &str,
  )
  {
    self.errors.push(message.to_string());
  }

  fn open_in_editor(
    &mut self,
    path: &Path,
  ) -> Result<()>
  {
    self.edited.push(path.to_path_buf());
    Ok(())
  }

  fn open_with_system(
    &mut self,
    path: &Path,
  ) -> Result<()>
  {
    self.opened.push(path.to_path_buf());
    Ok(())
  }

  fn run_finder(
    &mut self,
    _root: &Path,
  ) -> Result<Option<PathBuf>>
  {
    self.finder.take().unwrap_or(Err(Error::ToolMissing("fzf")))
  }

  fn extract(
    &mut self,
    archive: &Path,
    dest: &Path,
  ) -> Result<()>
  {
    self.extracted.push((archive.to_path_buf(), dest.to_path_buf()));
    fs::create_dir_all(dest)?;
    Ok(())
  }

  fn compress(
    &mut self,
    sources: &[PathBuf],
    dest: &Path,
    cwd: &Path,
  ) -> Result<()>
  {
    self.compressed.push((sources.to_vec(), dest.to_path_buf(), cwd.to_path_buf()));
    fs::write(dest, b"archive")?;
    Ok(())
  }
}

/// App rooted at `dir` with default settings, no config file, and the
/// listing loaded.
pub fn app_in(dir: &Path) -> App
{
  app_with(dir, Config::default())
}

pub fn app_with(
  dir: &Path,
  config: Config,
) -> App
{
  let mut app = App::with_parts(dir.to_path_buf(), config, ConfigStore::in_memory(), Theme::default(), false);
  app.load_listing().expect("listing");
  app
}

pub fn names(app: &App) -> Vec<String>
{
  app.entries().iter().map(|e| e.name.clone()).collect()
}

/// Highlight `name` or fail the test.
pub fn select(
  app: &mut App,
  name: &str,
)
{
  assert!(app.select_name(name), "no entry named {name}");
}

pub fn touch(
  dir: &Path,
  name: &str,
) -> PathBuf
{
  let p = dir.join(name);
  fs::write(&p, name.as_bytes()).expect("write fixture");
  p
}
