use std::path::PathBuf;

use clap::Parser;
use duopane::{
  App,
  config::{
    ConfigPaths,
    discover_config_paths,
  },
  runtime,
  trace,
};

/// Two-pane terminal file browser.
#[derive(Debug, Parser)]
#[command(name = "duopane", version, about)]
struct Cli
{
  /// Start in DIR (default: current directory)
  dir: Option<PathBuf>,

  /// Use DIR as the config root
  #[arg(long, value_name = "DIR")]
  config_dir: Option<PathBuf>,

  /// Write a debug trace log
  #[arg(long)]
  trace: bool,

  /// Trace log location (implies --trace)
  #[arg(long, value_name = "FILE")]
  trace_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  let cli = Cli::parse();
  trace::init(cli.trace || cli.trace_file.is_some(), cli.trace_file.clone());
  trace::install_panic_hook();

  let start = match cli.dir
  {
    Some(dir) => match std::fs::canonicalize(&dir)
    {
      Ok(p) if p.is_dir() => p,
      Ok(_) =>
      {
        eprintln!("duopane: '{}' is not a directory", dir.display());
        std::process::exit(1);
      }
      Err(e) =>
      {
        eprintln!("duopane: failed to open directory '{}': {}", dir.display(), e);
        std::process::exit(1);
      }
    },
    None => std::env::current_dir()?,
  };
  let paths = match cli.config_dir
  {
    Some(root) => ConfigPaths::under(root),
    None => discover_config_paths(),
  };

  log::info!("[main] starting duopane {}", env!("CARGO_PKG_VERSION"));
  let mut app = App::initialize(start, &paths);
  if let Err(e) = runtime::run_app(&mut app)
  {
    log::error!("[main] runtime::run_app: {e}");
    return Err(e.into());
  }
  Ok(())
}
