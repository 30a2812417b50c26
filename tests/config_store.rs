mod common;

use std::fs;

use duopane::{
  App,
  config::{
    ChafaConfig,
    Config,
    ConfigPaths,
    ConfigStore,
    Theme,
    ThemeRole,
  },
};
use ratatui::style::Color;

use common::touch;

#[test]
fn save_then_load_round_trips()
{
  let tmp = tempfile::tempdir().unwrap();
  let store = ConfigStore::at(tmp.path().join("nested/dir/config.toml"));
  let cfg = Config {
    show_hidden_files: true,
    chafa:             ChafaConfig { backend: Some("symbols".into()) },
  };
  store.save(&cfg).unwrap();
  assert_eq!(store.load(), cfg);

  let text = fs::read_to_string(tmp.path().join("nested/dir/config.toml")).unwrap();
  assert!(text.contains("show_hidden_files = true"), "{text}");
}

#[test]
fn missing_or_malformed_file_gives_defaults()
{
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("config.toml");
  assert_eq!(ConfigStore::at(path.clone()).load(), Config::default());

  fs::write(&path, "show_hidden_files = \"very\"\n[[[").unwrap();
  assert_eq!(ConfigStore::at(path).load(), Config::default());
}

#[test]
fn hand_written_file_keeps_recognised_lines()
{
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("config.toml");
  fs::write(&path, "show_hidden_files = True\nold_option\n[chafa]\nbackend = symbols\n").unwrap();

  let cfg = ConfigStore::at(path).load();
  assert!(cfg.show_hidden_files);
  assert_eq!(cfg.graphics_backend(), Some("symbols"));
}

#[test]
fn in_memory_store_never_writes()
{
  let store = ConfigStore::in_memory();
  assert!(store.path().is_none());
  store.save(&Config { show_hidden_files: true, ..Config::default() }).unwrap();
  assert_eq!(store.load(), Config::default());
}

#[test]
fn theme_script_overrides_defaults()
{
  let tmp = tempfile::tempdir().unwrap();
  let script = tmp.path().join("colors.lua");
  fs::write(
    &script,
    r##"
Colors = {
  Border = "darkred",
  Footer = "#102030",
  ListDefault = "no-such-colour",
  Sparkles = "blue",
}
"##,
  )
  .unwrap();

  let theme = Theme::load(&script);
  assert_eq!(theme.get(ThemeRole::Border), Color::Red);
  assert_eq!(theme.get(ThemeRole::Footer), Color::Rgb(0x10, 0x20, 0x30));
  assert_eq!(theme.get(ThemeRole::ListDefault), Theme::default().get(ThemeRole::ListDefault));
  assert_eq!(theme.get_color("Sparkles"), Color::White);
}

#[test]
fn missing_theme_script_is_default()
{
  let tmp = tempfile::tempdir().unwrap();
  assert_eq!(Theme::load(&tmp.path().join("absent.lua")), Theme::default());
}

#[test]
fn initialize_reads_config_root()
{
  let tmp = tempfile::tempdir().unwrap();
  let paths = ConfigPaths::under(tmp.path().join("cfg"));
  fs::create_dir_all(paths.theme_script.parent().unwrap()).unwrap();
  fs::write(&paths.config_file, "show_hidden_files = true\n").unwrap();
  fs::write(&paths.theme_script, "return { HeaderPath = \"green\" }").unwrap();

  let files = tmp.path().join("files");
  fs::create_dir(&files).unwrap();
  touch(&files, ".rc");
  let app = App::initialize(files.clone(), &paths);

  assert!(app.show_hidden());
  assert_eq!(app.entries().len(), 1);
  assert_eq!(app.theme().get(ThemeRole::HeaderPath), Color::LightGreen);
  assert_eq!(app.cwd(), files);
}
