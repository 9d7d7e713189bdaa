//! Integration tests for editor configuration loading

mod common;

use albert::config::{CommandSpec, DialogMode, EditorConfig};
use albert::syntax::PYTHON_KEYWORDS;

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.theme, "default-dark");
    assert_eq!(config.docs_url, "https://docs.python.org/3/");
    assert_eq!(config.dialogs, DialogMode::Native);
    assert_eq!(config.package_manager.args, vec!["-m", "pip", "install"]);
    assert_eq!(config.package_manager.program, config.interpreter.program);
    assert!(config.interpreter.args.is_empty());
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let config = EditorConfig::from_yaml("dialogs: prompt\n").unwrap();
    assert_eq!(config.dialogs, DialogMode::Prompt);
    assert_eq!(config.theme, "default-dark");
    assert_eq!(config.interpreter, EditorConfig::default().interpreter);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(EditorConfig::from_yaml("  \n").unwrap(), EditorConfig::default());
}

#[test]
fn test_custom_interpreter_and_installer() {
    let yaml = "\
interpreter:
  program: /opt/venv/bin/python
package_manager:
  program: uv
  args: [pip, install]
";
    let config = EditorConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.interpreter, CommandSpec::new("/opt/venv/bin/python", &[]));
    let request = config.package_manager.request_with("numpy");
    assert_eq!(request.program, "uv");
    assert_eq!(request.args.len(), 3);
}

#[test]
fn test_keyword_override() {
    let config = EditorConfig::from_yaml("keywords: [fn, let]\n").unwrap();
    assert_eq!(config.keyword_list(), vec!["fn", "let"]);
    assert_eq!(EditorConfig::default().keyword_list().len(), PYTHON_KEYWORDS.len());
}

#[test]
fn test_invalid_yaml_is_error() {
    assert!(EditorConfig::from_yaml("dialogs: sometimes\n").is_err());
    assert!(EditorConfig::from_yaml("theme: [unclosed\n").is_err());
}

#[test]
fn test_load_from_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.yaml");
    assert_eq!(EditorConfig::load_from(&missing), EditorConfig::default());

    std::fs::write(&missing, "interpreter: 42: nope").unwrap();
    assert_eq!(EditorConfig::load_from(&missing), EditorConfig::default());

    std::fs::write(&missing, "docs_url: https://example.org/\n").unwrap();
    assert_eq!(EditorConfig::load_from(&missing).docs_url, "https://example.org/");
}

#[test]
fn test_keyword_override_reaches_highlighter() {
    let config = EditorConfig::from_yaml("keywords: [fn]\ndialogs: prompt\n").unwrap();
    let model = albert::AppModel::new(100, 30, config, None);
    assert_eq!(model.highlighter.highlight("fn def").len(), 1);
}
