use mojifix::config::{load_config, load_table, ConfigError, TableSource};
use mojifix::table::builtin_table;
use std::io::Write;
use tempfile::NamedTempFile;

fn table_file(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn flag_points_at_external_table() {
    let f = table_file(r#"[{"pattern": "Ã©", "replacement": "é"}]"#);
    let path = f.path().to_str().unwrap().to_string();
    let cfg = load_config(&Some(path.clone())).unwrap();
    assert_eq!(cfg.table_source, TableSource::File(path));
    assert_eq!(cfg.table.len(), 1);
    assert_eq!(cfg.table[0].pattern, "Ã©");
}

// env-sensitive assertions live in one test so parallel tests never race on
// MOJIFIX_TABLE
#[test]
fn env_var_layering() {
    std::env::remove_var("MOJIFIX_TABLE");
    let cfg = load_config(&None).unwrap();
    assert_eq!(cfg.table_source, TableSource::Builtin);
    assert_eq!(cfg.table, builtin_table());

    let f = table_file(r#"[{"pattern": "âœ¨", "replacement": "✨"}]"#);
    let env_path = f.path().to_str().unwrap().to_string();
    std::env::set_var("MOJIFIX_TABLE", &env_path);
    let cfg = load_config(&None).unwrap();
    assert_eq!(cfg.table_source, TableSource::File(env_path));

    // CLI flag beats the environment
    let g = table_file(r#"[{"pattern": "Ã¡", "replacement": "á"}]"#);
    let flag_path = g.path().to_str().unwrap().to_string();
    let cfg = load_config(&Some(flag_path.clone())).unwrap();
    assert_eq!(cfg.table_source, TableSource::File(flag_path));

    std::env::remove_var("MOJIFIX_TABLE");
}

#[test]
fn shipped_table_file_matches_builtin() {
    let table = load_table("config/replacements.json").unwrap();
    assert_eq!(table, builtin_table());
}

#[test]
fn empty_table_is_rejected() {
    let f = table_file("[]");
    let err = load_table(f.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyTable(_)));
}

#[test]
fn malformed_table_is_rejected() {
    let f = table_file("{ not json");
    let err = load_table(f.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_table_file_is_an_io_error() {
    let err = load_table("/no/such/table.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
