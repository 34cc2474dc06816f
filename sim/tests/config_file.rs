use std::io::Write as _;

use ghosts::CornerPolicy;
use sim::load_config;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_config(
        r#"{
            "lives": 5,
            "tick_ms": 20,
            "ghosts": { "corner_policy": "Random" },
            "spawns": [{ "code": "s", "x": 64.0, "y": 64.0 }]
        }"#,
    );
    let config = load_config(file.path()).expect("valid config");

    assert_eq!(config.lives, 5);
    assert_eq!(config.tick_ms, 20);
    assert_eq!(config.frightened_ms, 6_000);
    assert_eq!(config.mode_lengths.scatter_ms, 7_000);
    assert_eq!(config.ghosts.corner_policy, CornerPolicy::Random);
    assert_eq!(config.spawns.len(), 1);
    assert_eq!(config.spawns[0].code, 's');
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    let err = load_config(&path).expect_err("missing file");
    let message = format!("{err:#}");
    assert!(message.contains("failed to read config"), "{message}");
    assert!(message.contains("missing.json"), "{message}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_config("{ \"lives\": ");
    let err = load_config(file.path()).expect_err("malformed");
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn out_of_range_values_are_rejected() {
    let file = write_config(r#"{ "tick_ms": 0 }"#);
    let err = load_config(file.path()).expect_err("zero tick");
    assert!(format!("{err:#}").contains("tick_ms must be positive"));

    let file = write_config(r#"{ "ghosts": { "speeds": { "scatter": 1.0, "chase": -3.0, "frightened": 0.5 } } }"#);
    let err = load_config(file.path()).expect_err("negative speed");
    assert!(format!("{err:#}").contains("invalid ghost settings"));
}

#[test]
fn spawns_outside_the_arena_are_rejected() {
    let file = write_config(r#"{ "spawns": [{ "code": "b", "x": 1000.0, "y": 1000.0 }] }"#);
    let err = load_config(file.path()).expect_err("off-arena spawn");
    let message = format!("{err:#}");
    assert!(message.contains("ghost spawn #0 ('b')"), "{message}");
    assert!(message.contains("does not fit inside arena"), "{message}");

    // Straddling the right edge by a few units is still outside.
    let file = write_config(r#"{ "spawns": [{ "code": "c", "x": 430.0, "y": 200.0 }] }"#);
    assert!(load_config(file.path()).is_err());

    let file = write_config(r#"{ "player": { "start": { "x": -5.0, "y": 300.0 } } }"#);
    let err = load_config(file.path()).expect_err("off-arena player");
    assert!(format!("{err:#}").contains("player start"));
}
