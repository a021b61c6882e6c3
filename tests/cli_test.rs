// End-to-end tests for the algotrace binary

use assert_cmd::Command;
use predicates::prelude::*;

fn algotrace() -> Command {
    Command::cargo_bin("algotrace").expect("binary not built")
}

#[test]
fn test_list_shows_builtin_catalog() {
    algotrace()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bubble-sort"))
        .stdout(predicate::str::contains("binary-search"))
        .stdout(predicate::str::contains("dfs"));
}

#[test]
fn test_show_prints_descriptor_json() {
    algotrace()
        .args(["show", "merge-sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\": \"merge-sort\""))
        .stdout(predicate::str::contains("\"category\": \"sorting\""));
}

#[test]
fn test_run_bubble_sort_with_values() {
    algotrace()
        .args(["run", "bubble-sort", "--values", "5,3,8,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing 5 and 3"))
        .stdout(predicate::str::contains("Swapping 5 and 3"))
        .stderr(predicate::str::contains("14 events. Sorted!"));
}

#[test]
fn test_run_json_lines_are_tagged() {
    algotrace()
        .args([
            "run",
            "linear-search",
            "--values",
            "4,2,7",
            "--target",
            "7",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"family\":\"search\""))
        .stdout(predicate::str::contains("\"kind\":\"found\""));
}

#[test]
fn test_run_graph_demo() {
    algotrace()
        .args(["run", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit"))
        .stderr(predicate::str::contains("Traversal complete!"));
}

#[test]
fn test_run_seeded_sample_is_deterministic() {
    let first = algotrace()
        .args(["run", "quick-sort", "--seed", "7", "--limit", "20"])
        .output()
        .expect("run failed");
    let second = algotrace()
        .args(["run", "quick-sort", "--seed", "7", "--limit", "20"])
        .output()
        .expect("run failed");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_unknown_slug_fails() {
    algotrace()
        .args(["run", "heap-sort", "--values", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported algorithm: 'heap-sort'"));
}

#[test]
fn test_search_values_without_target_fails() {
    algotrace()
        .args(["run", "binary-search", "--values", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("binary-search"));
}

#[test]
fn test_bad_value_fails() {
    algotrace()
        .args(["run", "selection-sort", "--values", "3,x,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x'"));
}

#[test]
fn test_drawn_seed_is_reported() {
    algotrace()
        .args(["run", "merge-sort", "--limit", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("pass --seed"));

    algotrace()
        .args(["run", "merge-sort", "--seed", "11", "--limit", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("pass --seed").not());
}

fn write_config(name: &str, json: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "algotrace-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, json).expect("cannot write config");
    path
}

#[test]
fn test_play_uses_configured_default_speed() {
    let config = write_config("fast", r#"{ "playback": { "default_speed": 100 } }"#);
    algotrace()
        .arg("--config")
        .arg(&config)
        .args(["run", "bubble-sort", "--values", "2,1", "--play"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swapping 2 and 1"))
        .stderr(predicate::str::contains("4 events. Sorted!"));
}

#[test]
fn test_unnested_playback_config_fails() {
    let config = write_config("bad", r#"{ "playback": { "default_speed": 150 } }"#);
    algotrace()
        .arg("--config")
        .arg(&config)
        .args(["run", "bubble-sort", "--values", "2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("playback speeds must satisfy"));
}
