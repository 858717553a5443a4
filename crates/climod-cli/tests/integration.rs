//! Integration tests for the climod-demo binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn demo() -> Command {
    match Command::cargo_bin("climod-demo") {
        Ok(cmd) => cmd,
        Err(e) => panic!("demo binary not built: {e}"),
    }
}

#[test]
fn test_help_prints_synopsis() {
    demo()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("[--ctk-save-ini <file>]"));
}

#[test]
fn test_xml_prints_manifest() {
    demo()
        .arg("--xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("<executable>"))
        .stdout(predicate::str::contains(
            "<file fileExtensions=\"bli,bla,blbub\">",
        ))
        .stdout(predicate::str::contains("<name>File</name>"))
        .stdout(predicate::str::contains("<title>climod-demo</title>"));
}

#[test]
fn test_unknown_flag_is_diagnosed_but_not_fatal() {
    demo()
        .arg("--no-such-flag")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Ignored command line argument --no-such-flag",
        ));
}

#[test]
fn test_unknown_positional_passes_through_silently() {
    demo()
        .args(["just-a-token", "another"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignored").not());
}

#[test]
fn test_boolean_flag_toggles_saved_value() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = temp_dir.path().join("demo.ini");

    let path_str = path.to_string_lossy().to_string();
    demo()
        .args(["-b", "--ctk-save-ini", path_str.as_str()])
        .assert()
        .success();

    let Ok(ini) = std::fs::read_to_string(&path) else {
        panic!("expected ini file at {}", path.display());
    };
    assert!(ini.contains("Flag = false"));
}

#[test]
fn test_long_flag_sets_double_value() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = temp_dir.path().join("demo.ini");

    let path_str = path.to_string_lossy().to_string();
    demo()
        .args(["--special-slider", "0.25", "--ctk-save-ini", path_str.as_str()])
        .assert()
        .success();

    let Ok(ini) = std::fs::read_to_string(&path) else {
        panic!("expected ini file at {}", path.display());
    };
    assert!(ini.contains("Slider = 0.25"));
}

#[test]
fn test_positional_token_binds_file_parameter() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = temp_dir.path().join("demo.ini");

    let path_str = path.to_string_lossy().to_string();
    demo()
        .args(["input.dat", "--ctk-save-ini", path_str.as_str()])
        .assert()
        .success();

    let Ok(ini) = std::fs::read_to_string(&path) else {
        panic!("expected ini file at {}", path.display());
    };
    assert!(ini.contains("File = input.dat"));
}

#[test]
fn test_save_then_load_round_trip() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let save_path = temp_dir.path().join("saved.ini");
    let reload_path = temp_dir.path().join("reloaded.ini");

    let save_str = save_path.to_string_lossy().to_string();
    let reload_str = reload_path.to_string_lossy().to_string();
    demo()
        .args(["--special-slider", "0.75", "--ctk-save-ini", save_str.as_str()])
        .assert()
        .success();

    // A fresh process loads the saved values, then saves them again.
    demo()
        .args([
            "--ctk-load-ini",
            save_str.as_str(),
            "--ctk-save-ini",
            reload_str.as_str(),
        ])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&save_path).unwrap_or_default();
    let reloaded = std::fs::read_to_string(&reload_path).unwrap_or_default();
    assert_eq!(saved, reloaded);
    assert!(reloaded.contains("Slider = 0.75"));
}

#[test]
fn test_missing_ini_file_is_not_fatal() {
    demo()
        .args(["--ctk-load-ini", "/nonexistent/demo.ini"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not process ini file"));
}
