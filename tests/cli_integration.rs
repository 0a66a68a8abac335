//! End-to-end CLI tests.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use wavaug::audio::write_wav_file;

fn wavaug() -> Command {
    let mut cmd = Command::cargo_bin("wavaug").unwrap();
    cmd.env_remove("WAVAUG_CHAIN")
        .env_remove("WAVAUG_STRATEGY")
        .env_remove("WAVAUG_OUTPUT_DIR");
    cmd
}

fn write_input(dir: &Path, name: &str, secs: f32) -> std::path::PathBuf {
    let path = dir.join(name);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = (secs * 8_000.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<f32> = (0..len).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
    write_wav_file(&path, &samples, 8_000).unwrap();
    path
}

#[test]
fn no_inputs_fails() {
    wavaug()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid WAV files"));
}

#[test]
fn noise_stage_doubles_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "clip.wav", 1.0);

    wavaug()
        .arg("--noise")
        .arg("0.005")
        .arg("--no-progress")
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("clip.aug-000.wav").exists());
    assert!(dir.path().join("clip.aug-001.wav").exists());
    assert!(!dir.path().join("clip.aug-002.wav").exists());
}

#[test]
fn linear_strategy_yields_single_variant() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "clip.wav", 1.0);

    wavaug()
        .args(["--noise", "0.005", "-s", "linear", "--no-progress"])
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("clip.aug-000.wav").exists());
    assert!(!dir.path().join("clip.aug-001.wav").exists());
}

#[test]
fn windowing_writes_one_file_per_segment() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "clip.wav", 2.0);
    let out = dir.path().join("out");

    wavaug()
        .args(["--window", "1,0.5", "--no-progress", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success();

    // 2s signal, 1s windows every 0.5s: full windows at 0.0/0.5/1.0, no
    // remainder past the exact boundary
    assert!(out.join("clip.aug-002.wav").exists());
    assert!(!out.join("clip.aug-003.wav").exists());
}

#[test]
fn existing_output_skips_unless_forced() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "clip.wav", 0.5);

    wavaug()
        .args(["--noise", "0.01", "--no-progress"])
        .arg(&input)
        .assert()
        .success();

    let first_variant = dir.path().join("clip.aug-000.wav");
    let before = std::fs::metadata(&first_variant).unwrap().modified().unwrap();

    wavaug()
        .args(["--noise", "0.01", "--no-progress", "--quiet"])
        .arg(&input)
        .assert()
        .success();
    let after = std::fs::metadata(&first_variant).unwrap().modified().unwrap();
    assert_eq!(before, after, "second run should skip the file");

    wavaug()
        .args(["--noise", "0.01", "--no-progress", "--force"])
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn invalid_parameter_fails_before_processing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "clip.wav", 0.5);

    wavaug()
        .args(["--time-stretch", "100", "--no-progress"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter"));

    assert!(!dir.path().join("clip.aug-000.wav").exists());
}

#[test]
fn config_path_prints_toml_location() {
    wavaug()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn directory_input_recurses_and_ignores_variants() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "a.wav", 0.5);
    write_input(dir.path(), "b.aug-000.wav", 0.5); // looks like our own output

    wavaug()
        .args(["--noise", "0.01", "--no-progress"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("a.aug-000.wav").exists());
    assert!(!dir.path().join("b.aug-000.aug-000.wav").exists());
}
