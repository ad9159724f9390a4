use mnemonic_core::{is_valid_mnemonic, resolve};
use serde_json::Value;
use std::process::{Command, Output};

const ZERO_128: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn run_cli(args: &[&str]) -> Output {
    run_cli_with_env(args, &[])
}

fn run_cli_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let binary_path = assert_cmd::cargo::cargo_bin!("mnemonic");
    let mut command = Command::new(binary_path);
    command
        .args(args)
        .env_remove("MNEMONIC_LANG")
        .env_remove("MNEMONIC_STRENGTH")
        .env_remove("MNEMONIC_DEBUG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("cli runs")
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "cli exited unsuccessfully: {:?}", output);
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is utf8");
    serde_json::from_str(&stdout).expect("stdout is valid json")
}

#[test]
fn encode_and_decode_zero_entropy() {
    let output = run_cli(&["encode", "00000000000000000000000000000000"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), ZERO_128);

    let json = stdout_json(&run_cli(&["--json", "decode", ZERO_128]));
    assert_eq!(json["entropy"], "00000000000000000000000000000000");
    assert_eq!(json["bits"], 128);
    assert_eq!(json["language"], "en");
}

#[test]
fn generate_respects_bits_and_language() {
    let json = stdout_json(&run_cli(&["--json", "--lang", "fr", "generate", "--bits", "256"]));
    assert_eq!(json["word_count"], 24);
    assert_eq!(json["language"], "fr");

    let phrase = json["mnemonic"].as_str().expect("mnemonic string");
    assert!(is_valid_mnemonic(Some(resolve(Some("fr"))), phrase));
}

#[test]
fn generate_logs_without_the_phrase() {
    let output = run_cli(&["--json", "generate"]);
    let json = stdout_json(&output);
    let phrase = json["mnemonic"].as_str().expect("mnemonic string");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INFO [cli] Generated mnemonic | language=en bits=128"), "{}", stderr);
    assert!(!stderr.contains(phrase));
}

#[test]
fn rejected_environment_is_logged() {
    let output = run_cli_with_env(&["languages"], &[("MNEMONIC_STRENGTH", "100")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN [config] Rejected settings"), "{}", stderr);
}

#[test]
fn debug_entries_are_tagged_by_module() {
    let bad = ZERO_128.replace("about", "above");
    let output = run_cli_with_env(&["validate", &bad], &[("MNEMONIC_DEBUG", "1")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG [codec] Checksum mismatch | words=12"), "{}", stderr);
    assert!(!stderr.contains("[bip39]"));
}

#[test]
fn validate_sets_exit_status() {
    let ok = run_cli(&["validate", ZERO_128]);
    assert!(ok.status.success());
    assert_eq!(String::from_utf8_lossy(&ok.stdout).trim(), "valid");

    let bad = run_cli(&["validate", &ZERO_128.replace("about", "above")]);
    assert!(!bad.status.success());
    assert_eq!(String::from_utf8_lossy(&bad.stdout).trim(), "invalid");
}

#[test]
fn rejects_bad_input() {
    assert!(!run_cli(&["encode", "0011"]).status.success());
    assert!(!run_cli(&["encode", "not-hex"]).status.success());
    assert!(!run_cli(&["--lang", "zh", "encode", "00000000000000000000000000000000"]).status.success());
    assert!(!run_cli(&["generate", "--bits", "100"]).status.success());
}

#[test]
fn lists_languages() {
    let json = stdout_json(&run_cli(&["--json", "languages"]));
    let codes: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_str().expect("string code"))
        .collect();
    assert_eq!(codes, vec!["en", "es", "fr", "it", "jp", "zhs", "zht"]);
}

#[test]
fn vector_check_accepts_published_vectors() {
    let binary_path = assert_cmd::cargo::cargo_bin!("vector_check");
    let output = Command::new(binary_path)
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/vectors.json"))
        .output()
        .expect("vector_check runs");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
}
