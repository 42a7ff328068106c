//! Integration tests for CLI commands.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const UNSIGNED_TRIG: &str = r#"@prefix : <http://purl.org/nanopub/temp/mynanopub#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix dc: <http://purl.org/dc/terms/> .
@prefix pav: <http://purl.org/pav/> .
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix np: <http://www.nanopub.org/nschema#> .
@prefix ex: <http://example.org/> .

:Head {
    : np:hasAssertion :assertion ;
        np:hasProvenance :provenance ;
        np:hasPublicationInfo :pubinfo ;
        a np:Nanopublication .
}

:assertion {
    ex:mosquito ex:transmits ex:malaria .
}

:provenance {
    :assertion prov:hadPrimarySource <http://dx.doi.org/10.3233/ISU-2010-0613> .
}

:pubinfo {
    : dc:created "2014-07-24T18:05:11+01:00"^^xsd:dateTime ;
        pav:createdBy <http://orcid.org/0000-0002-1267-0234> .
}
"#;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "trustypub", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn keygen_into(dir: &Path) -> String {
    let dir_arg = dir.to_string_lossy().to_string();
    let (success, _, stderr) = run_cli(&["keygen", "--dir", &dir_arg]);
    assert!(success, "keygen failed: {stderr}");
    dir.join("id_rsa").to_string_lossy().to_string()
}

#[test]
fn test_keygen_writes_keys_and_profile() {
    let temp_dir = TempDir::new().unwrap();
    keygen_into(temp_dir.path());

    assert!(temp_dir.path().join("id_rsa").exists());
    assert!(temp_dir.path().join("id_rsa.pub").exists());
    let profile = fs::read_to_string(temp_dir.path().join("profile.toml")).unwrap();
    assert!(profile.contains("private_key"));
}

#[test]
fn test_sign_and_check_commands() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = keygen_into(temp_dir.path());

    let np_path = temp_dir.path().join("example.trig");
    fs::write(&np_path, UNSIGNED_TRIG).unwrap();
    let np_arg = np_path.to_string_lossy().to_string();

    let (success, stdout, stderr) = run_cli(&["sign", &np_arg, "--key", &key_path]);
    assert!(success, "sign failed: {stderr}");
    assert!(stdout.contains("Signed: RA"));

    let signed_path = temp_dir.path().join("signed.example.trig");
    assert!(signed_path.exists());
    let signed_arg = signed_path.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["check", &signed_arg]);
    assert!(success);
    assert!(stdout.contains("INTEGRITY"));
    assert!(stdout.contains("yes"));
}

#[test]
fn test_check_rejects_tampered_content() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = keygen_into(temp_dir.path());

    let np_path = temp_dir.path().join("example.trig");
    fs::write(&np_path, UNSIGNED_TRIG).unwrap();
    let np_arg = np_path.to_string_lossy().to_string();
    let (success, _, stderr) = run_cli(&["sign", &np_arg, "--key", &key_path]);
    assert!(success, "sign failed: {stderr}");

    let signed_path = temp_dir.path().join("signed.example.trig");
    let tampered = fs::read_to_string(&signed_path)
        .unwrap()
        .replace("malaria", "dengue");
    fs::write(&signed_path, tampered).unwrap();
    let signed_arg = signed_path.to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&["check", &signed_arg]);
    assert!(!success);
    assert!(stderr.contains("did not pass verification"));
}

#[test]
fn test_check_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = keygen_into(temp_dir.path());

    let np_path = temp_dir.path().join("example.trig");
    fs::write(&np_path, UNSIGNED_TRIG).unwrap();
    let np_arg = np_path.to_string_lossy().to_string();
    let (success, _, stderr) = run_cli(&["sign", &np_arg, "--key", &key_path]);
    assert!(success, "sign failed: {stderr}");

    let signed_arg = temp_dir
        .path()
        .join("signed.example.trig")
        .to_string_lossy()
        .to_string();
    let (success, stdout, _) = run_cli(&["check", &signed_arg, "--json"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["integrity"], true);
    assert_eq!(report["signed"], true);
    assert_eq!(report["authenticity"], true);
}

#[test]
fn test_check_fails_for_malformed_input() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("bad.trig");
    fs::write(&bad_path, "this is not trig").unwrap();
    let bad_arg = bad_path.to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&["check", &bad_arg]);
    assert!(!success);
    assert!(stderr.contains("Error"));
}
