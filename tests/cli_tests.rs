//! CLI smoke tests covering each command's happy path and error surface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("match-engine").expect("binary builds")
}

fn json_file(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("temp file");
    write!(file, "{value}").expect("write temp json");
    file
}

#[test]
fn resolve_reports_known_and_unknown_labels() {
    cmd()
        .args(["resolve", "React.js", "Quantum Basket Weaving"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-react"))
        .stdout(predicate::str::contains("Quantum Basket Weaving"));
}

#[test]
fn resolve_json_output_uses_endpoint_field_names() {
    cmd()
        .args(["resolve", "react", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skillIds\""))
        .stdout(predicate::str::contains("\"unknown\""));
}

#[test]
fn score_prints_result_and_version() {
    let listing = json_file(&serde_json::json!({
        "majors": ["Computer Science"],
        "required_skills": ["skill-react"],
        "work_mode": "remote",
    }));
    let profile = json_file(&serde_json::json!({
        "majors": ["Computer Science"],
        "skills": ["skill-react"],
        "remote_only": true,
    }));

    cmd()
        .args(["score", "--listing"])
        .arg(listing.path())
        .arg("--profile")
        .arg(profile.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Match score: 100/100"))
        .stdout(predicate::str::contains("Version: 2.1.0"));
}

#[test]
fn score_json_output_has_persisted_shape() {
    let listing = json_file(&serde_json::json!({ "required_skills": ["skill-sql"] }));
    let profile = json_file(&serde_json::json!({ "skills": ["skill-python"] }));

    cmd()
        .args(["score", "--format", "json", "--listing"])
        .arg(listing.path())
        .arg("--profile")
        .arg(profile.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"match_score\""))
        .stdout(predicate::str::contains("\"match_gaps\""))
        .stdout(predicate::str::contains("\"matching_version\""));
}

#[test]
fn score_rejects_unreadable_input() {
    let profile = json_file(&serde_json::json!({}));
    cmd()
        .args(["score", "--listing", "/no/such/listing.json", "--profile"])
        .arg(profile.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn audit_flags_unrelated_apply_url() {
    let signals = json_file(&serde_json::json!({
        "website": "acme.com",
        "external_apply_url": "https://jobs.otherco.com/apply",
    }));

    cmd()
        .arg("audit")
        .arg(signals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("External domain mismatch: YES"))
        .stdout(predicate::str::contains("jobs.otherco.com"));
}

#[test]
fn audit_json_output_has_persisted_shape() {
    let signals = json_file(&serde_json::json!({ "tier": "pro" }));

    cmd()
        .args(["audit", "--format", "json"])
        .arg(signals.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"quality_score\""))
        .stdout(predicate::str::contains("\"external_domain_mismatch\""));
}

#[test]
fn catalog_list_shows_embedded_skills() {
    cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-react"))
        .stdout(predicate::str::contains("Skill Catalog"));
}

#[test]
fn catalog_show_unknown_id_fails() {
    cmd()
        .args(["catalog", "show", "skill-nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn catalog_export_round_trips() {
    let out = NamedTempFile::with_suffix(".json").expect("temp file");
    cmd()
        .args(["catalog", "export"])
        .arg(out.path())
        .assert()
        .success();

    // the exported file loads as a custom catalog
    cmd()
        .args(["resolve", "react", "--catalog"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-react"));
}
