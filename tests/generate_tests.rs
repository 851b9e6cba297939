use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cc, out_file, setup_test_dir, write_agent_csv, write_cdr_csv, write_config};

#[test]
fn test_generate_table_stdout() {
    let dir = setup_test_dir("generate_table_stdout");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);

    cc().args(["--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr])
        .assert()
        .success()
        .stdout(
            contains("Employee ID")
                .and(contains("Alice Smith"))
                // 4h talk over 3 matured calls, floored
                .and(contains("01:20:00"))
                // net login 08:00 - 00:45
                .and(contains("07:15:00")),
        );
}

#[test]
fn test_generate_agent_without_calls_gets_zeros() {
    let dir = setup_test_dir("generate_agent_zero_calls");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.csv");

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "csv",
        "--out", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // Bob has one CDR row but it never matured: zero counts, zero AHT.
    assert!(content.contains("102,Bob Jones,07:30:00,06:30:00,01:00:00,00:00:00,0,0,0,02:00:00,00:00:00"));
    // The unknown agent 999 must not leak into the report.
    assert!(!content.contains("999"));
}

#[test]
fn test_generate_export_csv_values() {
    let dir = setup_test_dir("generate_export_csv");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.csv");

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "csv",
        "--out", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Employee ID,Agent Full Name,Total Login Time"));
    assert!(content.contains("101,Alice Smith,08:00:00,07:15:00,00:45:00,00:30:00,3,2,1,04:00:00,01:20:00"));
}

#[test]
fn test_generate_export_json() {
    let dir = setup_test_dir("generate_export_json");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.json");

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "json",
        "--out", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("generated_at"));
    assert!(content.contains("\"employee_id\": \"101\""));
    assert!(content.contains("\"ib_matured\": 2"));
    assert!(content.contains("\"ob_matured\": 1"));
}

#[test]
fn test_generate_export_xlsx() {
    let dir = setup_test_dir("generate_export_xlsx");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.xlsx");

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "xlsx",
        "--out", &out,
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_generate_sort_net_login() {
    let dir = setup_test_dir("generate_sort_net_login");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.csv");

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "csv",
        "--out", &out, "--sort", "net-login",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // Alice 07:15:00 net login sorts above Bob 06:30:00.
    let alice = content.find("101,Alice Smith").expect("alice row");
    let bob = content.find("102,Bob Jones").expect("bob row");
    assert!(alice < bob);
}

#[test]
fn test_generate_sort_matured_reverses_source_order() {
    let dir = setup_test_dir("generate_sort_matured");
    let cfg = write_config(&dir);
    let cdr = write_cdr_csv(&dir);
    let out = out_file(&dir, "report.csv");

    // Bob first in the source, but Alice has more matured calls.
    let agent = dir.join("agents_reversed.csv");
    fs::write(
        &agent,
        "\
Agent Performance Report,,,,,
102,Bob Jones,07:30:00,02:00:00,01:00:00,00:00:00
101,Alice Smith,08:00:00,04:00:00,00:45:00,00:30:00
",
    )
    .expect("write agent fixture");

    cc().args([
        "--config", &cfg, "generate",
        "--agent", &agent.to_string_lossy(),
        "--cdr", &cdr,
        "--format", "csv", "--out", &out, "--sort", "matured",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let alice = content.find("101,Alice Smith").expect("alice row");
    let bob = content.find("102,Bob Jones").expect("bob row");
    assert!(alice < bob);
}

#[test]
fn test_generate_missing_input_file() {
    let dir = setup_test_dir("generate_missing_input");
    let cfg = write_config(&dir);
    let cdr = write_cdr_csv(&dir);

    cc().args([
        "--config", &cfg, "generate", "--agent", "/nonexistent/agents.csv", "--cdr", &cdr,
    ])
    .assert()
    .failure()
    .stderr(contains("Could not read file"));
}

#[test]
fn test_generate_layout_mismatch_names_fields() {
    let dir = setup_test_dir("generate_layout_mismatch");
    let cfg = write_config(&dir);
    let cdr = write_cdr_csv(&dir);

    // Only three columns: talk, break and meeting indices are out of
    // range for every row.
    let agent = dir.join("agents_narrow.csv");
    fs::write(
        &agent,
        "\
Agent Performance Report,,
101,Alice Smith,08:00:00
",
    )
    .expect("write agent fixture");

    cc().args([
        "--config", &cfg, "generate",
        "--agent", &agent.to_string_lossy(),
        "--cdr", &cdr,
    ])
    .assert()
    .failure()
    .stderr(
        contains("File layout not recognized")
            .and(contains("talk time"))
            .and(contains("break time")),
    );
}

#[test]
fn test_generate_format_requires_out() {
    let dir = setup_test_dir("generate_format_requires_out");
    let cfg = write_config(&dir);
    let agent = write_agent_csv(&dir);
    let cdr = write_cdr_csv(&dir);

    cc().args([
        "--config", &cfg, "generate", "--agent", &agent, "--cdr", &cdr, "--format", "csv",
    ])
    .assert()
    .failure()
    .stderr(contains("--out is required"));
}

#[test]
fn test_generate_unsupported_extension() {
    let dir = setup_test_dir("generate_unsupported_ext");
    let cfg = write_config(&dir);
    let cdr = write_cdr_csv(&dir);

    let agent = dir.join("agents.txt");
    fs::write(&agent, "whatever").expect("write fixture");

    cc().args([
        "--config", &cfg, "generate",
        "--agent", &agent.to_string_lossy(),
        "--cdr", &cdr,
    ])
    .assert()
    .failure()
    .stderr(contains("Unsupported input format"));
}

#[test]
fn test_generate_header_detect_layout() {
    let dir = setup_test_dir("generate_header_detect");
    let cfg = write_config(&dir);

    // Shifted columns relative to the fixed layout, but recognizable
    // header names two metadata rows down.
    let agent = dir.join("agents_detect.csv");
    fs::write(
        &agent,
        "\
Exported 2026-08-30,,,,,,
Site: Main Floor,,,,,,
Region,Employee ID,Agent Full Name,Total Login Time,Total Talk Time,Total Break,Meeting
North,101,Alice Smith,08:00:00,04:00:00,00:45:00,00:30:00
",
    )
    .expect("write agent fixture");

    let cdr = dir.join("cdr_detect.csv");
    fs::write(
        &cdr,
        "\
Exported 2026-08-30,,,
Site: Main Floor,,,
Region,Employee ID,Campaign,Call Status
North,101,CSRINBOUND,CALLMATURED
North,101,OUTBOUND,TRANSFER
",
    )
    .expect("write cdr fixture");

    cc().args([
        "--config", &cfg, "generate",
        "--agent", &agent.to_string_lossy(),
        "--cdr", &cdr.to_string_lossy(),
        "--layout", "detect",
    ])
    .assert()
    .success()
    .stdout(contains("Alice Smith").and(contains("07:15:00")));
}
