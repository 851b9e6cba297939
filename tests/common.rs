#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cc() -> Command {
    cargo_bin_cmd!("ccreport")
}

/// Create a unique test directory inside the system temp dir and wipe
/// any leftover from a previous run.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ccreport", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path for an output file inside the test dir.
pub fn out_file(dir: &PathBuf, name: &str) -> String {
    dir.join(name).to_string_lossy().to_string()
}

/// Write a config file with a compact fixed layout used by the CSV
/// fixtures below: one metadata row, then
/// id, name, login, talk, break, meeting columns in order.
pub fn write_config(dir: &PathBuf) -> String {
    let yaml = r#"layout_strategy: fixed
agent_layout:
  skip_rows: 1
  id: { index: 0, aliases: ["employee id", "agent id", "username"] }
  name: { index: 1, aliases: ["agent full name", "agent name"] }
  login: { index: 2, aliases: ["total login time", "login time"] }
  talk: { index: 3, aliases: ["total talk time", "talk time"] }
  breaks: { indices: [4], aliases: ["total break", "lunch break", "short break", "tea break"] }
  meetings: { indices: [5], aliases: ["meeting", "system down"] }
cdr_layout:
  skip_rows: 1
  id: { index: 0, aliases: ["employee id", "agent id", "username"] }
  campaign: { index: 1, aliases: ["campaign", "campaign name"] }
  status: { index: 2, aliases: ["call status", "disposition", "status"] }
detect:
  scan_rows: 5
  markers: ["agent", "employee", "username"]
sort: none
"#;
    let path = dir.join("ccreport.conf");
    fs::write(&path, yaml).expect("write config fixture");
    path.to_string_lossy().to_string()
}

/// Agent Performance fixture: two agents, one metadata row on top.
pub fn write_agent_csv(dir: &PathBuf) -> String {
    let csv = "\
Agent Performance Report,,,,,
101,Alice Smith,08:00:00,04:00:00,00:45:00,00:30:00
102,Bob Jones,07:30:00,02:00:00,01:00:00,00:00:00
";
    let path = dir.join("agents.csv");
    fs::write(&path, csv).expect("write agent fixture");
    path.to_string_lossy().to_string()
}

/// CDR fixture: three matured calls for agent 101 (two inbound), one
/// non-matured call for agent 102, one call for an unknown agent.
pub fn write_cdr_csv(dir: &PathBuf) -> String {
    let csv = "\
Call Detail Records,,
101,CSRInbound,CallMatured
101,OutboundSales,Transfer
101,csrinbound,CALLMATURED
102,OutboundSales,NOANSWER
999,OutboundSales,CALLMATURED
";
    let path = dir.join("cdr.csv");
    fs::write(&path, csv).expect("write cdr fixture");
    path.to_string_lossy().to_string()
}
