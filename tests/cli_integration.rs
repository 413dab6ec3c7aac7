use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

struct Workspace {
    root: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn data_file(&self) -> PathBuf {
        self.path("entries.json")
    }

    /// Run against this workspace's data file, with config lookups kept inside it
    fn run(&self, args: &[&str]) -> (bool, Vec<u8>, Vec<u8>) {
        let bin = std::env::var("CARGO_BIN_EXE_adspend").unwrap_or_else(|_| {
            let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            path.push("target");
            path.push("debug");
            if cfg!(windows) {
                path.push("adspend.exe");
            } else {
                path.push("adspend");
            }
            path.to_string_lossy().into_owned()
        });
        let data_file = self.data_file();
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .arg("--data-file")
            .arg(&data_file)
            .arg("--no-color")
            .current_dir(self.root.path())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("XDG_DATA_HOME", self.path("data"))
            .env_remove("ADSPEND_LOG");
        let output = cmd.output().expect("run adspend");
        (output.status.success(), output.stdout, output.stderr)
    }

    fn run_ok(&self, args: &[&str]) -> Vec<u8> {
        let (ok, stdout, stderr) = self.run(args);
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
        stdout
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut with_json = args.to_vec();
        with_json.push("--json");
        serde_json::from_slice(&self.run_ok(&with_json)).expect("json")
    }

    fn add(&self, project: &str, platform: &str, spend: &str, purchases: &str, date: &str) -> String {
        let entry = self.run_json(&["add", project, platform, spend, purchases, "--date", date]);
        entry["id"].as_str().expect("id").to_string()
    }
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write test file");
}

#[test]
fn report_json_aggregates_one_project() {
    let ws = Workspace::new();
    ws.add("saborio", "meta", "100", "10", "2024-01-01");
    ws.add("saborio", "google", "50", "20", "2024-01-01");
    ws.add("azza", "tiktok", "999", "1", "2024-01-01");

    let json = ws.run_json(&["report", "-p", "saborio", "--today", "2024-01-01"]);
    let projects = json["projects"].as_array().expect("projects");
    assert_eq!(projects.len(), 1);
    let stats = &projects[0]["stats"];
    assert_eq!(stats["total_spend"], 150.0);
    assert_eq!(stats["total_purchases"], 30.0);
    assert_eq!(stats["cpr"], 5.0);
    assert_eq!(stats["best_platform"], "google");
    assert_eq!(stats["highest_cost_platform"], "meta");
    assert_eq!(json["overview"]["range"]["option"], "today");
    assert_eq!(json["overview"]["stats"]["total_spend"], 150.0);
}

#[test]
fn report_without_purchases_has_no_best_platform() {
    let ws = Workspace::new();
    ws.add("bronze", "snapchat", "40", "0", "2024-01-01");

    let json = ws.run_json(&["report", "-p", "bronze", "--today", "2024-01-01"]);
    let stats = &json["projects"][0]["stats"];
    assert!(stats["best_platform"].is_null());
    assert_eq!(stats["highest_cost_platform"], "snapchat");
    assert_eq!(stats["cpr"], 0.0);
}

#[test]
fn last_seven_days_includes_boundary_day() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "10", "1", "2024-03-08");
    ws.add("azza", "meta", "10", "1", "2024-03-07");

    let json = ws.run_json(&["list", "-r", "last-7-days", "--today", "2024-03-15"]);
    let dates: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-03-08"]);
}

#[test]
fn custom_start_without_end_selects_that_day() {
    let ws = Workspace::new();
    ws.add("maraya", "google", "5", "1", "2024-02-01");
    ws.add("maraya", "google", "5", "1", "2024-02-02");

    let json = ws.run_json(&["list", "--from", "2024-02-01"]);
    let arr = json.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["date"], "2024-02-01");
}

#[test]
fn import_with_missing_project_leaves_data_untouched() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "10", "1", "2024-01-01");
    let before = fs::read(ws.data_file()).expect("read data file");

    let backup = ws.path("bad.json");
    write_file(
        &backup,
        r#"[
  {"id":"a","date":"2024-01-01","project":"azza","platform":"meta","spend":1,"purchases":1},
  {"id":"b","date":"2024-01-02","platform":"meta","spend":2,"purchases":1}
]"#,
    );
    let (ok, _, stderr) = ws.run(&["import", backup.to_str().expect("utf8 path"), "--yes"]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("missing \"project\""));

    let after = fs::read(ws.data_file()).expect("read data file");
    assert_eq!(before, after);
}

#[test]
fn import_requires_confirmation_then_replaces() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "10", "1", "2024-01-01");

    let backup = ws.path("backup.json");
    write_file(
        &backup,
        r#"[{"id":"kept-id","date":"2024-05-01","project":"سابوريو","platform":"Google Ads","spend":30,"purchases":3}]"#,
    );
    let path = backup.to_str().expect("utf8 path");

    let (ok, _, stderr) = ws.run(&["import", path]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Cancelled"));
    assert_eq!(ws.run_json(&["list"]).as_array().expect("array").len(), 1);

    ws.run_ok(&["import", path, "--yes"]);
    let json = ws.run_json(&["list"]);
    let arr = json.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], "kept-id");
    assert_eq!(arr[0]["project"], "saborio");
    assert_eq!(arr[0]["platform"], "google");
}

#[test]
fn csv_export_has_bom_and_localized_header() {
    let ws = Workspace::new();
    ws.add("saborio", "google", "100", "3", "2024-01-01");

    let out = ws.path("report.csv");
    ws.run_ok(&["export", "csv", "--out", out.to_str().expect("utf8 path")]);
    let csv = fs::read_to_string(&out).expect("read csv");
    assert!(csv.starts_with('\u{FEFF}'));
    let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
    assert_eq!(
        lines.next(),
        Some("Date,Project,Platform,Spend (SAR),Purchases,CPR")
    );
    assert_eq!(lines.next(), Some("2024-01-01,Saborio,Google Ads,100,3,33.33"));
}

#[test]
fn tsv_export_goes_to_stdout_without_bom() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "20", "0", "2024-01-01");

    let stdout = String::from_utf8(ws.run_ok(&["export", "tsv"])).expect("utf8");
    assert!(stdout.starts_with("Date\tProject\tPlatform\tSpend\tPurchases\tCPR"));
    assert!(stdout.contains("2024-01-01\t"));
    assert!(stdout.trim_end().ends_with("\t0"));
}

#[test]
fn empty_export_is_an_error() {
    let ws = Workspace::new();
    let (ok, _, stderr) = ws.run(&["export", "csv"]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("No data to export"));
}

#[test]
fn json_backup_round_trips_through_import() {
    let ws = Workspace::new();
    let id = ws.add("bronze", "tiktok", "12.5", "2", "2024-04-01");

    let backup = ws.path("backup.json");
    let backup_path = backup.to_str().expect("utf8 path");
    ws.run_ok(&["export", "json", "--out", backup_path]);
    ws.run_ok(&["delete", &id, "--yes"]);
    assert!(ws.run_json(&["list"]).as_array().expect("array").is_empty());

    ws.run_ok(&["import", backup_path, "--yes"]);
    let json = ws.run_json(&["list"]);
    assert_eq!(json[0]["id"], id.as_str());
    assert_eq!(json[0]["spend"], 12.5);
}

#[test]
fn update_by_prefix_keeps_id() {
    let ws = Workspace::new();
    let id = ws.add("azza", "meta", "10", "1", "2024-01-01");
    let prefix = id.split('-').next().expect("prefix");

    let updated = ws.run_json(&[
        "update",
        prefix,
        "--spend",
        "250",
        "--set-project",
        "maraya",
    ]);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["spend"], 250.0);
    assert_eq!(updated["project"], "maraya");

    let json = ws.run_json(&["list"]);
    assert_eq!(json.as_array().expect("array").len(), 1);
    assert_eq!(json[0]["id"], id.as_str());
}

#[test]
fn delete_needs_yes_without_a_terminal() {
    let ws = Workspace::new();
    let id = ws.add("azza", "meta", "10", "1", "2024-01-01");

    let (ok, _, _) = ws.run(&["delete", &id]);
    assert!(!ok);
    assert_eq!(ws.run_json(&["list"]).as_array().expect("array").len(), 1);

    ws.run_ok(&["delete", &id, "--yes"]);
    assert!(ws.run_json(&["list"]).as_array().expect("array").is_empty());
}

#[test]
fn add_rejects_fractional_purchases() {
    let ws = Workspace::new();
    let (ok, _, stderr) = ws.run(&["add", "azza", "meta", "10", "2.5"]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("whole number"));
    assert!(!ws.data_file().exists());
}

#[test]
fn platforms_json_lists_every_platform() {
    let ws = Workspace::new();
    ws.add("azza", "tiktok", "30", "3", "2024-01-01");

    let json = ws.run_json(&["platforms", "-r", "all"]);
    let platforms: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["platform"].as_str())
        .collect();
    assert_eq!(platforms, vec!["meta", "snapchat", "tiktok", "google"]);
    assert_eq!(json[2]["cpr"], 10.0);
}

#[test]
fn daily_json_is_ascending_by_default() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "10", "1", "2024-01-02");
    ws.add("azza", "google", "20", "3", "2024-01-01");

    let json = ws.run_json(&["daily", "-r", "all"]);
    assert_eq!(json[0]["date"], "2024-01-01");
    assert_eq!(json[0]["cpr"], 6.67);
    assert_eq!(json[1]["date"], "2024-01-02");
}

#[test]
fn table_report_renders_sections() {
    let ws = Workspace::new();
    ws.add("azza", "meta", "10", "1", "2024-01-01");

    let stdout = String::from_utf8(ws.run_ok(&["--today", "2024-01-01"])).expect("utf8");
    assert!(stdout.contains("Azza"));
    assert!(stdout.contains("TOTAL"));
    assert!(stdout.contains("No entries in this range."));
}

#[test]
fn unreadable_data_file_is_kept_before_the_next_write() {
    let ws = Workspace::new();
    let corrupt = r#"[{"id":"keep-me","date":"2024-01-01","project":"azza","platform":"meta","spend":1,"purchases":1},]"#;
    write_file(&ws.data_file(), corrupt);

    let (ok, _, stderr) = ws.run(&["add", "azza", "meta", "1", "1", "--date", "2024-01-02"]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("Failed to read"));
    assert!(!stderr.contains('\u{1b}'), "log output has escape codes: {stderr}");

    let kept = fs::read_to_string(ws.path("entries.json.bak")).expect("read backup");
    assert_eq!(kept, corrupt);
    let json = ws.run_json(&["list"]);
    assert_eq!(json.as_array().expect("array").len(), 1);
    assert_eq!(json[0]["date"], "2024-01-02");
}
