//! Integration tests for the CLI interface

mod common;

use assert_cmd::Command;
use chrono::{Duration, Local, NaiveDate};
use common::{TestEnv, RECORDS_CSV};
use predicates::prelude::*;

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("chet").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("time"))
        .stdout(predicate::str::contains("click"))
        .stdout(predicate::str::contains("group"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("chet").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_upper() {
    let env = TestEnv::new();
    env.chet()
        .args(["upper", "123.45"])
        .assert()
        .success()
        .stdout("壹佰贰拾叁元肆角伍分\n");

    env.chet()
        .args(["upper", "-12.3"])
        .assert()
        .success()
        .stdout("负壹拾贰元叁角\n");
}

#[test]
fn test_upper_rejects_text() {
    TestEnv::new()
        .chet()
        .args(["upper", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a decimal amount"));
}

#[test]
fn test_pinyin() {
    let env = TestEnv::new();
    env.chet()
        .args(["pinyin", "中国"])
        .assert()
        .success()
        .stdout("zhongguo\n");
    env.chet()
        .args(["pinyin", "--initials", "长城"])
        .assert()
        .success()
        .stdout("cc\n");
}

#[test]
fn test_lunar_and_julian() {
    let env = TestEnv::new();
    env.chet()
        .args(["lunar", "2024-09-17"])
        .assert()
        .success()
        .stdout("甲辰龙年 八月十五\n");
    env.chet()
        .args(["lunar", "1850-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the lunar table"));
    env.chet()
        .args(["julian", "2000-01-01 12:00:00"])
        .assert()
        .success()
        .stdout("2451545\n");
}

#[test]
fn test_elapsed() {
    TestEnv::new()
        .chet()
        .args([
            "elapsed",
            "--from",
            "2024-01-01 00:00:00",
            "--to",
            "2024-01-02 12:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("经过了36.00小时"));
}

#[test]
fn test_elapsed_defaults_to_one_day() {
    TestEnv::new()
        .chet()
        .arg("elapsed")
        .assert()
        .success()
        .stdout(predicate::str::contains("经过了24.00小时"));
}

#[test]
fn test_group_text_output() {
    let env = TestEnv::new();
    let input = env.write_file("records.csv", RECORDS_CSV);
    env.chet()
        .arg("group")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Group 0:\n  Record 1: 2024-01-01 10:00:00\n  Record 4: 2024-01-01 10:00:00\n  Record 2: 2024-01-01 10:30:00\n  Record 5: 2024-01-01 10:45:00\n",
        ))
        .stdout(predicate::str::contains(
            "Group 1:\n  Record 3: 2024-01-01 12:00:00\n",
        ));
}

#[test]
fn test_group_by_key_json() {
    let env = TestEnv::new();
    let input = env.write_file("records.csv", RECORDS_CSV);
    let output = env
        .chet()
        .arg("group")
        .arg(&input)
        .args(["--by-key", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let partitions = value.as_array().unwrap();
    assert_eq!(partitions.len(), 2);
    assert_eq!(partitions[0]["key"], "123");
    assert_eq!(partitions[0]["groups"].as_array().unwrap().len(), 2);
    assert_eq!(partitions[1]["key"], "456");
    let ids: Vec<&str> = partitions[1]["groups"][0]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "5"]);
}

#[test]
fn test_group_threshold_from_settings() {
    let env = TestEnv::with_settings("[grouping]\nthreshold_minutes = 10\n");
    let input = env.write_file("records.csv", RECORDS_CSV);
    env.chet()
        .arg("group")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 3:"))
        .stdout(predicate::str::contains("Group 4:").not());
}

#[test]
fn test_group_missing_file() {
    let env = TestEnv::new();
    env.chet()
        .arg("group")
        .arg(env.path().join("none.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read records"));
}

#[test]
fn test_invalid_settings_file() {
    TestEnv::with_settings("[ntp]\ntimeout_ms = 0\n")
        .chet()
        .args(["pinyin", "中"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn test_click_in_the_past_schedules_nothing() {
    TestEnv::new()
        .chet()
        .args(["click", "2000-01-01 00:00:00", "--local-clock", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing scheduled"));
}

#[test]
fn test_click_dry_run_fires() {
    let target = (Local::now().naive_local() + Duration::milliseconds(800))
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string();
    TestEnv::new()
        .chet()
        .args(["click", &target, "-n", "3", "--local-clock", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent 3 click(s) at (0, 0) (dry run)"));
}

#[test]
fn test_time_from_local_server() {
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = socket.local_addr().unwrap().port();
    let reply = chet::ntp::packet::encode_transmit(
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    );
    let server = std::thread::spawn(move || {
        let mut buffer = [0u8; 48];
        let (_, peer) = socket.recv_from(&mut buffer).unwrap();
        socket.send_to(&reply, peer).unwrap();
    });

    let env = TestEnv::with_settings(&format!(
        "[ntp]\nserver = \"127.0.0.1\"\nport = {port}\ntimeout_ms = 2000\n"
    ));
    env.chet()
        .args(["time", "--strict", "-f", "yyyy-MM"])
        .assert()
        .success()
        .stdout("2024-06\n");
    server.join().unwrap();
}
