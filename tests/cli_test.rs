use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn test_no_arguments_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("ntprobe").unwrap();
    cmd.arg("--no-color").assert().failure();
}

#[test]
fn test_rejects_non_positive_timeout() {
    let mut cmd = Command::cargo_bin("ntprobe").unwrap();
    cmd.arg("--no-color")
        .arg("--timeout")
        .arg("0")
        .arg("127.0.0.1")
        .assert()
        .failure()
        .code(2)
        .stdout(contains("--timeout must be a positive number"));
}

#[test]
fn test_deaf_loopback_port_reports_timeout() {
    // Nothing listens on the discard port; the unconnected socket never sees
    // the ICMP rejection, so the probe runs out the clock.
    let mut cmd = Command::cargo_bin("ntprobe").unwrap();
    cmd.arg("--no-color")
        .arg("--timeout")
        .arg("0.3")
        .arg("127.0.0.1:9")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("unreachable"))
        .stdout(contains("timed out"))
        .stdout(contains("Reachable: 0/1"));
}

#[test]
fn test_json_output_carries_schema_and_reason() {
    let mut cmd = Command::cargo_bin("ntprobe").unwrap();
    cmd.arg("--no-color")
        .arg("-j")
        .arg("--timeout")
        .arg("0.3")
        .arg("127.0.0.1:9")
        .assert()
        .failure()
        .stdout(contains("\"schema_version\":1"))
        .stdout(contains("\"reachable\":false"))
        .stdout(contains("timed out"));
}

#[cfg(feature = "network-tests")]
#[test]
fn test_positional_argument_as_server() {
    let mut cmd = Command::cargo_bin("ntprobe").unwrap();
    cmd.arg("--nocolor")
        .arg("1.pool.ntp.org")
        .assert()
        .success()
        .stdout(contains("Server:"));
}
