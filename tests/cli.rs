use assert_cmd::Command;

#[test]
fn test_help_lists_workspace_flag() {
    let output = Command::cargo_bin("reqtree").unwrap().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--workspace"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("reqtree")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}
