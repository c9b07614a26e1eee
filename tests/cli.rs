use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn session(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("session").unwrap();
    cmd.env("SESSION_STORE_DATA_DIR", dir.path());
    cmd
}

fn stored(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join("data").join(format!("{}.txt", name))).unwrap()
}

#[test]
fn test_show_creates_empty_session() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session is empty."));

    assert_eq!(stored(&dir, "session"), "-");
}

#[test]
fn test_list_workflow() {
    let dir = TempDir::new().unwrap();

    session(&dir).args(["list", "create", "Scores"]).assert().success();
    session(&dir)
        .args(["list", "add", "Scores", "int", "10"])
        .assert()
        .success();
    session(&dir)
        .args(["list", "add", "Scores", "int", "20"])
        .assert()
        .success();
    session(&dir)
        .args(["list", "remove-at", "Scores", "0"])
        .assert()
        .success();

    assert_eq!(stored(&dir, "session"), "^Scores]1.20]-");

    session(&dir)
        .args(["list", "get", "Scores", "0"])
        .assert()
        .success()
        .stdout("20\n");
    session(&dir)
        .args(["list", "len", "Scores"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_out_of_range_removal_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    session(&dir).args(["list", "create", "L"]).assert().success();
    session(&dir)
        .args(["list", "remove-at", "L", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out of range"));

    session(&dir)
        .args(["list", "get", "L", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 999 was not assigned in L"));
}

#[test]
fn test_missing_list_fails() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["list", "remove", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("List not found: Nope"));
}

#[test]
fn test_variables_and_named_files() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["--file", "Settings", "var", "set", "Offset", "int", "-1"])
        .assert()
        .success();
    session(&dir)
        .args(["--file", "Settings", "var", "get", "Volume", "-t", "float", "-d", "1.0"])
        .assert()
        .success()
        .stdout("1\n");

    assert_eq!(stored(&dir, "Settings"), "-^Offset]1.-1]^Volume]2.1]");

    session(&dir)
        .args(["--file", "Settings", "var", "get", "Offset", "--type", "string"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type mismatch"));
}

#[test]
fn test_manual_save_mode_still_persists_cli_changes() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["config", "--save-mode", "manual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save mode:     manual"));

    session(&dir)
        .args(["var", "set", "Name", "string", "ada"])
        .assert()
        .success();

    assert_eq!(stored(&dir, "session"), "-^Name]0.ada]");
}

#[test]
fn test_encrypt_and_decrypt() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["var", "set", "Lives", "int", "3"])
        .assert()
        .success();
    session(&dir).arg("encrypt").assert().success();

    let shifted = stored(&dir, "session");
    assert_ne!(shifted, "-^Lives]1.3]");

    session(&dir)
        .args(["var", "get", "Lives"])
        .assert()
        .success()
        .stdout("3\n");

    session(&dir).arg("decrypt").assert().success();
    assert_eq!(stored(&dir, "session"), "-^Lives]1.3]");
}

#[test]
fn test_clear() {
    let dir = TempDir::new().unwrap();

    session(&dir).args(["list", "create", "Scores"]).assert().success();
    session(&dir).arg("clear").assert().success();

    assert_eq!(stored(&dir, "session"), "-");
}

#[test]
fn test_history_records_diagnostics() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["config", "--log-mode", "important"])
        .assert()
        .success();
    session(&dir).args(["list", "create", "Scores"]).assert().success();
    session(&dir).args(["list", "create", "Scores"]).assert().success();

    session(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("[WARN] List named Scores already exists"))
        .stdout(predicate::str::contains("Created list").not());
}

#[test]
fn test_history_level_filter() {
    let dir = TempDir::new().unwrap();

    session(&dir)
        .args(["config", "--log-mode", "all"])
        .assert()
        .success();
    session(&dir).args(["list", "create", "L"]).assert().success();
    session(&dir)
        .args(["list", "remove-at", "L", "5"])
        .assert()
        .success();

    session(&dir)
        .args(["history", "--level", "error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ERROR] Index 5 is out of range"))
        .stdout(predicate::str::contains("[INFO]").not());

    session(&dir)
        .args(["history", "--level", "loud"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_type_is_rejected() {
    let dir = TempDir::new().unwrap();

    session(&dir).args(["list", "create", "L"]).assert().success();
    session(&dir)
        .args(["list", "add", "L", "int", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid integer"));
}
