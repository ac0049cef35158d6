use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::{tempdir, TempDir};

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgety_cli").unwrap();
    cmd.env("BUDGETY_CLI_SCRIPT", "1")
        .env("BUDGETY_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("add inc Salary 200\nadd exp Rent 67\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added inc-0 Salary + 200.00 $"))
        .stdout(contains("Added exp-0 Rent - 67.00 $"))
        .stdout(contains("+ 133.00 $"))
        .stdout(contains("Shares of income: exp-0 34%"));
}

#[test]
fn invalid_items_are_dropped_silently() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("add inc Salary abc\nadd exp Rent 0\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added").not())
        .stdout(contains("No income yet."))
        .stdout(contains("No expenses yet."));
}

#[test]
fn delete_removes_item_and_reports() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("add exp Rent 50\nadd exp Food 20\ndelete exp-0\ndelete exp 9\nlist\n")
        .assert()
        .success()
        .stdout(contains("Deleted exp-0"))
        .stdout(contains("exp-1"))
        .stdout(contains("Deleted exp-9").not());
}

#[test]
fn dump_prints_ledger_json() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("add exp Rent 50\ndump\n")
        .assert()
        .success()
        .stdout(contains("\"overall_percentage\": -1"))
        .stdout(contains("\"percentage\": -1"));
}

#[test]
fn saved_config_changes_presentation() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "currency_symbol": "€", "plain_mode": true }"#,
    )
    .unwrap();

    script_cmd(&home)
        .write_stdin("add inc Salary 1200\n")
        .assert()
        .success()
        .stdout(contains("OK: Added inc-0 Salary + 1,200.00 €"));
}

#[test]
fn config_set_persists_to_home() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("config set currency_symbol CHF\nconfig show\n")
        .assert()
        .success()
        .stdout(contains("currency_symbol set to CHF"));

    let saved = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(saved.contains("\"CHF\""));
}

#[test]
fn usage_errors_and_unknown_commands_are_reported() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("add savings Jar 4\nsumary\n")
        .assert()
        .success()
        .stdout(contains("unknown item type `savings`"))
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}
