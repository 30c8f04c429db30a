use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn filecab(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("filecab").unwrap();
    // Keep the session away from any real ~/.filecab rules file.
    cmd.env("HOME", home);
    cmd
}

const ANNA: &str =
    "create firstname=Anna, lastname=Smith, dateofbirth=1990-05-01, age=30, salary=1000, gender=W";
const JANE: &str =
    "create firstname=Jane, lastname=Smith, dateofbirth=1985-03-12, age=35, salary=1800, gender=F";

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("filecab"));
}

#[test]
fn test_create_find_and_list() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!("{}\nfind lastname smith\nlist\nexit\n", ANNA))
        .assert()
        .success()
        .stdout(predicate::str::contains("Record #1 is created."))
        .stdout(predicate::str::contains("| Anna"))
        .stdout(predicate::str::contains("| 1990-05-01"))
        .stdout(predicate::str::contains("Exiting an application..."));
}

#[test]
fn test_select_with_projection_and_or() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!(
            "{}\n{}\nselect id, firstname where firstname='Anna' or firstname='Jane'\nexit\n",
            ANNA, JANE
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Anna"))
        .stdout(predicate::str::contains("| Jane"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn test_delete_grammar_plural_and_no_candidates() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!(
            "{}\n{}\ndelete where lastname='Nobody'\ndelete where lastname='Smith'\nexit\n",
            ANNA, JANE
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("No records were found to delete."))
        .stdout(predicate::str::contains("Records #1, #2 are deleted."));
}

#[test]
fn test_update_rejects_id_assignment() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!(
            "{}\nupdate set id='9' where lastname='Smith'\nexit\n",
            ANNA
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: the id field cannot be updated"));
}

#[test]
fn test_update_through_rekeyed_index() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!(
            "{}\nupdate set firstname='Anne' where firstname='Anna'\nfind firstname Anne\nexit\n",
            ANNA
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Record #1 is updated."))
        .stdout(predicate::str::contains("| Anne"));
}

#[test]
fn test_insert_upserts_under_given_id() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(
            "insert (id, firstname, lastname, dateofbirth, age, salary, gender) \
             values ('5', 'John', 'Doe', '1978-11-30', '42', '2500', 'M')\nstat\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Record #5 is inserted."))
        .stdout(predicate::str::contains("1 record(s)."));
}

#[test]
fn test_csv_export_remove_import() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("records.csv");
    filecab(dir.path())
        .write_stdin(format!(
            "{}\nexport csv {path}\nremove 1\nimport csv {path}\nstat\nexit\n",
            ANNA,
            path = file.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"))
        .stdout(predicate::str::contains("Record #1 is removed."))
        .stdout(predicate::str::contains("Imported 1 record(s)."))
        .stdout(predicate::str::contains("1 record(s). 0 record(s) are ready for purging."));
}

#[test]
fn test_xml_export_remove_import() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("records.xml");
    filecab(dir.path())
        .write_stdin(format!(
            "{}\nexport xml {path}\nremove 1\nimport xml {path}\nstat\nexit\n",
            ANNA,
            path = file.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"))
        .stdout(predicate::str::contains("Imported 1 record(s)."));
    assert!(std::fs::read_to_string(&file)
        .unwrap()
        .contains("<name first=\"Anna\" last=\"Smith\"/>"));
}

#[test]
fn test_logger_flag_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.log");
    filecab(dir.path())
        .arg("--use-logger")
        .arg("--log-file")
        .arg(&log)
        .write_stdin(format!("{}\nexit\n", ANNA))
        .assert()
        .success();
    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("create() created record #1"));
}

#[test]
fn test_stopwatch_flag_prints_durations() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .arg("--use-stopwatch")
        .write_stdin(format!("{}\nexit\n", ANNA))
        .assert()
        .success()
        .stdout(predicate::str::contains("create method execution duration is"));
}

#[test]
fn test_default_rules_reject_unknown_gender() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(
            "create firstname=Kim, lastname=Lee, dateofbirth=1990-05-01, \
             age=30, salary=1000, gender=X\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("gender 'X' is not allowed"));
}

#[test]
fn test_custom_rules_relax_gender_and_age() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .arg("--validation")
        .arg("custom")
        .write_stdin(
            "create firstname=Kim, lastname=Lee, dateofbirth=1900-05-01, \
             age=126, salary=1000, gender=X\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Record #1 is created."));
}

#[test]
fn test_json_list_format() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .arg("--format")
        .arg("json")
        .write_stdin(format!("{}\nlist\nexit\n", ANNA))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstName\": \"Anna\""))
        .stdout(predicate::str::contains("\"dateOfBirth\": \"1990-05-01\""));
}

#[test]
fn test_unknown_command_keeps_shell_alive() {
    let dir = tempfile::tempdir().unwrap();
    filecab(dir.path())
        .write_stdin(format!("frobnicate\n{}\nexit\n", ANNA))
        .assert()
        .success()
        .stdout(predicate::str::contains("no 'frobnicate' command"))
        .stdout(predicate::str::contains("Record #1 is created."));
}
