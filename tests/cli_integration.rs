use assert_cmd::Command;
use predicates::prelude::*;

fn roster_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn add_then_list_shows_the_employee() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "Ann", "a@x.com", "Dev", "Eng"])
        .assert()
        .success()
        .stdout(predicates::str::contains("added"));

    roster_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann"))
        .stdout(predicates::str::contains("a@x.com"));
}

#[test]
fn add_rejects_invalid_email() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "Ann", "not-an-email", "Dev", "Eng"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Email"));
}

#[test]
fn list_filters_and_paginates() {
    let temp_dir = tempfile::tempdir().unwrap();

    for i in 1..=12 {
        roster_cmd(temp_dir.path())
            .args([
                "add",
                &format!("Emp{:02}", i),
                &format!("e{}@x.com", i),
                "Dev",
                "Eng",
            ])
            .assert()
            .success();
    }

    // Page 2 at the default size of 10 holds the last two.
    roster_cmd(temp_dir.path())
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Emp11"))
        .stdout(predicates::str::contains("Emp12"))
        .stdout(predicates::str::contains("Emp01").not());

    roster_cmd(temp_dir.path())
        .args(["list", "--filter", "emp03"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Emp03"))
        .stdout(predicates::str::contains("1 matching"));
}

#[test]
fn list_rejects_odd_page_sizes() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["list", "--per-page", "7"])
        .assert()
        .failure();
}

#[test]
fn import_and_export_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("team.csv");
    std::fs::write(
        &csv_path,
        "Name,Email,Role,Department\n\
         \"Doe, Jane\",jane@x.com,\"VP, Sales\",Sales\n\
         Ann,a@x.com,Dev,Eng\n",
    )
    .unwrap();

    roster_cmd(temp_dir.path())
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported 2"));

    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    roster_cmd(temp_dir.path())
        .args(["export", "--output"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 2"));

    let exported = std::fs::read_dir(&out_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let content = std::fs::read_to_string(exported).unwrap();
    assert!(content.contains("\"Doe, Jane\""));
}

#[test]
fn delete_by_id_removes_the_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = roster_cmd(temp_dir.path())
        .args(["add", "Ann", "a@x.com", "Dev", "Eng"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout.lines().next().unwrap().trim().to_string();

    roster_cmd(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("deleted"));

    roster_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No employees found"));
}

#[test]
fn login_whoami_logout() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["login", "boss@x.com", "--admin"])
        .assert()
        .success()
        .stdout(predicates::str::contains("admin"));

    roster_cmd(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicates::str::contains("boss@x.com"));

    roster_cmd(temp_dir.path()).arg("logout").assert().success();

    roster_cmd(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}
