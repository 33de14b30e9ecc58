use assert_cmd::Command;
use std::path::Path;

pub fn taskboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.env_remove("TASKBOARD_ROOT");
    cmd.env_remove("TASKBOARD_TOKEN");
    cmd.env_remove("TASKBOARD_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a local board with the sample data in `dir`
#[allow(dead_code)]
pub fn seeded_board(dir: &Path) {
    taskboard_cmd()
        .arg("init")
        .arg(dir)
        .arg("--seed")
        .assert()
        .success();
}
