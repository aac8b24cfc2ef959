use assert_cmd::Command;

pub fn daterange_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daterange").unwrap();
    cmd.env_remove("DATERANGE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
