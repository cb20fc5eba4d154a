use assert_cmd::Command;

pub fn quicklist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quicklist").unwrap();
    cmd.env_remove("QUICKLIST_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
