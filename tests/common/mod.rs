use assert_cmd::Command;

pub fn cardmeta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cardmeta").unwrap();
    cmd.env_remove("CARDMETA_ROOT");
    cmd
}
