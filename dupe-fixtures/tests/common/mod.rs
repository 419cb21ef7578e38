use assert_cmd::cargo::cargo_bin_cmd;

pub fn dupe_fixtures() -> assert_cmd::Command {
    cargo_bin_cmd!("dupe-fixtures")
}
