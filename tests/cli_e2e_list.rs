//! End-to-end tests for the `classroom-clone list` command.

mod common;
use common::prelude::*;

#[test]
fn test_list_names() {
    let fixture = TestFixture::new().with_config(configs::THREE_STUDENTS);

    let output = fixture.command().arg("list").output().unwrap();
    assert!(output.status.success());

    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    csc316-002-P2-01
    csc316-002-P2-02
    csc316-002-P2-03
    ");
}

#[test]
fn test_list_crosses_padding_boundary() {
    let fixture = TestFixture::new().with_config(configs::ELEVEN_STUDENTS);

    fixture
        .command()
        .args(["list", "--start", "9", "--step", "1"])
        .assert()
        .success()
        .stdout("csc316-002-P2-09\ncsc316-002-P2-10\ncsc316-002-P2-11\n");
}

#[test]
fn test_list_urls() {
    let fixture = TestFixture::new().with_config(configs::THREE_STUDENTS);

    fixture
        .command()
        .args(["list", "--urls", "--count", "1"])
        .assert()
        .success()
        .stdout("git clone git@github.ncsu.edu:engr-csc316-fall2017/csc316-002-P2-01.git\n");
}

#[test]
fn test_list_without_config_uses_defaults() {
    let fixture = TestFixture::new();

    let output = fixture.command().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 80);
    assert_eq!(stdout.lines().last(), Some("csc316-002-P2-80"));
}

#[test]
fn test_list_hundredth_is_unpadded() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--start", "100", "--count", "100"])
        .assert()
        .success()
        .stdout("csc316-002-P2-100\n");
}
