#![allow(dead_code)]

use assert_cmd::Command;
use roster::domain::Student;
use std::path::Path;

pub fn roster_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("ROSTER_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn sample_students() -> Vec<Student> {
    let mut alice = Student::new("Alice", 20, "F", "S1");
    alice.enroll("Math");
    alice.enroll("Physics");
    let mut bob = Student::new("Bob", 22, "M", "S2");
    bob.enroll("Art");
    vec![alice, bob, Student::new("Carol", 19, "F", "S3")]
}
