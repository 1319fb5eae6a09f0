use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_trivia-dash"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);
    assert!(output.status.success(), "--version should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("trivia-dash {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_short_version_flag() {
    let output = run(&["-V"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("trivia-dash "));
}

#[test]
fn test_help_flag_lists_options() {
    let output = run(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--amount"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("TRIVIA_LOG"));
}

#[test]
fn test_bad_amount_exits_with_usage_error() {
    let output = run(&["--amount", "lots"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid amount 'lots'"));
}
