use anyhow::Result;
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_hello-greeter"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_prints_greeting_with_no_args() -> Result<()> {
    let output = run_binary(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Hello World!\n");
    Ok(())
}

#[test]
fn test_ignores_every_argument() -> Result<()> {
    let cases: &[&[&str]] = &[
        &["--help"],
        &["--version"],
        &["--definitely-not-a-flag"],
        &["one", "two", "three"],
        &["-v", "--", "-x"],
    ];

    for args in cases {
        let output = run_binary(args)?;
        assert_eq!(output.status.code(), Some(0), "args: {:?}", args);
        assert_eq!(output.stdout, b"Hello World!\n", "args: {:?}", args);
    }
    Ok(())
}

#[test]
fn test_verbose_logs_stay_off_stdout() -> Result<()> {
    let output = run_binary(&["--verbose"])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Hello World!\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Starting hello-greeter"));
    Ok(())
}

#[test]
fn test_json_logs_stay_off_stdout() -> Result<()> {
    let output = run_binary(&["--json-logs"])?;

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello World!\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().all(|line| line.starts_with('{')));
    Ok(())
}
