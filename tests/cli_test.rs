use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn http_smoke() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_http-smoke"));
    for var in ["SMOKE_URL", "SMOKE_CONFIG", "SMOKE_TIMEOUT", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn free_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[test]
fn test_request_failure_exits_zero() -> Result<()> {
    let url = format!("http://127.0.0.1:{}/", free_port()?);
    let output = http_smoke().arg(&url).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("An error occurred: "), "stdout: {}", stdout);
    assert!(stdout.to_lowercase().contains("refused"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_invalid_target_url_exits_zero() -> Result<()> {
    let output = http_smoke().arg("not a url").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).starts_with("An error occurred: Invalid URL 'not a url'"));

    Ok(())
}

#[test]
fn test_out_of_range_timeout_exits_one() -> Result<()> {
    let output = http_smoke()
        .args(["http://127.0.0.1:1/", "--timeout", "0"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("--timeout").count(), 1, "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_invalid_config_file_exits_one() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[target]\nurl = \"ftp://example.com\"\n")?;

    let output = http_smoke().arg("--config").arg(file.path()).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());

    Ok(())
}

#[test]
fn test_env_url_is_used_without_positional() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/from-env");
        then.status(200).body("env ok");
    });

    let output = http_smoke()
        .env("SMOKE_URL", server.url("/from-env"))
        .output()?;

    mock.assert();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).starts_with("GET Response (Status Code: 200):\nenv ok\n"));

    Ok(())
}

#[test]
fn test_env_timeout_applies() -> Result<()> {
    let output = http_smoke()
        .arg("http://127.0.0.1:1/")
        .env("SMOKE_TIMEOUT", "0")
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_cli_url_overrides_config_file() -> Result<()> {
    let server = MockServer::start();
    let cli_mock = server.mock(|when, then| {
        when.method(GET).path("/cli");
        then.status(200).body("cli");
    });
    let file_mock = server.mock(|when, then| {
        when.method(GET).path("/file");
        then.status(200).body("file");
    });

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        "[target]\nurl = \"{}\"\n\n[output]\nformat = \"json\"\n",
        server.url("/file")
    )?;

    let output = http_smoke()
        .arg(server.url("/cli"))
        .arg("--config")
        .arg(file.path())
        .output()?;

    cli_mock.assert();
    file_mock.assert_hits(0);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["body"], "cli");

    // The file's json format also selects the json log layer.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.trim().is_empty());
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "not a json log line: {}",
            line
        );
    }

    Ok(())
}
