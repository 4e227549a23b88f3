mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::{Matcher, Server, ServerGuard};
    use predicates::prelude::PredicateBooleanExt;
    use predicates::str::{contains, starts_with};

    use std::net::TcpListener;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "a11y-analyzer";

    const TWO_ISSUES: &str = r#"[
        {
            "id": "button-name",
            "impact": "critical",
            "help": "Buttons must have discernible text",
            "description": "Ensures buttons have discernible text",
            "nodes": [{ "html": "<button class=\"icon\"></button>" }]
        },
        {
            "id": "region",
            "impact": "moderate",
            "help": "All page content should be contained by landmarks",
            "description": "Ensures all page content is contained by landmarks",
            "nodes": [{ "html": "<div id=\"footer\">" }, { "html": "<p>hi</p>" }]
        }
    ]"#;

    // Runs the binary from an empty directory (no config file to discover)
    // and points the connectivity probe at the mock server, so the tests
    // never leave localhost.
    fn command(server: &ServerGuard, dir: &tempfile::TempDir) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path())
            .env_remove("RUST_LOG")
            .arg("--probe-addr")
            .arg(server.host_with_port());
        Ok(cmd)
    }

    fn endpoint(server: &ServerGuard) -> String {
        format!("{}/analyze", server.url())
    }

    #[test]
    fn test_output__when_no_subcommand() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().stderr(contains("Usage"));
        Ok(())
    }

    #[test]
    fn test_output__when_issues_found() -> TestResult {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/analyze")
            .match_body(Matcher::Json(serde_json::json!({ "url": "https://example.com" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TWO_ISSUES)
            .create();
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["--endpoint", endpoint(&server).as_str(), "analyze", "https://example.com"]);

        cmd.assert()
            .code(1)
            .stdout(contains("Analyzing website"))
            .stdout(contains("🔍 Issues Found: 2"))
            .stdout(contains("Buttons must have discernible text"))
            .stdout(contains("Impact: critical"))
            .stdout(contains("Impact: moderate"))
            .stdout(contains("- <p>hi</p>"));
        mock.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_no_issues() -> TestResult {
        let mut server = Server::new();
        let _mock = server.mock("POST", "/analyze").with_status(200).with_body("[]").create();
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["--endpoint", endpoint(&server).as_str(), "analyze", "https://example.com"]);

        cmd.assert()
            .success()
            .stdout(contains("🔍 Issues Found: 0"))
            .stdout(contains("⚠️").not());
        Ok(())
    }

    #[test]
    fn test_output__when_url_invalid() -> TestResult {
        let mut server = Server::new();
        let mock = server.mock("POST", "/analyze").expect(0).create();
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["--endpoint", endpoint(&server).as_str(), "analyze", "example.com"]);

        cmd.assert()
            .code(2)
            .stderr(contains("Please enter a valid URL (e.g., https://example.com)"));
        mock.assert();
        Ok(())
    }

    #[test]
    fn test_output__when_server_error() -> TestResult {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/analyze")
            .with_status(500)
            .with_body(r#"{ "error": "net::ERR_NAME_NOT_RESOLVED" }"#)
            .create();
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["--endpoint", endpoint(&server).as_str(), "analyze", "https://nope.invalid"]);

        cmd.assert()
            .code(2)
            .stderr(contains("net::ERR_NAME_NOT_RESOLVED"));
        Ok(())
    }

    #[test]
    fn test_output__when_server_unreachable() -> TestResult {
        let server = Server::new();
        let closed = TcpListener::bind("127.0.0.1:0")?.local_addr()?;
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args([
            "--endpoint",
            format!("http://{}/analyze", closed).as_str(),
            "analyze",
            "https://example.com",
        ]);

        cmd.assert()
            .code(2)
            .stderr(contains("Could not connect to the analysis server"));
        Ok(())
    }

    #[test]
    fn test_output__json() -> TestResult {
        let mut server = Server::new();
        let _mock = server.mock("POST", "/analyze").with_status(200).with_body(TWO_ISSUES).create();
        let dir = tempfile::tempdir()?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["--endpoint", endpoint(&server).as_str(), "analyze", "https://example.com", "--json"]);

        let output = cmd.assert().code(1).stdout(starts_with("[")).get_output().clone();
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[1]["impact"], "moderate");
        Ok(())
    }

    #[test]
    fn test_config_file__endpoint_is_used() -> TestResult {
        let mut server = Server::new();
        let mock = server.mock("POST", "/from-config").with_status(200).with_body("[]").create();
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".a11y-analyzer.toml"),
            format!("endpoint = \"{}/from-config\"\ntimeout = 5\n", server.url()),
        )?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["analyze", "https://example.com"]);

        cmd.assert().success().stdout(contains("Issues Found: 0"));
        mock.assert();
        Ok(())
    }

    #[test]
    fn test_config_file__invalid_endpoint() -> TestResult {
        let server = Server::new();
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(".a11y-analyzer.toml"), "endpoint = \"nowhere\"\n")?;

        let mut cmd = command(&server, &dir)?;
        cmd.args(["analyze", "https://example.com"]);

        cmd.assert()
            .code(2)
            .stderr(contains("Invalid endpoint URL 'nowhere'"));
        Ok(())
    }
}
