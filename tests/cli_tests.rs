use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rssfinder_cmd() -> Command {
    Command::cargo_bin("rssfinder").unwrap()
}

#[test]
fn test_help_lists_commands() {
    rssfinder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("links"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_discover_help_shows_pretty_flag() {
    rssfinder_cmd()
        .arg("discover")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn test_serve_help_shows_port_flag() {
    rssfinder_cmd()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--cert"))
        .stdout(predicate::str::contains("--key"));
}

#[test]
fn test_serve_cert_requires_key() {
    rssfinder_cmd()
        .args(["serve", "--cert", "cert.pem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--key"));
}

#[test]
fn test_serve_https_with_missing_certificate_fails() {
    rssfinder_cmd()
        .args([
            "serve",
            "--bind",
            "127.0.0.1",
            "--port",
            "0",
            "--cert",
            "missing/cert.pem",
            "--key",
            "missing/key.pem",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_half_configured_tls_env_fails() {
    rssfinder_cmd()
        .arg("links")
        .arg("https://example.com/")
        .env("RSSFINDER_TLS_CERT", "cert.pem")
        .env_remove("RSSFINDER_TLS_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RSSFINDER_TLS_KEY"));
}

#[test]
fn test_discover_requires_url() {
    rssfinder_cmd()
        .arg("discover")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<URL>"));
}

#[test]
fn test_discover_empty_url_fails() {
    rssfinder_cmd()
        .arg("discover")
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a valid url"));
}

#[test]
fn test_invalid_port_env_fails() {
    rssfinder_cmd()
        .arg("discover")
        .arg("https://example.com/")
        .env("RSSFINDER_PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RSSFINDER_PORT"));
}

mod against_mock_site {
    use super::*;

    async fn site() -> MockServer {
        let server = MockServer::start().await;
        let uri = server.uri();

        let home = format!(
            r#"<html><body>
                <a href="{uri}/rss.xml">feed</a>
                <a href="{uri}/missing">missing</a>
                <a href="https://elsewhere.example/">elsewhere</a>
            </body></html>"#
        );

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(home))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/rss.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Mock</title><link>https://example.com/</link><description>d</description></channel></rss>"#,
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_links_prints_same_domain_candidates() {
        let server = site().await;
        let uri = server.uri();
        let root = format!("{}/", uri);

        let output = tokio::task::spawn_blocking(move || {
            rssfinder_cmd().arg("links").arg(&root).output()
        })
        .await
        .unwrap()
        .unwrap();

        output
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("{}/rss.xml", uri)))
            .stdout(predicate::str::contains(format!("{}/missing", uri)))
            .stdout(predicate::str::contains("elsewhere").not());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_discover_prints_json_report() {
        let server = site().await;
        let uri = server.uri();
        let root = format!("{}/", uri);

        let output = tokio::task::spawn_blocking(move || {
            rssfinder_cmd().arg("discover").arg(&root).output()
        })
        .await
        .unwrap()
        .unwrap();

        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["rss"]["count"], 1);
        assert_eq!(report["rss"]["value"][0], format!("{}/rss.xml", uri));
        assert_eq!(report["errors"]["count"], 1);
        assert_eq!(report["errors"]["value"][0]["url"], format!("{}/missing", uri));
    }
}
