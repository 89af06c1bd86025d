// tests/smoke_probe_tests.rs
use mockito::Server;
use reqwest::Client;
use smoke_probe::checker::HealthChecker;
use smoke_probe::config::Config;
use smoke_probe::probe::{
    Probe, ProbeError, ProbeOutcome, ServerHealthProbe, StaticAssetsProbe,
};
use smoke_probe::report::ProbeStatus;
use std::time::Duration;
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(5);

fn client() -> Client {
    Client::builder()
        .timeout(TIMEOUT)
        .build()
        .expect("test client")
}

fn base_url(server: &Server) -> Url {
    server.url().parse().expect("mock server URL")
}

#[tokio::test]
async fn root_200_passes_server_health() {
    let mut server = Server::new_async().await;
    let _root = server.mock("GET", "/").with_status(200).create_async().await;

    let probe = ServerHealthProbe::new(base_url(&server), TIMEOUT);
    let outcome = probe.run(&client()).await.expect("server reachable");

    assert_eq!(outcome, ProbeOutcome::Passed);
}

#[tokio::test]
async fn root_500_fails_server_health() {
    let mut server = Server::new_async().await;
    let _root = server.mock("GET", "/").with_status(500).create_async().await;

    let probe = ServerHealthProbe::new(base_url(&server), TIMEOUT);
    let outcome = probe.run(&client()).await.expect("server reachable");

    match outcome {
        ProbeOutcome::Failed(detail) => assert!(detail.contains("500"), "{}", detail),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn root_204_fails_server_health() {
    // Anything other than exactly 200 is a failure, 2xx included.
    let mut server = Server::new_async().await;
    let _root = server.mock("GET", "/").with_status(204).create_async().await;

    let probe = ServerHealthProbe::new(base_url(&server), TIMEOUT);
    let outcome = probe.run(&client()).await.expect("server reachable");

    assert!(matches!(outcome, ProbeOutcome::Failed(_)));
}

#[tokio::test]
async fn absent_favicon_present_manifest_passes_assets() {
    let mut server = Server::new_async().await;
    let _favicon = server
        .mock("GET", "/favicon.ico")
        .with_status(404)
        .create_async()
        .await;
    let _manifest = server
        .mock("GET", "/manifest.json")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let base = base_url(&server);
    let probe = StaticAssetsProbe::new(
        &base,
        &["/favicon.ico".to_string(), "/manifest.json".to_string()],
        TIMEOUT,
    )
    .expect("asset URLs");
    let outcome = probe.run(&client()).await.expect("server reachable");

    assert_eq!(outcome, ProbeOutcome::Passed);
}

#[tokio::test]
async fn asset_500_fails_and_names_the_path() {
    let mut server = Server::new_async().await;
    let _favicon = server
        .mock("GET", "/favicon.ico")
        .with_status(200)
        .create_async()
        .await;
    let _manifest = server
        .mock("GET", "/manifest.json")
        .with_status(500)
        .create_async()
        .await;

    let base = base_url(&server);
    let probe = StaticAssetsProbe::new(
        &base,
        &["/favicon.ico".to_string(), "/manifest.json".to_string()],
        TIMEOUT,
    )
    .expect("asset URLs");
    let outcome = probe.run(&client()).await.expect("server reachable");

    match outcome {
        ProbeOutcome::Failed(detail) => {
            assert!(detail.contains("/manifest.json"), "{}", detail);
            assert!(detail.contains("500"), "{}", detail);
            assert!(!detail.contains("/favicon.ico"), "{}", detail);
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn unresolvable_host_is_unreachable() {
    // .invalid never resolves (RFC 2606), so this is a transport failure.
    let url: Url = "http://smoke-probe.invalid/".parse().unwrap();
    let probe = ServerHealthProbe::new(url, TIMEOUT);

    let err = probe.run(&client()).await.expect_err("must not resolve");
    let ProbeError::Unreachable(detail) = err;
    assert!(!detail.is_empty());
}

#[tokio::test]
async fn connection_refused_is_unreachable_for_assets() {
    // Bind a port, then drop the listener so nothing accepts on it.
    let refused_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let base: Url = format!("http://127.0.0.1:{}/", refused_port)
        .parse()
        .unwrap();
    let probe = StaticAssetsProbe::new(&base, &["/favicon.ico".to_string()], TIMEOUT)
        .expect("asset URLs");

    let err = probe.run(&client()).await.expect_err("nothing listening");
    assert!(matches!(err, ProbeError::Unreachable(_)));
}

#[tokio::test]
async fn full_run_reports_all_probes_and_exits_zero() {
    let mut server = Server::new_async().await;
    let _root = server.mock("GET", "/").with_status(200).create_async().await;
    let _favicon = server
        .mock("GET", "/favicon.ico")
        .with_status(404)
        .create_async()
        .await;
    let _manifest = server
        .mock("GET", "/manifest.json")
        .with_status(200)
        .create_async()
        .await;

    let config = Config::for_target(base_url(&server));
    let checker = HealthChecker::new(&config).expect("checker");
    let report = checker.run().await;

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].probe, "server_health");
    assert_eq!(report.results[1].probe, "static_assets");
    assert!(report.all_passed());
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn failing_root_makes_the_run_exit_nonzero() {
    let mut server = Server::new_async().await;
    let _root = server.mock("GET", "/").with_status(503).create_async().await;
    let _favicon = server
        .mock("GET", "/favicon.ico")
        .with_status(404)
        .create_async()
        .await;
    let _manifest = server
        .mock("GET", "/manifest.json")
        .with_status(404)
        .create_async()
        .await;

    let config = Config::for_target(base_url(&server));
    let checker = HealthChecker::new(&config).expect("checker");
    let report = checker.run().await;

    assert_eq!(report.results[0].status, ProbeStatus::Failed);
    assert_eq!(report.results[1].status, ProbeStatus::Passed);
    assert_eq!(report.exit_code(), 1);
}
