// tests/report_tests.rs
use async_trait::async_trait;
use mon::config::{self, ServiceSpec};
use mon::health::{CheckResult, HealthChecker, Poller, ProbeOutcome};
use mon::report::{render_json, render_table, Notifier, NotifyError, OutputMode, Reporter};
use proptest::prelude::*;
use std::sync::Mutex;
use tokio::net::TcpListener;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

#[tokio::test]
async fn test_notify_only_for_unreachable_service() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/up")
        .with_status(200)
        .create_async()
        .await;

    let services = vec![
        ServiceSpec::new("up", format!("{}/up", server.url())),
        ServiceSpec::new("down", refused_url().await),
    ];
    let results = Poller::new(HealthChecker::new().unwrap()).poll(&services).await;

    let notifier = RecordingNotifier::default();
    let mut out = Vec::new();
    Reporter::new(OutputMode::Notify, &notifier)
        .report(&results, &mut out)
        .await
        .unwrap();

    assert_eq!(
        *notifier.sent.lock().unwrap(),
        vec![("down".to_string(), "Service Unavailable".to_string())]
    );
}

#[tokio::test]
async fn test_json_report_from_loaded_services() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/a")
        .match_header("authorization", "Bearer t")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/b")
        .with_status(500)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("services.json");
    let file = serde_json::json!([
        {"name": "a", "url": format!("{}/a", server.url()), "headers": {"Authorization": "Bearer t"}},
        {"name": "b", "url": format!("{}/b", server.url())},
    ]);
    std::fs::write(&path, file.to_string()).unwrap();

    let services = config::load_services(&path).await.unwrap();
    let results = Poller::new(HealthChecker::new().unwrap()).poll(&services).await;

    let notifier = RecordingNotifier::default();
    let mut out = Vec::new();
    Reporter::new(OutputMode::Json, &notifier)
        .report(&results, &mut out)
        .await
        .unwrap();

    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "a");
    assert_eq!(parsed[0]["status"], 200);
    assert_eq!(parsed[0]["headers"]["Authorization"], "Bearer t");
    assert_eq!(parsed[1]["name"], "b");
    assert_eq!(parsed[1]["status"], 500);
    assert!(parsed[1].get("headers").is_none());
    assert!(!out.ends_with(b"\n"));

    let back: Vec<CheckResult> = serde_json::from_slice(&out).unwrap();
    assert_eq!(back, results);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[test]
fn test_table_row_for_healthy_service() {
    let results = vec![CheckResult::new(
        ServiceSpec::new("svcA", "http://x"),
        ProbeOutcome::Responded(200),
    )];

    let mut out = Vec::new();
    render_table(&results, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["SERVICE", "URL", "STATUS"]);
    assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["svcA", "http://x", "OK"]);
}

#[test]
fn test_empty_results_render_empty_reports() {
    let mut table = Vec::new();
    render_table(&[], &mut table).unwrap();
    assert_eq!(String::from_utf8(table).unwrap().lines().count(), 1);

    let mut json = Vec::new();
    render_json(&[], &mut json).unwrap();
    assert_eq!(json, b"[]");
}

fn arb_result() -> impl Strategy<Value = CheckResult> {
    (
        "[a-z][a-z0-9-]{0,11}",
        "[a-z]{1,10}(\\.[a-z]{2,3})?",
        prop::sample::select(vec![200u16, 201, 301, 404, 418, 500, 503]),
    )
        .prop_map(|(name, host, status)| {
            CheckResult::new(
                ServiceSpec::new(name, format!("http://{host}/")),
                ProbeOutcome::Responded(status),
            )
        })
}

proptest! {
    #[test]
    fn table_rows_follow_input_order_and_align(results in prop::collection::vec(arb_result(), 0..20)) {
        let mut out = Vec::new();
        render_table(&results, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), results.len() + 1);

        let header = lines[0];
        let url_col = header.find("URL").unwrap();
        let status_col = header.find("STATUS").unwrap();

        for (line, result) in lines[1..].iter().zip(&results) {
            prop_assert!(line.starts_with(result.name()));
            prop_assert_eq!(line.find(result.url()), Some(url_col));
            prop_assert!(line.ends_with(result.reason()));
            prop_assert_eq!(line.len() - result.reason().len(), status_col);
        }
    }
}
