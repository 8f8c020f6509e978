// tests/fetch_http.rs
//
// Fetch path end-to-end against a canned local HTTP server: status
// mapping, body parsing, cache busting, and the resulting view states.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobdeck::core::fetch::{FetchError, fetch};
use jobdeck::core::filter::filter;
use jobdeck::data::ViewState;

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve one canned response on an ephemeral port. Returns the feed
/// URL and a receiver yielding the request path the client actually
/// sent.
fn serve_once(response: String) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap_or(0);
            let req = String::from_utf8_lossy(&buf[..n]).into_owned();
            let path = req.split_whitespace().nth(1).unwrap_or_default().to_string();
            let _ = stream.write_all(response.as_bytes());
            let _ = tx.send(path);
        }
    });

    (format!("http://{addr}/jobs.json"), rx)
}

const TWO_JOBS: &str = r#"{
    "last_updated": "2026-08-27T06:00:00",
    "jobs": [
        {
            "job_id": "a",
            "job_title": "HR Data Analyst",
            "employer_name": "Acme",
            "employer_logo": "https://cdn.example.com/acme.png",
            "job_city": "Austin",
            "job_state": "TX",
            "job_country": null,
            "job_apply_link": "https://example.com/a",
            "job_posted_at_datetime_utc": "2026-08-26T12:00:00.000Z"
        },
        {
            "job_id": "b",
            "job_title": "People Ops Lead",
            "employer_name": "Initech",
            "employer_logo": null,
            "job_apply_link": "https://example.com/b",
            "job_posted_at_datetime_utc": null
        }
    ]
}"#;

#[test]
fn http_404_maps_to_waiting_for_data() {
    let (url, _rx) = serve_once(http_response("404 Not Found", "not here"));
    let err = fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::NotFound));

    // ...and surfaces as a terminal Error view, never a partial list
    match ViewState::from_fetch(Err(err)) {
        ViewState::Error(msg) => assert!(msg.contains("Waiting for data")),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn invalid_json_maps_to_corrupt() {
    let (url, _rx) = serve_once(http_response("200 OK", "{ this is not json"));
    let err = fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::Corrupt));
    assert!(err.to_string().contains("corrupted"));
}

#[test]
fn unreachable_server_maps_to_network() {
    // Bind then drop to get a port nothing is listening on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = fetch(&format!("http://{addr}/jobs.json")).unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[test]
fn valid_feed_parses_in_order_with_optionals() {
    let (url, _rx) = serve_once(http_response("200 OK", TWO_JOBS));
    let ds = fetch(&url).unwrap();

    assert_eq!(ds.last_updated, "2026-08-27T06:00:00");
    assert_eq!(ds.jobs.len(), 2);
    assert_eq!(ds.jobs[0].job_id, "a");
    assert_eq!(ds.jobs[1].job_id, "b");
    assert_eq!(ds.jobs[0].job_state.as_deref(), Some("TX"));
    assert!(ds.jobs[0].job_country.is_none());
    assert!(ds.jobs[1].employer_logo.is_none());
    assert!(ds.jobs[1].job_posted_at_datetime_utc.is_none());
}

#[test]
fn empty_feed_is_ready_with_no_results() {
    let body = r#"{ "last_updated": "2026-08-27T06:00:00", "jobs": [] }"#;
    let (url, _rx) = serve_once(http_response("200 OK", body));

    match ViewState::from_fetch(fetch(&url)) {
        ViewState::Ready(ds) => {
            assert!(ds.jobs.is_empty());
            assert!(filter(&ds.jobs, "").is_empty());
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn requests_carry_a_cache_buster() {
    let (url, rx) = serve_once(http_response("200 OK", TWO_JOBS));
    fetch(&url).unwrap();

    let path = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(
        path.contains("/jobs.json?t="),
        "expected cache-busting query, got {path}"
    );
}
