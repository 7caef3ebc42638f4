//! API client tests against a local canned-response server
//!
//! Each test binds an ephemeral port, serves exactly one HTTP response,
//! and checks how the client classifies the outcome.

use gemichat::config::Config;
use gemichat::errors::ApiFailure;
use gemichat::gemini::client::GeminiClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn valid_config() -> Config {
    Config {
        api_key: Some(format!("AIza{}", "a".repeat(35))),
        ..Config::default()
    }
}

fn headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// Serve exactly one request with a canned response, returning the
/// endpoint URL and a handle yielding the request bytes.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);

            if let Some(end) = headers_end(&request) {
                let headers = String::from_utf8_lossy(&request[..end]);
                if request.len() >= end + content_length(&headers) {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        request
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn success_response_yields_answer_text() {
    let (url, _server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"Paris"}]}}]}"#,
    )
    .await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("capital of France?").await;

    assert_eq!(result, Ok("Paris".to_string()));
}

#[tokio::test]
async fn request_carries_question_key_and_generation_config() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
    )
    .await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    client.ask("what is up?").await.unwrap();

    let request = server.await.unwrap();
    let raw = String::from_utf8_lossy(&request);

    // Key travels as a query parameter, never in the body
    assert!(raw.contains("?key=AIza"));
    assert!(raw.to_lowercase().contains("content-type: application/json"));

    let body_start = headers_end(&request).unwrap();
    let body: serde_json::Value = serde_json::from_slice(&request[body_start..]).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "what is up?");
    assert_eq!(body["generationConfig"]["topK"], 40);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
}

#[tokio::test]
async fn http_error_with_provider_message() {
    let (url, _server) = serve_once("400 Bad Request", r#"{"error":{"message":"invalid key"}}"#).await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("hello").await;

    assert_eq!(
        result,
        Err(ApiFailure::Api {
            status: 400,
            message: "invalid key".to_string(),
        })
    );
}

#[tokio::test]
async fn http_error_with_unparsable_body_is_passed_through() {
    let (url, _server) = serve_once("500 Internal Server Error", "it broke").await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("hello").await;

    assert_eq!(
        result,
        Err(ApiFailure::Api {
            status: 500,
            message: "it broke".to_string(),
        })
    );
}

#[tokio::test]
async fn response_without_candidates_is_empty() {
    let (url, _server) = serve_once("200 OK", "{}").await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("hello").await;

    assert_eq!(result, Err(ApiFailure::EmptyResponse));
}

#[tokio::test]
async fn response_with_empty_parts_is_empty() {
    let (url, _server) = serve_once("200 OK", r#"{"candidates":[{"content":{"parts":[]}}]}"#).await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("hello").await;

    assert_eq!(result, Err(ApiFailure::EmptyResponse));
}

#[tokio::test]
async fn malformed_success_body_is_unexpected() {
    let (url, _server) = serve_once("200 OK", "not json at all").await;

    let client = GeminiClient::with_endpoint(valid_config(), url).unwrap();
    let result = client.ask("hello").await;

    assert!(matches!(result, Err(ApiFailure::Unexpected(_))));
}

#[tokio::test]
async fn connection_refused_is_a_network_failure() {
    // Nothing listens on port 1
    let client = GeminiClient::with_endpoint(valid_config(), "http://127.0.0.1:1").unwrap();
    let result = client.ask("hello").await;

    assert!(matches!(result, Err(ApiFailure::Network(_))));
}

#[tokio::test]
async fn invalid_config_short_circuits_without_a_request() {
    let client = GeminiClient::with_endpoint(Config::default(), "http://127.0.0.1:1").unwrap();
    let result = client.ask("hello").await;

    assert!(matches!(result, Err(ApiFailure::ConfigInvalid(_))));
}
