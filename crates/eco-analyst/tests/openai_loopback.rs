//! End-to-end `OpenAiChat` requests against a loopback `tiny_http` server.

use std::io::Read;
use std::sync::mpsc;

use eco_analyst::{AnalystError, ChatModel, OpenAiChat, prompt::build_request};
use eco_config::OpenAiConfig;
use pretty_assertions::assert_eq;

struct Captured {
    method: String,
    authorization: Option<String>,
    body: serde_json::Value,
}

fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind loopback");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            let mut raw = String::new();
            let _ = request.as_reader().read_to_string(&mut raw);
            let _ = tx.send(Captured {
                method: request.method().to_string(),
                authorization,
                body: serde_json::from_str(&raw).unwrap_or_default(),
            });
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}/v1/chat/completions"), rx)
}

fn client(endpoint: String) -> OpenAiChat {
    OpenAiChat::from_config(&OpenAiConfig {
        endpoint,
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("client builds")
}

#[tokio::test]
async fn posts_chat_request_with_bearer_key() {
    let (endpoint, rx) = serve_once(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"| GWP | Cork | Vinyl |"}}]}"#,
    );
    let request = build_request("gpt-4", "Cork", "Vinyl", "evidence");

    let text = client(endpoint).complete(&request, "sk-test").await.unwrap();

    assert_eq!(text, "| GWP | Cork | Vinyl |");
    let captured = rx.recv().unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(captured.body["model"], "gpt-4");
    assert_eq!(captured.body["temperature"], 0.0);
    assert_eq!(captured.body["messages"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn auth_failure_surfaces_provider_message() {
    let (endpoint, _rx) = serve_once(
        401,
        r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#,
    );
    let request = build_request("gpt-4", "A", "B", "");

    let err = client(endpoint).complete(&request, "sk-bad").await.unwrap_err();
    match err {
        AnalystError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let request = build_request("gpt-4", "A", "B", "");

    let err = client(format!("http://127.0.0.1:{port}/v1/chat/completions"))
        .complete(&request, "sk")
        .await
        .unwrap_err();
    assert!(matches!(err, AnalystError::Http(_)));
}
