//! End-to-end connector flows over a scripted HTTP collaborator.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use thread_relay::{
    Connector, ConnectorError, HttpRequest, HttpResponse, HttpSend, Method, RelayConfig, ThreadId,
    TransportError,
};

/// Collaborator that replays a queue of canned responses and records every
/// request it receives. When the queue runs dry it repeats `fallback`,
/// which keeps open-ended polling scenarios easy to script.
#[derive(Clone, Default)]
struct ScriptedHttp {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    fallback: Arc<Mutex<Option<HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedHttp {
    fn push_ok(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
    }

    fn push_transport_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError {
                message: message.to_string(),
            }));
    }

    fn set_fallback(&self, status: u16, body: &str) {
        *self.fallback.lock().unwrap() = Some(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for ScriptedHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        if let Some(scripted) = self.responses.lock().unwrap().pop_front() {
            return scripted;
        }
        self.fallback
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TransportError {
                message: "scripted response queue exhausted".to_string(),
            })
    }
}

fn test_config() -> RelayConfig {
    RelayConfig {
        api_key: "sk-test".to_string(),
        response_model: "gpt-test".to_string(),
        response_endpoint: "https://api.test/v1/chat/completions".to_string(),
        thread_endpoint: "https://api.test/v1/threads".to_string(),
        assistant_id: "asst_1".to_string(),
        run_interval: Duration::from_millis(10),
        run_max_wait: Duration::from_millis(100),
    }
}

fn header<'req>(request: &'req HttpRequest, name: &str) -> Option<&'req str> {
    request
        .headers
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

#[tokio::test(start_paused = true)]
async fn full_thread_conversation_flow() {
    let http = ScriptedHttp::default();
    // create_thread
    http.push_ok(200, r#"{"id":"thread_123","object":"thread"}"#);
    // post_message
    http.push_ok(200, r#"{"id":"msg_1","role":"user"}"#);
    // start_run
    http.push_ok(200, r#"{"id":"run_9","object":"thread.run","status":"queued"}"#);
    // two status queries before completion
    http.push_ok(200, r#"{"id":"run_9","status":"in_progress"}"#);
    http.push_ok(200, r#"{"id":"run_9","status":"completed"}"#);
    // latest_reply: newest message first, answer nested in content blocks
    http.push_ok(
        200,
        r#"{"data":[{"id":"msg_2","content":[{"text":{"value":"It depends.\nHe said \"42\"."}}]},{"id":"msg_1","content":[{"text":{"value":"the question"}}]}]}"#,
    );

    let connector = Connector::with_client(test_config(), http.clone());

    let thread = connector.create_thread().await.unwrap();
    assert_eq!(thread, ThreadId::from("thread_123"));

    let reply = connector.prompt_thread("the question", &thread).await.unwrap();
    assert_eq!(reply.text, "It depends.\nHe said \"42\".");
    assert_eq!(reply.run_id.as_str(), "run_9");

    let requests = http.requests();
    assert_eq!(requests.len(), 6);

    // Thread creation: empty POST to the thread endpoint base.
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "https://api.test/v1/threads");
    assert_eq!(header(&requests[0], "Authorization"), Some("Bearer sk-test"));
    assert_eq!(header(&requests[0], "OpenAI-Beta"), Some("assistants=v2"));

    // Message append carries the user text.
    assert_eq!(requests[1].url, "https://api.test/v1/threads/thread_123/messages");
    let message_body = requests[1].body.as_deref().unwrap();
    assert!(message_body.contains(r#""role":"user""#));
    assert!(message_body.contains(r#""content":"the question""#));

    // Run start names the configured assistant.
    assert_eq!(requests[2].url, "https://api.test/v1/threads/thread_123/runs");
    assert!(requests[2].body.as_deref().unwrap().contains(r#""assistant_id":"asst_1""#));

    // Status queries are GETs against the run resource.
    assert_eq!(requests[3].method, Method::Get);
    assert_eq!(requests[3].url, "https://api.test/v1/threads/thread_123/runs/run_9");
    assert_eq!(requests[4].url, requests[3].url);

    // Reply retrieval reads the whole message list.
    assert_eq!(requests[5].method, Method::Get);
    assert_eq!(requests[5].url, "https://api.test/v1/threads/thread_123/messages");
}

#[tokio::test(start_paused = true)]
async fn one_shot_prompt_extracts_content() {
    let http = ScriptedHttp::default();
    http.push_ok(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"hello there"}}]}"#,
    );

    let connector = Connector::with_client(test_config(), http.clone());
    let answer = connector.prompt("hi").await.unwrap();
    assert_eq!(answer, "hello there");

    let requests = http.requests();
    assert_eq!(requests[0].url, "https://api.test/v1/chat/completions");
    assert_eq!(header(&requests[0], "Authorization"), Some("Bearer sk-test"));
    // The one-shot endpoint is not an assistants-beta surface.
    assert_eq!(header(&requests[0], "OpenAI-Beta"), None);
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains(r#""model":"gpt-test""#));
    assert!(body.contains(r#""content":"hi""#));
}

#[tokio::test(start_paused = true)]
async fn run_that_never_completes_times_out() {
    let http = ScriptedHttp::default();
    http.push_ok(200, r#"{"id":"msg_1","role":"user"}"#);
    http.push_ok(200, r#"{"id":"run_9","status":"queued"}"#);
    http.set_fallback(200, r#"{"id":"run_9","status":"in_progress"}"#);

    let connector = Connector::with_client(test_config(), http);
    let thread = ThreadId::from("thread_123");

    let error = connector.prompt_thread("q", &thread).await.unwrap_err();
    match error {
        ConnectorError::RunTimeout {
            waited,
            deadline,
            interval,
        } => {
            assert_eq!(deadline, Duration::from_millis(100));
            assert_eq!(interval, Duration::from_millis(10));
            assert!(waited >= deadline && waited < deadline + interval);
        }
        other => panic!("expected RunTimeout, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn non_success_status_carries_status_and_body() {
    let http = ScriptedHttp::default();
    http.push_ok(401, r#"{"error":{"message":"bad key"}}"#);

    let connector = Connector::with_client(test_config(), http);
    let error = connector.create_thread().await.unwrap_err();
    match error {
        ConnectorError::RemoteRequest { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected RemoteRequest, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn transport_failure_during_polling_aborts_the_wait() {
    let http = ScriptedHttp::default();
    http.push_ok(200, r#"{"id":"msg_1","role":"user"}"#);
    http.push_ok(200, r#"{"id":"run_9","status":"queued"}"#);
    http.push_ok(200, r#"{"id":"run_9","status":"in_progress"}"#);
    http.push_transport_failure("connection reset by peer");

    let connector = Connector::with_client(test_config(), http.clone());
    let thread = ThreadId::from("thread_123");

    let error = connector.prompt_thread("q", &thread).await.unwrap_err();
    match error {
        ConnectorError::Transport(failure) => {
            assert!(failure.message.contains("connection reset"));
        }
        other => panic!("expected Transport, got {other:?}"),
    }
    // message + run + two status queries, nothing after the failure
    assert_eq!(http.requests().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn malformed_reply_body_is_a_parse_error() {
    let http = ScriptedHttp::default();
    // The messages envelope is empty, so there is no newest message.
    http.push_ok(200, r#"{"data":[],"object":"list"}"#);

    let connector = Connector::with_client(test_config(), http);
    let thread = ThreadId::from("thread_123");

    let error = connector.latest_reply(&thread).await.unwrap_err();
    assert!(matches!(error, ConnectorError::Parse(_)));
}
