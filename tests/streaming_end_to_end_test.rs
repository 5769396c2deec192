//! End-to-end streaming through the dispatcher against a mock backend
//!
//! Each test mounts a raw stream body in the provider's wire framing and
//! checks the fragments that come out of `stream_process`, so the whole
//! chain is exercised: request shape, status check, framing, conversion.

use futures_util::StreamExt;
use omnitext::stream::collect_text;
use omnitext::{Dispatcher, DispatcherConfig};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLAUDE_SSE: &str = r#"event: message_start
data: {"type":"message_start","message":{"id":"msg_01","type":"message","role":"assistant","content":[]}}

event: content_block_start
data: {"type":"content_block_start","index":0,"content_block":{"type":"text","text":""}}

event: content_block_delta
data: {"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hel"}}

event: content_block_delta
data: {"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"lo "}}

event: content_block_delta
data: {"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"world"}}

event: message_stop
data: {"type":"message_stop"}
"#;

const GEMINI_ARRAY: &str = r#"[{"candidates": [{"content": {"parts": [{"text": "Ga"}],"role": "model"},"index": 0}]},
{"candidates": [{"content": {"parts": [{"text": "lax"}],"role": "model"},"index": 0}]},
{"candidates": [{"content": {"parts": [{"text": "ies"}],"role": "model"},"finishReason": "STOP","index": 0}],"usageMetadata": {"totalTokenCount": 7}}]"#;

// Deliberately no trailing newline on the last line.
const OLLAMA_NDJSON: &str = "{\"model\":\"llama3\",\"response\":\"Sil\",\"done\":false}\n{\"model\":\"llama3\",\"response\":\"ver\",\"done\":false}\n{\"model\":\"llama3\",\"response\":\"\",\"done\":true,\"done_reason\":\"stop\"}";

fn dispatcher_with(provider: &str, deployment: Value) -> Dispatcher {
    let config = DispatcherConfig::default().provider(provider, deployment);
    Dispatcher::new(config).expect("dispatcher")
}

async fn collect_fragments(
    dispatcher: &Dispatcher,
    provider: &str,
    prompt: &str,
) -> Vec<String> {
    let mut stream = dispatcher
        .stream_process(provider, prompt, &json!({}))
        .await
        .expect("stream");
    let mut fragments = Vec::new();
    while let Some(item) = stream.next().await {
        fragments.push(item.expect("clean stream"));
    }
    fragments
}

#[tokio::test]
async fn claude_sse_fragments_arrive_in_wire_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(json!({"stream": true})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CLAUDE_SSE, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_with(
        "claude",
        json!({"baseUrl": server.uri(), "apiKey": "sk-ant-test"}),
    );
    let fragments = collect_fragments(&dispatcher, "claude", "Say hello.").await;
    assert_eq!(fragments, ["Hel", "lo ", "world"]);
}

#[tokio::test]
async fn streaming_recovers_through_the_fallback_chain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(json!({"model": "claude-3-opus-20240229"})))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "type": "error",
            "error": {"type": "rate_limit_error", "message": "rate limited"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(json!({"model": "claude-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CLAUDE_SSE, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_with(
        "claude",
        json!({
            "baseUrl": server.uri(),
            "apiKey": "sk-ant-test",
            "fallbackModels": "claude-3-opus-20240229,claude-2"
        }),
    );
    let stream = dispatcher
        .stream_process("claude", "Say hello.", &json!({}))
        .await
        .expect("recovered stream");
    assert_eq!(collect_text(stream).await.unwrap(), "Hello world");
}

#[tokio::test]
async fn gemini_array_objects_stream_as_fragments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:streamGenerateContent"))
        .and(query_param("key", "AIza-test"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(GEMINI_ARRAY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_with(
        "gemini",
        json!({"baseUrl": server.uri(), "apiKey": "AIza-test"}),
    );
    let fragments = collect_fragments(&dispatcher, "gemini", "Say hello.").await;
    assert_eq!(fragments, ["Ga", "lax", "ies"]);
}

#[tokio::test]
async fn ollama_ndjson_streams_without_a_trailing_newline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"stream": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(OLLAMA_NDJSON, "application/x-ndjson"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_with("ollama", json!({"endPoint": server.uri()}));
    let fragments = collect_fragments(&dispatcher, "ollama", "Say hello.").await;
    assert_eq!(fragments, ["Sil", "ver"]);
}

#[tokio::test]
async fn google_translate_rechunks_the_full_translation() {
    let translated = "abcdefghij".repeat(12);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", "gt-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"translations": [{"translatedText": translated}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_with(
        "googletranslate",
        json!({"baseUrl": server.uri(), "apiKey": "gt-test"}),
    );
    let fragments = collect_fragments(&dispatcher, "googletranslate", "chunk me").await;

    // Default chunk size is 50 characters.
    assert_eq!(fragments.len(), 3);
    assert!(fragments.iter().all(|fragment| fragment.chars().count() <= 50));
    assert_eq!(fragments.concat(), translated);
}
