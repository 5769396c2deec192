//! Claude named-event SSE fixture tests

use omnitext::error::ProviderError;
use omnitext::providers::claude::streaming::ClaudeEventConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn message_lifecycle_yields_only_delta_text() {
    let frames = support::load_sse_frames("tests/fixtures/claude_messages.sse")
        .expect("load fixture");

    let fragments = support::collect_sse_fragments(frames, ClaudeEventConverter).await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    // message_start, ping, block bookkeeping and message_stop are dropped.
    assert_eq!(fragments, ["Hel", "lo ", "world"]);
}

#[tokio::test]
async fn error_event_fails_the_stream_after_partial_output() {
    let frames = support::load_sse_frames("tests/fixtures/claude_overloaded.sse")
        .expect("load fixture");

    let fragments = support::collect_sse_fragments(frames, ClaudeEventConverter).await;

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].as_deref().unwrap(), "Par");
    assert!(
        matches!(&fragments[1], Err(ProviderError::Stream(m)) if m.contains("Overloaded"))
    );
}
