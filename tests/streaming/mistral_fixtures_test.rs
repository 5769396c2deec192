//! Mistral data-only SSE fixture tests

use omnitext::providers::mistral::streaming::MistralEventConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn role_and_usage_chunks_are_dropped_around_the_content() {
    let frames =
        support::load_sse_frames("tests/fixtures/mistral_chat.sse").expect("load fixture");

    let fragments = support::collect_sse_fragments(frames, MistralEventConverter).await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    assert_eq!(fragments, ["Bon", "jour"]);
}
