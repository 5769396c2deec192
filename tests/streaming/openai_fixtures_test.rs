//! OpenAI data-only SSE fixture tests

use omnitext::providers::openai::streaming::OpenAiEventConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn chunks_stream_until_the_done_sentinel() {
    let frames = support::load_sse_frames("tests/fixtures/openai_responses.sse")
        .expect("load fixture");

    let fragments = support::collect_sse_fragments(frames, OpenAiEventConverter).await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    // The fixture carries a chunk after `[DONE]`; it must never surface.
    assert_eq!(fragments, ["Once", " upon", " a time"]);
}
