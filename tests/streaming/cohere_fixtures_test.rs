//! Cohere NDJSON fixture tests

use omnitext::providers::cohere::streaming::CohereLineConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn text_generation_lines_yield_in_order() {
    // The fixture has no trailing newline, so the closing stream-end line
    // only parses if the framing flushes at EOF.
    let fragments =
        support::collect_ndjson_fragments("tests/fixtures/cohere_chat.ndjson", CohereLineConverter)
            .await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    assert_eq!(fragments, ["He", "llo", "!"]);
}
