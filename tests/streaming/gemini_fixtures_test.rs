//! Gemini JSON array fixture tests

use omnitext::providers::gemini::streaming::GeminiObjectConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn array_objects_yield_candidate_text_in_order() {
    // Pretty-printed array body: objects span many lines and the last one
    // carries the usageMetadata tail alongside its text.
    let fragments = support::collect_json_fragments(
        "tests/fixtures/gemini_generate.json",
        GeminiObjectConverter,
    )
    .await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    assert_eq!(fragments, ["Ga", "lax", "ies"]);
}
