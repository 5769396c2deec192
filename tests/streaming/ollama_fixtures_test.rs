//! Ollama NDJSON fixture tests

use omnitext::providers::ollama::streaming::OllamaLineConverter;

#[path = "../support/stream_fixture.rs"]
mod support;

#[tokio::test]
async fn response_fragments_stream_and_the_done_line_is_silent() {
    let fragments = support::collect_ndjson_fragments(
        "tests/fixtures/ollama_generate.ndjson",
        OllamaLineConverter,
    )
    .await;
    let fragments: Vec<String> = fragments
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("clean stream");

    assert_eq!(fragments, ["Sil", "ver"]);
}
