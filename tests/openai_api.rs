use mockito::{Matcher, Server};
use serde_json::json;

use sentimental::{create_analyzer, AnalyzerConfig, Error, SentimentAnalyzer};

fn analyzer_for(server: &Server) -> Box<dyn SentimentAnalyzer> {
    create_analyzer(
        "openai",
        AnalyzerConfig {
            credential: Some("test-key".to_string()),
            model: None,
            api_base: Some(server.url()),
        },
    )
    .unwrap()
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn scores_a_positive_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.0,
            "messages": [
                {
                    "role": "system",
                    "content": "Analyze the sentiment of the following text. \
                        Return only a floating-point number where -1.0 is very negative, \
                        0.0 is neutral, and 1.0 is very positive."
                },
                {"role": "user", "content": "You're awesome!"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("0.9"))
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let score = analyzer.score("You're awesome!").await.unwrap();

    assert_eq!(score, 0.9);
    mock.assert_async().await;
}

#[tokio::test]
async fn trims_whitespace_around_the_reply() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(" -0.3 "))
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let score = analyzer.score("You kinda suck").await.unwrap();

    assert_eq!(score, -0.3);
}

#[tokio::test]
async fn prose_reply_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("positive"))
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let err = analyzer.score("The sun produces light").await.unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn http_failure_surfaces_as_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(json!({"error": {"message": "Incorrect API key provided"}}).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let err = analyzer.score("hello").await.unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn empty_choices_is_an_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "chatcmpl-123", "choices": []}).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let err = analyzer.score("hello").await.unwrap_err();

    assert!(matches!(err, Error::Api(_)));
}

#[tokio::test]
async fn batch_issues_one_request_per_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("0.5"))
        .expect(2)
        .create_async()
        .await;

    let analyzer = analyzer_for(&server);
    let scores = analyzer
        .score_batch(&["You're okay.".to_string(), "I think you're wrong.".to_string()])
        .await
        .unwrap();

    assert_eq!(scores, vec![0.5, 0.5]);
    mock.assert_async().await;
}
