//! Request client against a mock QA endpoint.

use std::time::Duration;

use oq_01_request_client::{
    AppState, ClientConfig, ClientError, Completion, HttpTransport, QuestionApi, QuestionService,
};
use oq_02_tree_renderer::{Bounds, RecordingSurface, RenderError, TreeRenderer, TreeRendererApi};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> QuestionService<HttpTransport> {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    QuestionService::new(HttpTransport::new(&config).unwrap())
}

#[tokio::test]
async fn answer_without_tree_cannot_be_visualized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/qa"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"question": "What is X?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "What is X?",
            "answer": "Y",
            "query": "q1",
            "tree": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut state = AppState::new();

    let ticket = state.begin_request("What is X?");
    let result = service.submit_question(ticket.question()).await;
    assert_eq!(state.complete(ticket, result), Completion::Applied);

    let payload = state.current().unwrap();
    assert_eq!(payload.answer, "Y");
    assert!(payload.tree.is_none());
    assert!(!state.can_visualize());

    let renderer = TreeRenderer::default();
    let mut surface = RecordingSurface::new(Bounds::new(560.0, 400.0));
    let err = renderer.visualize(payload, &mut surface).unwrap_err();
    assert!(matches!(err, RenderError::InvalidTree(_)));
    assert!(surface.commands().is_empty());
}

#[tokio::test]
async fn sltag_answer_is_visualized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/qa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "Who wrote Dune?",
            "answer": "Frank Herbert",
            "query": "SELECT ?x WHERE { dbr:Dune dbo:author ?x }",
            "responseTime": 15,
            "sltag": {
                "syntax": [{"name": "S", "children": [
                    {"name": "NP", "children": null},
                    {"name": "VP", "children": [{"name": "V", "children": null}]}
                ]}],
                "semantics": {}
            }
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let payload = service.submit_question("Who wrote Dune?").await.unwrap();
    assert_eq!(payload.response_time_ms, Some(15));

    let renderer = TreeRenderer::default();
    let mut surface = RecordingSurface::new(Bounds::new(560.0, 400.0));
    let layout = renderer.visualize(&payload, &mut surface).unwrap();
    assert_eq!(layout.nodes.len(), 4);
    assert_eq!(surface.edge_count(), 3);
}

#[tokio::test]
async fn custom_path_and_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ontoqa/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "q", "answer": "a", "query": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/ontoqa", mock_server.uri()))
        .path("/ask")
        .build()
        .unwrap();
    let service = QuestionService::new(HttpTransport::new(&config).unwrap());
    assert_eq!(service.submit_question("q").await.unwrap().answer, "a");
}

#[tokio::test]
async fn server_error_keeps_previous_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"question": "good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "good", "answer": "fine", "query": ""
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({"question": "bad"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("grammar not loaded"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut state = AppState::new();

    let ticket = state.begin_request("good");
    let result = service.submit_question(ticket.question()).await;
    state.complete(ticket, result);

    let ticket = state.begin_request("bad");
    let result = service.submit_question(ticket.question()).await;
    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 500,
            body: "grammar not loaded".into()
        })
    );
    assert_eq!(state.complete(ticket, result), Completion::Failed);
    assert_eq!(state.current().unwrap().answer, "fine");
    assert!(state.latest_notice().is_some());
}

#[tokio::test]
async fn non_object_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"just a string\""))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    assert!(matches!(
        service.submit_question("q").await,
        Err(ClientError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn configured_timeout_is_enforced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"question": "q", "answer": "a", "query": ""}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .request_timeout(Some(Duration::from_millis(100)))
        .build()
        .unwrap();
    let service = QuestionService::new(HttpTransport::new(&config).unwrap());
    let err = service.submit_question("q").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { ref message, .. } if message == "request timed out"));
}

#[tokio::test]
async fn each_submission_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "q", "answer": "a", "query": ""
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    for _ in 0..3 {
        service.submit_question("q").await.unwrap();
    }
}
