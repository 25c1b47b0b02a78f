//! # Integration Test Flows
//!
//! The request client, the answer state and the tree renderer working
//! together against a mock QA endpoint.
//!
//! ## Flows Tested:
//!
//! 1. **Ask → store → visualize**: a tree-bearing answer is drawn
//! 2. **Ask → store → visualize without tree**: refused with `InvalidTree`
//! 3. **Overlapping questions**: a slow, older answer never replaces a newer one
//! 4. **Failure after success**: the stored answer survives

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::mpsc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use oq_01_request_client::{
        AppState, CannedTransport, ClientConfig, ClientError, Completion, HttpTransport,
        NoticeLevel, QuestionApi, QuestionService,
    };
    use oq_02_tree_renderer::{
        Bounds, RecordingSurface, RenderError, SvgSurface, TreeRenderer, TreeRendererApi,
    };
    use shared_types::{ErrorKind, TreeNode};

    use crate::fixtures::{answer_json, balanced, sentence};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn http_service(server: &MockServer) -> Arc<dyn QuestionApi> {
        let config = ClientConfig::builder()
            .base_url(server.uri())
            .request_timeout(Some(Duration::from_secs(5)))
            .build()
            .unwrap();
        Arc::new(QuestionService::new(HttpTransport::new(&config).unwrap()))
    }

    async fn mount_answer(server: &MockServer, question: &str, answer: &str, tree: Option<&TreeNode>) {
        Mock::given(method("POST"))
            .and(path("/qa"))
            .and(body_json(serde_json::json!({"question": question})))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer_json(question, answer, tree)))
            .mount(server)
            .await;
    }

    // =============================================================================
    // ASK → STORE → VISUALIZE
    // =============================================================================

    #[tokio::test]
    async fn test_answer_with_tree_is_drawn() {
        let server = MockServer::start().await;
        mount_answer(&server, "Who wrote Dune?", "Frank Herbert", Some(&sentence())).await;

        let api = http_service(&server);
        let mut state = AppState::new();

        let ticket = state.begin_request("Who wrote Dune?");
        let result = api.submit_question(ticket.question()).await;
        assert_eq!(state.complete(ticket, result), Completion::Applied);
        assert!(state.can_visualize());

        let renderer = TreeRenderer::default();
        let mut surface = RecordingSurface::new(Bounds::new(560.0, 400.0));
        let layout = renderer
            .visualize(state.current().unwrap(), &mut surface)
            .unwrap();

        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.edges.len(), 3);
        let s = layout.find("S").unwrap();
        let v = layout.find("V").unwrap();
        assert!(layout.nodes.iter().all(|n| n.y >= s.y && n.y <= v.y));
        assert_eq!(surface.node_count(), 4);
    }

    #[tokio::test]
    async fn test_answer_without_tree_is_refused() {
        let server = MockServer::start().await;
        mount_answer(&server, "What is X?", "Y", None).await;

        let api = http_service(&server);
        let mut state = AppState::new();
        let ticket = state.begin_request("What is X?");
        let result = api.submit_question(ticket.question()).await;
        state.complete(ticket, result);

        assert!(state.current().unwrap().tree.is_none());
        assert!(!state.can_visualize());

        let renderer = TreeRenderer::default();
        let mut surface = RecordingSurface::new(Bounds::new(560.0, 400.0));
        let err = renderer
            .visualize(state.current().unwrap(), &mut surface)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidTree(_)));

        state.report(&err);
        let notice = state.latest_notice().unwrap();
        assert_eq!(notice.kind, Some(ErrorKind::InvalidTree));
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_large_tree_renders_to_svg() {
        let tree = balanced(4, 3);
        let server = MockServer::start().await;
        mount_answer(&server, "big", "ok", Some(&tree)).await;

        let payload = http_service(&server).submit_question("big").await.unwrap();
        assert_eq!(payload.tree.as_ref(), Some(&tree));

        let renderer = TreeRenderer::default();
        let mut svg = SvgSurface::new(Bounds::new(1200.0, 800.0));
        renderer.visualize(&payload, &mut svg).unwrap();
        let doc = svg.to_document();
        assert_eq!(doc.matches("<circle ").count(), tree.node_count());
        assert_eq!(doc.matches("<path ").count(), tree.node_count() - 1);
    }

    // =============================================================================
    // OVERLAPPING QUESTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_slow_older_answer_is_discarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({"question": "slow"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(answer_json("slow", "old answer", Some(&sentence())))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;
        mount_answer(&server, "fast", "new answer", None).await;

        let api = http_service(&server);
        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        for question in ["slow", "fast"] {
            let ticket = state.begin_request(question);
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.submit_question(ticket.question()).await;
                tx.send((ticket, result)).unwrap();
            });
            // Keep the send order deterministic
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        drop(tx);

        let mut outcomes = Vec::new();
        while let Some((ticket, result)) = rx.recv().await {
            let question = ticket.question().to_string();
            outcomes.push((question, state.complete(ticket, result)));
        }

        assert_eq!(
            outcomes,
            vec![
                ("fast".to_string(), Completion::Applied),
                ("slow".to_string(), Completion::Stale),
            ]
        );
        assert_eq!(state.current().unwrap().answer, "new answer");
        assert!(!state.can_visualize());
        assert!(!state.is_pending());
    }

    // =============================================================================
    // FAILURES
    // =============================================================================

    #[tokio::test]
    async fn test_failure_after_success_keeps_tree() {
        let server = MockServer::start().await;
        mount_answer(&server, "good", "fine", Some(&sentence())).await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({"question": "broken"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"answer\": 1"))
            .mount(&server)
            .await;

        let api = http_service(&server);
        let mut state = AppState::new();

        let ticket = state.begin_request("good");
        let result = api.submit_question(ticket.question()).await;
        state.complete(ticket, result);

        let ticket = state.begin_request("broken");
        let result = api.submit_question(ticket.question()).await;
        assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
        assert_eq!(state.complete(ticket, result), Completion::Failed);

        assert!(state.can_visualize());
        assert_eq!(
            state.latest_notice().unwrap().kind,
            Some(ErrorKind::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Bind then drop a listener so the port is known to be closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClientConfig::builder()
            .base_url(format!("http://127.0.0.1:{port}"))
            .request_timeout(Some(Duration::from_secs(2)))
            .build()
            .unwrap();
        let api = QuestionService::new(HttpTransport::new(&config).unwrap());

        let mut state = AppState::new();
        let ticket = state.begin_request("anyone there?");
        let result = api.submit_question(ticket.question()).await;
        assert_eq!(state.complete(ticket, result), Completion::Failed);
        assert!(state.current().is_none());
        assert_eq!(
            state.latest_notice().unwrap().kind,
            Some(ErrorKind::TransportFailure)
        );
    }

    #[tokio::test]
    async fn test_demo_transport_flow() {
        let api = QuestionService::new(CannedTransport::demo());
        let mut state = AppState::new();
        let ticket = state.begin_request("Who won the World Cup 1930?");
        let result = api.submit_question(ticket.question()).await;
        state.complete(ticket, result);

        let payload = state.current().unwrap();
        let layout = TreeRenderer::default()
            .visualize(payload, &mut RecordingSurface::new(Bounds::new(660.0, 500.0)))
            .unwrap();
        assert_eq!(layout.nodes.len(), payload.tree.as_ref().unwrap().node_count());
    }
}
