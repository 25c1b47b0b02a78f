//! Transport that answers every question with the same body.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::QuestionRequest;
use crate::error::ClientError;
use crate::ports::{QaTransport, RawResponse};

#[derive(Debug, Clone)]
enum Reply {
    Fixed(RawResponse),
    Demo,
}

/// Offline stand-in for the QA service.
#[derive(Debug, Clone)]
pub struct CannedTransport {
    reply: Reply,
    delay: Option<Duration>,
}

impl CannedTransport {
    pub fn new(response: RawResponse) -> Self {
        Self {
            reply: Reply::Fixed(response),
            delay: None,
        }
    }

    /// Sample answer with an LTAG syntax tree, echoing the question.
    pub fn demo() -> Self {
        Self {
            reply: Reply::Demo,
            delay: None,
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn demo_body(question: &str) -> String {
        json!({
            "question": question,
            "answer": "[Uruguay]",
            "query": "SELECT ?x WHERE { ?x <http://dbpedia.org/ontology/winner> <http://dbpedia.org/resource/1930_FIFA_World_Cup> }",
            "responseTime": 87,
            "sltag": {
                "syntax": [{
                    "name": "S",
                    "children": [
                        {"name": "DP:1", "children": [{"name": "who", "children": null}]},
                        {"name": "VP:1", "children": [
                            {"name": "V:1", "children": [{"name": "won", "children": null}]},
                            {"name": "DP:2", "operation": "SUB", "children": [
                                {"name": "the", "children": null},
                                {"name": "NP:1", "children": [
                                    {"name": "World Cup 1930", "children": null}
                                ]}
                            ]}
                        ]}
                    ]
                }],
                "semantics": null
            }
        })
        .to_string()
    }
}

#[async_trait]
impl QaTransport for CannedTransport {
    async fn post_question(&self, request: &QuestionRequest) -> Result<RawResponse, ClientError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Reply::Fixed(response) => Ok(response.clone()),
            Reply::Demo => Ok(RawResponse::ok(Self::demo_body(&request.question))),
        }
    }

    fn endpoint(&self) -> String {
        "canned://demo".to_string()
    }
}
