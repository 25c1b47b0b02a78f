//! Service layer: the question flow.

mod question_service;

pub use question_service::QuestionService;
