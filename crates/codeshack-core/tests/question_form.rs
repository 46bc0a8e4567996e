//! Submitting the question authoring form

mod common;

use codeshack_core::auth::StaticTokenSession;
use codeshack_core::{Action, History, QuestionForm, RichTextDocument, TagSelection, User};
use common::{actions_for, user_json};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn filled_form() -> QuestionForm {
    let mut form = QuestionForm::new();
    form.set_title("Reverse a linked list");
    form.set_content(RichTextDocument::from_plain_text("Reverse it in place."));
    form.set_solution(RichTextDocument::from_plain_text("Walk with three pointers."));
    form.set_tags(&[
        TagSelection::Topic("t1".to_string()),
        TagSelection::Course("c1".to_string()),
    ]);
    form
}

fn signed_in_user() -> User {
    serde_json::from_value(user_json("u1", "student")).unwrap()
}

#[tokio::test]
async fn test_submit_success_navigates_to_new_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/question"))
        .and(body_partial_json(json!({
            "poster": "u1",
            "name": "Reverse a linked list",
            "courses": ["c1"],
            "topics": ["t1"],
            "companies": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "q42",
            "name": "Reverse a linked list"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/user/u1/history"))
        .and(body_partial_json(json!({ "question_id": "q42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "email": "ada@example.com",
            "role": "student",
            "history": ["q42"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let actions = actions_for(&server, Arc::new(StaticTokenSession::new("tok")));
    actions.store().dispatch(Action::SetUser(signed_in_user()));

    let mut form = filled_form();
    assert!(form.can_submit());
    let mut history = History::new();
    let question = form.submit(&actions, &mut history).await.unwrap();

    assert_eq!(question.id, "q42");
    assert!(!form.has_error());
    assert_eq!(history.current(), Some("/question/q42"));
    let saved = actions.store().select(|s| s.auth_user.clone()).unwrap();
    assert_eq!(saved.history.len(), 1);
}

#[tokio::test]
async fn test_submit_failure_sets_error_and_stays() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/user/u1/history"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let actions = actions_for(&server, Arc::new(StaticTokenSession::new("tok")));
    actions.store().dispatch(Action::SetUser(signed_in_user()));

    let mut form = filled_form();
    let mut history = History::new();
    let result = form.submit(&actions, &mut history).await;

    assert!(result.is_err());
    assert!(form.has_error());
    assert!(history.entries().is_empty());
}

#[tokio::test]
async fn test_error_flag_clears_on_later_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "q7" })))
        .mount(&server)
        .await;

    let actions = actions_for(&server, Arc::new(StaticTokenSession::new("tok")));
    let mut form = filled_form();
    let mut history = History::new();

    assert!(form.submit(&actions, &mut history).await.is_err());
    assert!(form.has_error());

    form.submit(&actions, &mut history).await.unwrap();
    assert!(!form.has_error());
    assert_eq!(history.entries(), ["/question/q7"]);
}

#[tokio::test]
async fn test_submit_without_user_skips_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "q8" })))
        .mount(&server)
        .await;

    let actions = actions_for(&server, Arc::new(StaticTokenSession::new("tok")));
    let mut form = filled_form();
    let mut history = History::new();
    form.submit(&actions, &mut history).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("poster").is_none());
    assert_eq!(history.current(), Some("/question/q8"));
}
