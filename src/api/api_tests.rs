#[cfg(test)]
mod chat_handler_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::models::catalog::Catalog;
    use crate::observability::AppMetrics;
    use crate::security::validation::RequestValidator;
    use crate::services::random::ScriptedRandom;
    use crate::services::responder::{
        ENCOURAGING_REPLIES, GREETING_REPLY, ResponseSelector, SAFETY_REDIRECT_REPLY, Vocabulary,
    };

    fn app() -> Router {
        let state = AppState::new(
            Catalog::builtin(),
            ResponseSelector::new(Vocabulary::Extended),
            Box::new(ScriptedRandom::new([2])),
            RequestValidator::new(),
            Arc::new(AppMetrics::default()),
        );
        create_router(state)
    }

    async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_chat_greeting() {
        let (status, body) = post_chat(app(), json!({"message": "Hello robot"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], GREETING_REPLY);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chat_safety_beats_greeting() {
        let (_, body) = post_chat(app(), json!({"message": "hi you are stupid"})).await;
        assert_eq!(body["response"], SAFETY_REDIRECT_REPLY);
    }

    #[tokio::test]
    async fn test_chat_fallback_uses_random_draw() {
        let (_, body) = post_chat(app(), json!({"message": "tell me a story"})).await;
        assert_eq!(body["response"], ENCOURAGING_REPLIES[2]);
    }

    #[tokio::test]
    async fn test_chat_rejects_blank() {
        let (status, body) = post_chat(app(), json!({"message": "   "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let (status, _) = post_chat(app(), json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_rejects_long_message() {
        let (status, _) = post_chat(app(), json!({"message": "a".repeat(201)})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = app()
            .oneshot(Request::builder().uri("/riddles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()["X-Content-Type-Options"], "nosniff");
        assert_eq!(response.headers()["X-Frame-Options"], "DENY");
    }
}

#[cfg(test)]
mod game_handler_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};

    fn app() -> Router {
        create_router(AppState::development())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_riddles() {
        let (status, body) = send(app(), "GET", "/riddles", None).await;
        assert_eq!(status, StatusCode::OK);
        let riddles = body["riddles"].as_array().unwrap();
        assert_eq!(riddles.len(), 4);
        assert_eq!(riddles[0]["answer"], "dog");
        assert!(riddles[0]["hint"].is_string());
    }

    #[tokio::test]
    async fn test_list_animals() {
        let (status, body) = send(app(), "GET", "/animals", None).await;
        assert_eq!(status, StatusCode::OK);
        let animals = body["animals"].as_array().unwrap();
        assert_eq!(animals.len(), 4);
        assert_eq!(animals[0]["name"], "elephant");
        assert_eq!(animals[0]["clues"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_check_riddle_correct_is_case_insensitive() {
        let (status, body) = send(
            app(),
            "POST",
            "/check_riddle",
            Some(json!({"riddle_id": 0, "answer": "  DOG "})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"correct": true, "answer": "dog", "points": 10}));
    }

    #[tokio::test]
    async fn test_check_riddle_wrong() {
        let (_, body) = send(
            app(),
            "POST",
            "/check_riddle",
            Some(json!({"riddle_id": 1, "answer": "moon"})),
        )
        .await;
        assert_eq!(body, json!({"correct": false, "answer": "sun", "points": 0}));
    }

    #[tokio::test]
    async fn test_check_riddle_invalid_id() {
        let (status, body) = send(
            app(),
            "POST",
            "/check_riddle",
            Some(json!({"riddle_id": 4, "answer": "dog"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Invalid riddle ID"));
    }

    #[tokio::test]
    async fn test_check_animal() {
        let (status, body) = send(
            app(),
            "POST",
            "/check_animal",
            Some(json!({"animal_id": 2, "guess": "Penguin"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"correct": true, "answer": "penguin", "emoji": "🐧", "points": 25})
        );

        let (_, body) = send(
            app(),
            "POST",
            "/check_animal",
            Some(json!({"animal_id": 0, "guess": "elephants"})),
        )
        .await;
        assert_eq!(body["correct"], false);
        assert_eq!(body["points"], 0);
    }

    #[tokio::test]
    async fn test_check_animal_invalid_id_and_blank_guess() {
        let (status, body) = send(
            app(),
            "POST",
            "/check_animal",
            Some(json!({"animal_id": 99, "guess": "lion"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Invalid animal ID"));

        let (status, _) = send(
            app(),
            "POST",
            "/check_animal",
            Some(json!({"animal_id": 1, "guess": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(app(), "GET", "/leaderboard", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body["message"].as_str().unwrap().contains("/leaderboard"));
    }
}
