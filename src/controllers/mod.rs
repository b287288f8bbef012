pub mod accounts;
pub mod auth;
pub mod health;
pub mod notes;

use actix_web::HttpResponse;

use crate::error::StoreError;

/// Map a store failure onto the HTTP error contract.
pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(kind) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{} not found", kind)
        })),
        StoreError::InvalidCredentials => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid credentials"
        })),
        err => {
            log::error!("Store operation failed: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", err)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::AppState;
    use crate::store::RecordStore;

    fn new_state(dir: &tempfile::TempDir) -> web::Data<AppState> {
        let store = RecordStore::load(dir.path().join("db.json")).unwrap();
        web::Data::new(AppState {
            store: Arc::new(store),
        })
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(super::health::config)
                    .configure(super::notes::config)
                    .configure(super::accounts::config)
                    .configure(super::auth::config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_root_returns_greeting() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("API đang chạy từ Render!"));
    }

    #[actix_web::test]
    async fn test_note_crud_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::post()
            .uri("/notes")
            .set_json(json!({"text": "a"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], json!(1));
        assert_eq!(created["text"], json!("a"));

        let req = test::TestRequest::get().uri("/notes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // PUT keeps the path id no matter what the body claims.
        let req = test::TestRequest::put()
            .uri("/notes/1")
            .set_json(json!({"id": 42, "text": "rewritten"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"], json!(1));

        let req = test::TestRequest::delete().uri("/notes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Note deleted"));

        let req = test::TestRequest::get().uri("/notes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Note not found"));
    }

    #[actix_web::test]
    async fn test_list_notes_returns_array() {
        let dir = tempfile::tempdir().unwrap();
        let state = new_state(&dir);
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/notes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));

        let req = test::TestRequest::post()
            .uri("/notes")
            .set_json(json!({"text": "a"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/notes").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_account_not_found_message() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::get().uri("/accounts/7").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Account not found"));
    }

    #[actix_web::test]
    async fn test_patch_account_merges_fields() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::post()
            .uri("/accounts")
            .set_json(json!({"username": "u", "password": "p"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["status"], json!("active"));

        let req = test::TestRequest::patch()
            .uri("/accounts/1")
            .set_json(json!({"status": "banned"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let merged: Value = test::read_body_json(resp).await;
        assert_eq!(merged["username"], json!("u"));
        assert_eq!(merged["status"], json!("banned"));
    }

    #[actix_web::test]
    async fn test_login_success_and_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::post()
            .uri("/accounts")
            .set_json(json!({"username": "u", "password": "p"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "u", "password": "p"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], json!(1));
        assert_eq!(body["username"], json!("u"));
        assert!(body.get("password").is_none());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "u", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid credentials"));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(new_state(&dir));

        let req = test::TestRequest::post()
            .uri("/notes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
