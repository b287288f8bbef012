use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;

use super::store_error_response;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Plaintext credential check against the accounts collection. No session
/// or token is issued; the response only confirms the match.
async fn login(data: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    match data.store.login(&body.username, &body.password) {
        Ok((id, username)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Login successful",
            "id": id,
            "username": username
        })),
        Err(e) => store_error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
