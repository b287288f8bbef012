//! Accounts REST API: CRUD plus partial update over the `accounts`
//! collection. Login lives in `controllers::auth`.

use actix_web::{HttpResponse, Responder, web};

use super::store_error_response;
use crate::AppState;
use crate::error::RecordKind;
use crate::store::Record;

const KIND: RecordKind = RecordKind::Account;

/// List all accounts; a missing `status` shows up as "active"
async fn list_accounts(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list(KIND))
}

/// Get an account by id
async fn get_account(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let account_id = path.into_inner();

    match data.store.get(KIND, account_id) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => store_error_response(e),
    }
}

/// Create an account; `status` defaults to "active" when absent
async fn create_account(data: web::Data<AppState>, body: web::Json<Record>) -> impl Responder {
    match data.store.create(KIND, body.into_inner()) {
        Ok(account) => HttpResponse::Created().json(account),
        Err(e) => store_error_response(e),
    }
}

/// Replace an account wholesale, keeping the path id
async fn update_account(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Record>,
) -> impl Responder {
    let account_id = path.into_inner();

    match data.store.replace(KIND, account_id, body.into_inner()) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => store_error_response(e),
    }
}

/// Merge body fields into an account. Fields not in the body are left
/// alone; fields in the body overwrite, `id` included.
async fn patch_account(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Record>,
) -> impl Responder {
    let account_id = path.into_inner();

    match data.store.patch_account(account_id, body.into_inner()) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => store_error_response(e),
    }
}

/// Delete an account by id
async fn delete_account(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let account_id = path.into_inner();

    match data.store.delete(KIND, account_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Account deleted"
        })),
        Err(e) => store_error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .route("", web::get().to(list_accounts))
            .route("", web::post().to(create_account))
            .route("/{id}", web::get().to(get_account))
            .route("/{id}", web::put().to(update_account))
            .route("/{id}", web::patch().to(patch_account))
            .route("/{id}", web::delete().to(delete_account)),
    );
}
