//! Notes REST API: CRUD over the `notes` collection.

use actix_web::{HttpResponse, Responder, web};

use super::store_error_response;
use crate::AppState;
use crate::error::RecordKind;
use crate::store::Record;

const KIND: RecordKind = RecordKind::Note;

/// List all notes in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list(KIND))
}

/// Get a note by id
async fn get_note(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match data.store.get(KIND, note_id) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => store_error_response(e),
    }
}

/// Create a note; any id in the body is ignored and a fresh one assigned
async fn create_note(data: web::Data<AppState>, body: web::Json<Record>) -> impl Responder {
    match data.store.create(KIND, body.into_inner()) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => store_error_response(e),
    }
}

/// Replace a note wholesale, keeping the path id
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Record>,
) -> impl Responder {
    let note_id = path.into_inner();

    match data.store.replace(KIND, note_id, body.into_inner()) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => store_error_response(e),
    }
}

/// Delete a note by id
async fn delete_note(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match data.store.delete(KIND, note_id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Note deleted"
        })),
        Err(e) => store_error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
