pub mod events;
pub mod freelancers;
pub mod organizers;
pub mod professions;
pub mod proposals;
pub mod ratings;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, web};
use std::fmt;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies, query strings and path segments answer 400 with the usual error shape.
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    cfg.route("/", web::get().to(index));

    // ── Freelancer routes ──
    cfg.service(
        web::resource(["/freelancers", "/freelancers/"])
            .route(web::get().to(freelancers::list_freelancers))
            .route(web::post().to(freelancers::create_freelancer)),
    );
    cfg.service(
        web::resource("/freelancers/{id}").route(web::put().to(freelancers::update_freelancer)),
    );

    // ── Organizer routes ──
    cfg.service(
        web::resource(["/organizadores", "/organizadores/"])
            .route(web::post().to(organizers::create_organizer)),
    );

    // ── Profession routes ──
    cfg.service(
        web::resource(["/profissoes", "/profissoes/"])
            .route(web::get().to(professions::list_professions))
            .route(web::post().to(professions::create_profession)),
    );

    // ── Event routes ──
    cfg.service(
        web::resource(["/eventos", "/eventos/"])
            .route(web::get().to(events::list_events))
            .route(web::post().to(events::create_event)),
    );

    // ── Proposal routes ──
    cfg.service(
        web::resource(["/propostas", "/propostas/"])
            .route(web::post().to(proposals::create_proposal)),
    );
    cfg.service(
        web::resource("/propostas/freelancer/{id}")
            .route(web::get().to(proposals::get_proposals_by_freelancer)),
    );
    cfg.service(
        web::resource("/propostas/{id}").route(web::patch().to(proposals::update_status)),
    );

    // ── Rating routes ──
    cfg.service(
        web::resource(["/avaliacoes", "/avaliacoes/"])
            .route(web::get().to(ratings::get_ratings_by_user))
            .route(web::post().to(ratings::create_rating)),
    );
}

/// GET /: welcome message.
async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Bem-vindo à API Conecta",
    }))
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let body = serde_json::json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request(err))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request(err))
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| bad_request(err))
}
