use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

/// The one page form.  Talks to /status and renders the answer.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
