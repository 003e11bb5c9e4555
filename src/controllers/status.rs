use actix_web::{get, web, HttpResponse, Responder};
use mockall_double::double;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[double]
use crate::ai::Ai;
use crate::{
    app::SpeciesStatusApp,
    display::{to_html, to_markdown},
    domain::{Classification, FAILURE_NOTICE},
};

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusRequest {
    #[serde(default)]
    name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StatusResponse {
    pub subject: String,
    pub answer: String,
    pub markdown: String,
    pub html: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct StatusController {
    pub ai: &'static Ai,
}

impl StatusController {
    pub fn new(ai: &'static Ai) -> Self {
        Self { ai }
    }

    async fn lookup(&self, payload: StatusRequest) -> HttpResponse {
        info!("{payload:?}");

        match self.ai.classify(&payload.name).await {
            Classification::Answer(answer) => {
                let markdown = to_markdown(&answer);
                HttpResponse::Ok().json(StatusResponse {
                    subject: payload.name,
                    html: to_html(&markdown),
                    markdown,
                    answer,
                })
            }
            Classification::Failed => {
                warn!("responding with failure notice for {:?}", payload.name);
                HttpResponse::BadGateway().json(ErrorResponse {
                    error: FAILURE_NOTICE.to_string(),
                })
            }
        }
    }
}

#[get("/status")]
pub async fn status_handler(
    web::Query(payload): web::Query<StatusRequest>,
    app: web::Data<&'static SpeciesStatusApp>,
) -> impl Responder {
    app.status_controller.lookup(payload).await
}
