use crate::{
    ai::gemini::{self, Gemini},
    config::{Secrets, ServerSettings},
    controllers::{
        page::index_handler,
        status::{status_handler, StatusController},
    },
};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use mockall_double::double;
use tracing::info;

#[double]
use crate::ai::Ai;

pub struct SpeciesStatusApp {
    pub status_controller: StatusController,
    allowed_origins: Vec<String>,
    bind_address: String,
}

impl SpeciesStatusApp {
    pub fn new(secrets: Secrets, settings: &ServerSettings) -> Self {
        let gemini = Gemini::new(secrets.api_key, gemini::DEFAULT_MODEL);
        let ai: &'static Ai = Box::leak(Box::new(Ai::new(Box::new(gemini))));
        let status_controller = StatusController::new(ai);

        Self {
            status_controller,
            allowed_origins: settings.allowed_origins.clone(),
            bind_address: settings.bind_address.clone(),
        }
    }

    pub async fn start(&'static self) -> std::io::Result<()> {
        info!("listening on {}", self.bind_address);

        HttpServer::new(move || {
            let cors = self
                .allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allowed_methods(vec!["GET"]);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(self))
                .service(index_handler)
                .service(status_handler)
        })
        .bind(self.bind_address.as_str())?
        .run()
        .await
    }
}
