use anyhow::Context;
use species_status::{
    app::SpeciesStatusApp,
    config::{self, ServerSettings},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    species_status::init_logging();

    let settings = ServerSettings::from_env();

    // Without a key there is nothing to serve, so stop here.
    let secrets = config::load_secrets(&settings.secrets_path)
        .with_context(|| "Configure a valid secrets file with $SPECIES_STATUS_SECRETS")?;

    let app: &'static SpeciesStatusApp =
        Box::leak(Box::new(SpeciesStatusApp::new(secrets, &settings)));
    app.start().await?;

    Ok(())
}
