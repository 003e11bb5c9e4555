use species_status::{
    ai::{
        gemini::{self, Gemini},
        Ai,
    },
    config::{self, ServerSettings},
    display::{to_markdown, to_terminal},
    domain::{Classification, FAILURE_NOTICE},
};
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    species_status::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Expected exactly one argument, had: {args:?}");
        eprintln!("usage: status_check <species name>");
        std::process::exit(1);
    }

    let subject = &args[1];

    let settings = ServerSettings::from_env();
    let secrets = match config::load_secrets(&settings.secrets_path) {
        Ok(secrets) => secrets,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let ai = Ai::new(Box::new(Gemini::new(secrets.api_key, gemini::DEFAULT_MODEL)));

    match ai.classify(subject).await {
        Classification::Answer(answer) => println!("{}", to_terminal(&to_markdown(&answer))),
        Classification::Failed => {
            eprintln!("{FAILURE_NOTICE}");
            std::process::exit(1);
        }
    }
}
