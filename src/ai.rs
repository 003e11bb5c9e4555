use mockall::automock;
use tracing::{info, warn};

use self::{
    gemini::GenerativeModel,
    prompts::{status::StatusPrompt, Prompt},
};
use crate::domain::Classification;

pub mod gemini;
pub mod prompts;

pub struct Ai {
    model: Box<dyn GenerativeModel>,
}

#[automock]
impl Ai {
    pub fn new(model: Box<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Asks the model whether `subject` is endangered.  Never fails outright,
    /// any error is logged and turned into `Classification::Failed`.
    pub async fn classify(&self, subject: &str) -> Classification {
        match execute(self.model.as_ref(), StatusPrompt::new(subject)).await {
            Ok(answer) => {
                info!("status lookup for {subject:?} answered");
                Classification::Answer(answer)
            }
            Err(e) => {
                warn!("status lookup for {subject:?} failed: {e:#}");
                Classification::Failed
            }
        }
    }
}

async fn execute<P: Prompt>(model: &dyn GenerativeModel, prompt: P) -> anyhow::Result<P::Response> {
    let raw_response = model.generate_content(prompt.build_payload()).await?;
    prompt.parse_response(&raw_response)
}
