use crate::ai::gemini::{
    Content, GenerateContentRequest, GenerationConfig, HarmBlockThreshold, HarmCategory, Part,
    SafetySetting,
};

pub mod status;

/// A prompt knows how to build a payload for a gemini request
/// and how to parse the response.
pub trait Prompt {
    type Response;

    fn build_payload(&self) -> GenerateContentRequest;
    fn parse_response(&self, raw_response: &str) -> anyhow::Result<Self::Response>;
}

const SAFETY_CATEGORIES: [HarmCategory; 4] = [
    HarmCategory::Harassment,
    HarmCategory::HateSpeech,
    HarmCategory::SexuallyExplicit,
    HarmCategory::DangerousContent,
];

/// Wraps prompt text in the decoding and safety settings every lookup uses.
pub fn build_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some(String::from("user")),
            parts: vec![Part { text: Some(prompt) }],
        }],
        generation_config: GenerationConfig {
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            max_output_tokens: 256,
        },
        safety_settings: SAFETY_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: *category,
                threshold: HarmBlockThreshold::BlockMediumAndAbove,
            })
            .collect(),
    }
}
