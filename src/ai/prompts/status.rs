use anyhow::anyhow;

use super::Prompt;
use crate::{
    ai::gemini::GenerateContentRequest,
    domain::{ThreatLevel, NOT_ENDANGERED},
};

pub struct StatusPrompt {
    subject: String,
}

impl StatusPrompt {
    pub fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
        }
    }
}

impl Prompt for StatusPrompt {
    type Response = String;

    fn build_payload(&self) -> GenerateContentRequest {
        super::build_request(build_status_prompt(&self.subject))
    }

    /// The answer is shown as-is, only an empty answer is rejected.
    fn parse_response(&self, raw_response: &str) -> anyhow::Result<String> {
        if raw_response.trim().is_empty() {
            return Err(anyhow!("empty response for {:?}", self.subject));
        }

        Ok(raw_response.to_string())
    }
}

/// The seven categories, quoted and comma separated.
pub fn threat_level_vocabulary() -> String {
    ThreatLevel::ALL
        .iter()
        .map(|level| format!("\"{}\"", level.label()))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn build_status_prompt(subject: &str) -> String {
    format!(
        "다음 생물이 멸종 위기종인지 확인하고, 맞다면 멸종 위기 단계를 알려줘.
멸종 위기 단계는 IUCN 적색 목록 기준으로 {} 중 하나를 사용해줘.
만약 해당 생물에 대한 정보를 찾을 수 없다면, \"{}\"이라고 표시해줘.

생물: {}

답변:
",
        threat_level_vocabulary(),
        NOT_ENDANGERED,
        subject
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCABULARY: &str = r#""관심 필요(LC)", "준위협(NT)", "취약(VU)", "멸종 위기(EN)", "심각한 위기(CR)", "야생 절멸(EW)", "절멸(EX)""#;

    fn assert_fixed_parts(prompt: &str) {
        assert!(prompt.starts_with("다음 생물이 멸종 위기종인지 확인하고, 맞다면 멸종 위기 단계를 알려줘."));
        assert!(prompt.contains(VOCABULARY));
        assert!(prompt.contains("\"멸종 위기 아님\"이라고 표시해줘."));
        assert!(prompt.ends_with("답변:\n"));
    }

    #[test]
    fn test_vocabulary() {
        assert_eq!(threat_level_vocabulary(), VOCABULARY);
    }

    #[test]
    fn test_prompt_contains_subject() {
        let prompt = build_status_prompt("Siberian tiger");

        assert_fixed_parts(&prompt);
        assert!(prompt.contains("생물: Siberian tiger\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_status_prompt("수달"),
            build_status_prompt("수달")
        );
    }

    #[test]
    fn test_prompt_with_awkward_subjects() {
        let subjects = [
            "",
            "{}",
            "{subject}",
            "\"quoted\" name",
            "생물: 답변:",
            "line one\nline two",
        ];

        for subject in subjects {
            let prompt = build_status_prompt(subject);
            assert_fixed_parts(&prompt);
            assert!(
                prompt.contains(&format!("생물: {subject}\n")),
                "subject missing: {subject:?}"
            );
        }
    }

    #[test]
    fn test_payload_carries_prompt() {
        let prompt = StatusPrompt::new("Siberian tiger");

        let payload = prompt.build_payload();

        assert_eq!(
            payload.prompt_text(),
            build_status_prompt("Siberian tiger")
        );
        assert_eq!(payload.safety_settings.len(), 4);
    }

    #[test]
    fn test_parse_returns_verbatim() {
        let prompt = StatusPrompt::new("Siberian tiger");

        let answer = prompt.parse_response("  멸종 위기(EN)\n• 서식지 감소  ").unwrap();

        assert_eq!(answer, "  멸종 위기(EN)\n• 서식지 감소  ");
    }

    #[test]
    fn test_parse_rejects_empty() {
        let prompt = StatusPrompt::new("Siberian tiger");

        assert!(prompt.parse_response("").is_err());
        assert!(prompt.parse_response(" \n\t").is_err());
    }
}
