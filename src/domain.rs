/// The answer the prompt asks for when a species is not endangered, or when
/// the model has no information about it.
pub const NOT_ENDANGERED: &str = "멸종 위기 아님";

/// Shown to the user whenever a lookup fails.  Never includes the underlying error.
pub const FAILURE_NOTICE: &str = "API 호출에 실패했습니다. 나중에 다시 시도해주세요.";

/// Outcome of one lookup.  Either the model's text, verbatim, or the failure marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Answer(String),
    Failed,
}

/// IUCN red list categories, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatLevel {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
    ExtinctInTheWild,
    Extinct,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 7] = [
        ThreatLevel::LeastConcern,
        ThreatLevel::NearThreatened,
        ThreatLevel::Vulnerable,
        ThreatLevel::Endangered,
        ThreatLevel::CriticallyEndangered,
        ThreatLevel::ExtinctInTheWild,
        ThreatLevel::Extinct,
    ];

    pub fn code(&self) -> &str {
        match self {
            ThreatLevel::LeastConcern => "LC",
            ThreatLevel::NearThreatened => "NT",
            ThreatLevel::Vulnerable => "VU",
            ThreatLevel::Endangered => "EN",
            ThreatLevel::CriticallyEndangered => "CR",
            ThreatLevel::ExtinctInTheWild => "EW",
            ThreatLevel::Extinct => "EX",
        }
    }

    fn name(&self) -> &str {
        match self {
            ThreatLevel::LeastConcern => "관심 필요",
            ThreatLevel::NearThreatened => "준위협",
            ThreatLevel::Vulnerable => "취약",
            ThreatLevel::Endangered => "멸종 위기",
            ThreatLevel::CriticallyEndangered => "심각한 위기",
            ThreatLevel::ExtinctInTheWild => "야생 절멸",
            ThreatLevel::Extinct => "절멸",
        }
    }

    /// Label as it appears in the prompt, ex: 멸종 위기(EN)
    pub fn label(&self) -> String {
        format!("{}({})", self.name(), self.code())
    }
}
