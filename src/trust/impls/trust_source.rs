use crate::trust::enums::trust_source::TrustSource;

impl TrustSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustSource::System => "system",
            TrustSource::Embedded => "embedded",
        }
    }
}

impl std::fmt::Display for TrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
