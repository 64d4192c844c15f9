pub const MISSING_PARAMS_MESSAGE: &str =
    "ERROR: The -H (URL) and -P (password) parameters are required.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub url: String,
    pub password: String,
}

impl EffectiveConfig {
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.password.is_empty()
    }
}

pub fn from_flags(url: Option<String>, password: Option<String>) -> EffectiveConfig {
    EffectiveConfig {
        url: url.unwrap_or_default(),
        password: password.unwrap_or_default(),
    }
}
