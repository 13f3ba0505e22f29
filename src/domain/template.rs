pub const COMPOSE_PLACEHOLDER: &str = "%COMPOSE";
pub const SERVICE_PLACEHOLDER: &str = "%SERVICE";

/// Whitespace-tokenized command line with `%COMPOSE` / `%SERVICE` tokens.
///
/// Substitution is token-for-token: a placeholder is replaced only when it is
/// a whole token, so `x%COMPOSEy` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    raw: String,
}

impl CommandTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders the template into an argv list; the first element is the program.
    pub fn render(&self, compose: &str, service: &str) -> Vec<String> {
        self.raw
            .split_whitespace()
            .map(|token| match token {
                COMPOSE_PLACEHOLDER => compose.to_string(),
                SERVICE_PLACEHOLDER => service.to_string(),
                other => other.to_string(),
            })
            .collect()
    }
}
