use anyhow::{anyhow, Result};
use std::fmt;

pub const TOKEN_ENV_VAR: &str = "ACMOJ_TOKEN";

/// Bearer token for the judge API, used verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn from_env() -> Result<Self> {
        Self::from_var(TOKEN_ENV_VAR)
    }

    fn from_var(name: &str) -> Result<Self> {
        std::env::var(name)
            .map(Self)
            .map_err(|e| anyhow!("{} is not set: {}", name, e))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable() {
        let error = BearerToken::from_var("ACMOJ_TOKEN_TEST_UNSET_VARIABLE")
            .unwrap_err()
            .to_string();
        assert!(error.starts_with("ACMOJ_TOKEN_TEST_UNSET_VARIABLE is not set"));
    }

    #[test]
    fn test_debug_hides_token() {
        let token = BearerToken::new("secret-value");
        assert_eq!("BearerToken(<redacted>)", format!("{:?}", token));
        assert_eq!("secret-value", token.as_str());
    }
}
