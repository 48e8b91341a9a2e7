/// Token that enables the reverse-DNS pass.
pub const FULL_TOKEN: &str = "full";

/// Per-invocation options, parsed from CLI words or an HTTP query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityRequest {
    full: bool,
}

impl IdentityRequest {
    pub fn new(full: bool) -> Self {
        Self { full }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            full: tokens.into_iter().any(|t| t.as_ref() == FULL_TOKEN),
        }
    }

    /// Splits on `&` only; `full=1` is not the `full` token.
    pub fn from_query(query: &str) -> Self {
        Self::from_tokens(query.split('&'))
    }

    pub fn is_full(&self) -> bool {
        self.full
    }
}
