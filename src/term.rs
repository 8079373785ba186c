// Sanitizes search terms for SQL `LIKE` and `ILIKE` pattern matching
pub struct SearchTerm {
    sanitized: String,
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        // backslash first, it is the escape character itself
        let sanitized = raw
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");

        Self { sanitized }
    }
}

impl SearchTerm {
    /// Skips wildcard escaping: user-supplied `%` and `_` keep their SQL
    /// pattern meaning. Only for hosts that opt out via
    /// `escape_wildcards = false`.
    pub fn verbatim(raw: &str) -> Self {
        Self {
            sanitized: raw.to_owned(),
        }
    }

    pub fn anywhere(&self) -> String {
        format!("%{}%", self.sanitized)
    }
}
