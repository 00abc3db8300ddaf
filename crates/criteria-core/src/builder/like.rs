///
/// LikePatterns
///
/// Collects `LIKE` patterns with `%` wildcards placed for prefix, suffix,
/// or substring matches. Input text is not escaped; `%` or `_` inside a
/// value keep their wildcard meaning.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LikePatterns {
    patterns: Vec<String>,
}

impl LikePatterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// `value%`
    #[must_use]
    pub fn starts_with(mut self, value: &str) -> Self {
        self.patterns.push(format!("{value}%"));
        self
    }

    /// `%value`
    #[must_use]
    pub fn ends_with(mut self, value: &str) -> Self {
        self.patterns.push(format!("%{value}"));
        self
    }

    /// `%value%`
    #[must_use]
    pub fn contains(mut self, value: &str) -> Self {
        self.patterns.push(format!("%{value}%"));
        self
    }

    /// Raw pattern, used verbatim.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<String> {
        self.patterns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl IntoIterator for LikePatterns {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}
