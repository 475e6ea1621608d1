use std::collections::HashSet;

/// Aliases handed out during a single run.
///
/// Entries are only ever added.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    aliases: HashSet<String>,
}

impl AliasRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }

    /// Pick `short` if it is still free, otherwise fall back to `full`.
    /// The chosen alias is recorded either way.
    pub fn claim(&mut self, short: &str, full: &str) -> String {
        let alias = if self.contains(short) { full } else { short };
        self.record(alias);
        alias.to_string()
    }

    pub fn record(&mut self, alias: &str) {
        self.aliases.insert(alias.to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_prefers_short_form() {
        let mut registry = AliasRegistry::new();
        assert_eq!(registry.claim("7", "chr7"), "7");
        assert!(registry.contains("7"));
    }

    #[test]
    fn test_claim_falls_back_on_collision() {
        let mut registry = AliasRegistry::new();
        registry.claim("7", "chr7");
        assert_eq!(registry.claim("7", "7_alt"), "7_alt");
        assert!(registry.contains("7_alt"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_record_only_grows() {
        let mut registry = AliasRegistry::new();
        assert!(registry.is_empty());
        registry.record("GL000202.1");
        registry.record("GL000202.1");
        assert_eq!(registry.len(), 1);
    }
}
