use crate::inventory::domain::{HostName, Inventory};
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// HostFilter - Removes hosts matching exclusion patterns from an inventory
///
/// Supports `*` as a wildcard for zero or more characters. Matching is
/// case-sensitive and anchored at both ends, so `web*` does not match `myweb1`.
#[derive(Debug)]
pub struct HostFilter {
    patterns: Vec<ExcludePattern>,
}

impl HostFilter {
    /// Creates a new HostFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, length, characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks if a host matches any exclusion pattern
    pub fn matches(&self, host: &str) -> bool {
        // Every pattern is evaluated so unmatched-pattern tracking stays exact
        self.patterns
            .iter()
            .fold(false, |hit, pattern| pattern.matches(host) || hit)
    }

    /// Removes excluded hosts from all groups and from `_meta.hostvars`
    pub fn filter_inventory(&self, inventory: Inventory) -> Inventory {
        if self.is_empty() {
            return inventory;
        }
        inventory.without_hosts(|host: &HostName| self.matches(host.as_str()))
    }

    /// Returns the patterns that did not match any host so far
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single validated pattern with its compiled segments
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: WildcardMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = WildcardMatcher::compile(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, host: &str) -> bool {
        let is_match = self.matcher.matches(host);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored glob matcher for `*` wildcards
#[derive(Debug)]
enum WildcardMatcher {
    /// No wildcard: "db1.example.com"
    Exact(String),
    /// Leading literal, optional middle literals, trailing literal.
    /// An empty `prefix`/`suffix` means the pattern starts/ends with `*`.
    Segments {
        prefix: String,
        middle: Vec<String>,
        suffix: String,
    },
}

impl WildcardMatcher {
    fn compile(pattern: &str) -> Self {
        if !pattern.contains('*') {
            return WildcardMatcher::Exact(pattern.to_string());
        }

        let parts: Vec<&str> = pattern.split('*').collect();
        let prefix = parts[0].to_string();
        let suffix = parts[parts.len() - 1].to_string();
        let middle = parts[1..parts.len() - 1]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        WildcardMatcher::Segments {
            prefix,
            middle,
            suffix,
        }
    }

    fn matches(&self, host: &str) -> bool {
        match self {
            WildcardMatcher::Exact(s) => host == s,
            WildcardMatcher::Segments {
                prefix,
                middle,
                suffix,
            } => {
                if host.len() < prefix.len() + suffix.len()
                    || !host.starts_with(prefix.as_str())
                    || !host.ends_with(suffix.as_str())
                {
                    return false;
                }

                let mut rest = &host[prefix.len()..host.len() - suffix.len()];
                for part in middle {
                    match rest.find(part.as_str()) {
                        Some(pos) => rest = &rest[pos + part.len()..],
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character {:?} in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

/// Host names are IPs or DNS names; ':' covers IPv6 literals
fn is_valid_pattern_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ':' || c == '*'
}
