use std::borrow::Cow;

/// How raw group names are rewritten before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupNamePolicy {
    /// Rewrite characters outside `[A-Za-z0-9_-]` to `_`
    pub sanitize: bool,
    /// When sanitizing, also rewrite `-` to `_`
    pub replace_dash: bool,
}

impl GroupNamePolicy {
    /// Keep names exactly as written
    pub fn verbatim() -> Self {
        Self::default()
    }

    pub fn sanitizing(replace_dash: bool) -> Self {
        Self {
            sanitize: true,
            replace_dash,
        }
    }

    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !self.sanitize {
            return Cow::Borrowed(name);
        }
        to_safe(name, self.replace_dash)
    }
}

/// Converts characters that are unsafe in group names to underscores.
///
/// Only ASCII letters, digits and `_` survive; `-` survives unless
/// `replace_dash` is set.
pub fn to_safe(word: &str, replace_dash: bool) -> Cow<'_, str> {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || c == '_' || (c == '-' && !replace_dash);

    if word.chars().all(is_safe) {
        return Cow::Borrowed(word);
    }

    Cow::Owned(
        word.chars()
            .map(|c| if is_safe(c) { c } else { '_' })
            .collect(),
    )
}
