//! Placeholder substitution
//!
//! Replaces `{{path}}` tokens inside literal content with the value found at
//! `path` in the data. Resolution never fails: a token whose path cannot be
//! followed stays in the output exactly as written.

use serde_json::Value;

use crate::config::EngineConfig;
use crate::parser::{resolve_binding, value_to_string};

/// Result of resolving one piece of content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Content with every resolvable token substituted
    pub text: String,

    /// Paths of tokens left in place, in order of appearance
    pub unresolved: Vec<String>,
}

impl Resolution {
    /// True when no token was left unresolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Placeholder resolver with configurable delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderResolver {
    open: String,
    close: String,
}

impl Default for PlaceholderResolver {
    fn default() -> Self {
        Self::with_delimiters("{{", "}}")
    }
}

impl PlaceholderResolver {
    /// Create a resolver using the delimiters from a config
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_delimiters(
            config.placeholder_open.as_str(),
            config.placeholder_close.as_str(),
        )
    }

    /// Create a resolver with explicit delimiters
    pub fn with_delimiters(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Substitute every resolvable token in `content`
    pub fn resolve(&self, content: &str, data: &Value) -> String {
        self.resolve_with_report(content, data).text
    }

    /// Substitute tokens and report the ones left in place
    pub fn resolve_with_report(&self, content: &str, data: &Value) -> Resolution {
        // An empty delimiter would match everywhere
        if self.open.is_empty() || self.close.is_empty() {
            return Resolution {
                text: content.to_string(),
                unresolved: Vec::new(),
            };
        }

        let mut text = String::with_capacity(content.len());
        let mut unresolved = Vec::new();
        let mut rest = content;

        while let Some(start) = rest.find(self.open.as_str()) {
            let inner = &rest[start + self.open.len()..];
            let Some(end) = inner.find(self.close.as_str()) else {
                break;
            };

            text.push_str(&rest[..start]);

            let path = inner[..end].trim();
            match resolve_binding(path, data) {
                Some(value) => text.push_str(&value_to_string(value)),
                None => {
                    log::trace!("Unresolved placeholder '{}'", path);
                    text.push_str(&self.open);
                    text.push_str(&inner[..end]);
                    text.push_str(&self.close);
                    unresolved.push(path.to_string());
                }
            }

            rest = &inner[end + self.close.len()..];
        }

        text.push_str(rest);

        Resolution { text, unresolved }
    }
}

/// Resolve `{{path}}` tokens with the default delimiters
pub fn resolve(content: &str, data: &Value) -> String {
    PlaceholderResolver::default().resolve(content, data)
}
