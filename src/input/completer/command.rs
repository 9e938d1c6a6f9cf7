use rustyline::completion::Pair;

use crate::core::verb::Verb;

/// Completes the verb token.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbCompleter;

impl VerbCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_verb(&self, partial: &str) -> Vec<Pair> {
        Verb::ALL
            .iter()
            .filter(|verb| verb.as_str().starts_with(partial))
            .map(|verb| Pair {
                display: verb.as_str().to_string(),
                replacement: if verb.arity() > 1 {
                    format!("{} > ", verb)
                } else {
                    verb.to_string()
                },
            })
            .collect()
    }

    /// The rest of the only verb starting with `partial`, if there is
    /// exactly one and it is not already complete.
    pub fn hint(&self, partial: &str) -> Option<String> {
        if partial.is_empty() {
            return None;
        }

        let mut matches = Verb::ALL
            .iter()
            .map(|verb| verb.as_str())
            .filter(|name| name.starts_with(partial) && *name != partial);

        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only[partial.len()..].to_string()),
            _ => None,
        }
    }
}
