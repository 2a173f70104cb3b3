//! Scope tracking for the scanning engine.

/// The lexical context the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Between tokens or inside an unquoted token.
    Delimiter,
    /// Inside a quoted span. Only the identical character closes it.
    Quote(char),
    /// Right after the escape character. The next character is literal.
    Escape,
}

/// A scope together with the byte offset of the character that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScopeEntry {
    pub(crate) scope: Scope,
    pub(crate) opened_at: usize,
}

/// LIFO stack of open scopes.
///
/// A fresh stack holds a single `Delimiter` entry. The scanner keeps the
/// stack at depth one or two: the base entry is a `Delimiter` or `Quote`
/// scope, with at most one `Escape` scope on top of it.
#[derive(Debug)]
pub(crate) struct ScopeStack {
    entries: Vec<ScopeEntry>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![ScopeEntry {
                scope: Scope::Delimiter,
                opened_at: 0,
            }],
        }
    }

    /// The scope on top of the stack.
    pub(crate) fn top(&self) -> Scope {
        match self.entries.last() {
            Some(entry) => entry.scope,
            None => Scope::Delimiter,
        }
    }

    pub(crate) fn push(&mut self, scope: Scope, opened_at: usize) {
        self.entries.push(ScopeEntry { scope, opened_at });
    }

    pub(crate) fn pop(&mut self) -> Option<ScopeEntry> {
        self.entries.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_stack_rests_on_delimiter() {
        let stack = ScopeStack::new();
        assert_eq!(stack.top(), Scope::Delimiter);
    }

    #[test]
    fn test_push_and_pop_are_lifo() {
        let mut stack = ScopeStack::new();
        stack.push(Scope::Quote('"'), 3);
        stack.push(Scope::Escape, 7);

        assert_eq!(stack.top(), Scope::Escape);
        assert_eq!(
            stack.pop(),
            Some(ScopeEntry {
                scope: Scope::Escape,
                opened_at: 7,
            })
        );
        assert_eq!(stack.top(), Scope::Quote('"'));
        assert_eq!(
            stack.pop(),
            Some(ScopeEntry {
                scope: Scope::Quote('"'),
                opened_at: 3,
            })
        );
        assert_eq!(stack.top(), Scope::Delimiter);
    }

    #[test]
    fn test_exhausted_stack_reports_delimiter() {
        let mut stack = ScopeStack::new();
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert_eq!(stack.top(), Scope::Delimiter);
    }
}
