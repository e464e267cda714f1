//! Session-scoped check history

use std::collections::VecDeque;

use crate::CheckResult;

/// Number of checks kept per session
pub const HISTORY_CAPACITY: usize = 8;

/// Most-recent-first list of past checks. Lives only in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<CheckResult>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a result, dropping the oldest entries past capacity
    pub fn push(&mut self, result: CheckResult) {
        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a CheckResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(n: usize) -> CheckResult {
        CheckResult {
            raw_input: Some(format!("https://site{}.com", n)),
            ..Default::default()
        }
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = History::new();
        history.push(result(1));
        history.push(result(2));

        let inputs: Vec<_> = history.iter().filter_map(|r| r.raw_input.as_deref()).collect();
        assert_eq!(inputs, vec!["https://site2.com", "https://site1.com"]);
    }

    #[test]
    fn test_capacity() {
        let mut history = History::new();
        for n in 0..10 {
            history.push(result(n));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next(), Some(&result(9)));
        assert_eq!(history.iter().last(), Some(&result(2)));
    }
}
