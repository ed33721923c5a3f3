/// Ordered list of prompts.
///
/// Entries are never blank. Uniqueness is only checked by [`TopicList::add`];
/// [`TopicList::replace`] may introduce duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicList {
    items: Vec<String>,
}

impl TopicList {
    /// Builds a list from a persisted snapshot, dropping blank entries.
    pub fn from_snapshot(items: Vec<String>) -> Self {
        Self {
            items: items
                .into_iter()
                .filter(|item| !item.trim().is_empty())
                .collect(),
        }
    }

    /// Appends the trimmed text. Returns `false` (and leaves the list alone)
    /// if the text is blank or already present.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.items.iter().any(|item| item == text) {
            return false;
        }
        self.items.push(text.to_string());
        true
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Overwrites the entry at `index` with the trimmed text.
    pub fn replace(&mut self, index: usize, text: &str) -> bool {
        let text = text.trim();
        match self.items.get_mut(index) {
            Some(slot) if !text.is_empty() => {
                *slot = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> TopicList {
        TopicList::from_snapshot(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn add_trims_and_rejects_blank_or_duplicate() {
        let mut topics = list(&["A"]);
        assert!(!topics.add(""));
        assert!(!topics.add("   "));
        assert!(!topics.add(" A "));
        assert!(topics.add("  B "));
        assert_eq!(topics.as_slice(), ["A", "B"]);
    }

    #[test]
    fn replace_allows_duplicates_but_not_blank() {
        let mut topics = list(&["A", "B"]);
        assert!(!topics.replace(1, "  "));
        assert!(topics.replace(1, "A"));
        assert_eq!(topics.as_slice(), ["A", "A"]);
        assert!(!topics.replace(5, "C"));
    }

    #[test]
    fn snapshot_drops_blank_entries() {
        let topics = list(&["A", "", "  ", "B"]);
        assert_eq!(topics.as_slice(), ["A", "B"]);
    }
}
