use std::collections::{HashMap, HashSet};

/// Open/closed flags for collapsible blocks. Any number may be open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    open: HashMap<String, bool>,
}

impl ExpandedSections {
    pub fn toggle(&mut self, id: &str) {
        let entry = self.open.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }
}

/// FAQ list state: at most one answer shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens the item named by a `#faq-N` hash. Anything else is ignored.
    pub fn open_from_hash(&mut self, hash: &str, len: usize) -> bool {
        let index = hash
            .strip_prefix('#')
            .unwrap_or(hash)
            .strip_prefix("faq-")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|&i| i < len);

        match index {
            Some(i) => {
                self.open = Some(i);
                true
            }
            None => false,
        }
    }
}

pub fn faq_anchor(index: usize) -> String {
    format!("faq-{}", index)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabBar {
    active: String,
}

impl TabBar {
    pub fn new(first: &str) -> Self {
        Self {
            active: first.to_string(),
        }
    }

    /// Returns true if the active tab changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id.to_string();
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}

/// Sections that have scrolled into view. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Revealed {
    ids: HashSet<String>,
}

impl Revealed {
    /// Returns true if any id was new.
    pub fn reveal<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut changed = false;
        for id in ids {
            changed |= self.ids.insert(id.into());
        }
        changed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_section() {
        let mut sections = ExpandedSections::default();
        let before = sections.is_open("overview");
        sections.toggle("overview");
        assert!(sections.is_open("overview"));
        sections.toggle("overview");
        assert_eq!(sections.is_open("overview"), before);
    }

    #[test]
    fn sections_open_independently() {
        let mut sections = ExpandedSections::default();
        sections.toggle("overview");
        sections.toggle("legalProcess");
        assert!(sections.is_open("overview"));
        assert!(sections.is_open("legalProcess"));
        assert!(!sections.is_open("typesAbuse"));
    }

    #[test]
    fn accordion_keeps_one_open() {
        let mut faq = Accordion::default();
        faq.toggle(2);
        assert_eq!(faq.open_index(), Some(2));
        faq.toggle(5);
        assert_eq!(faq.open_index(), Some(5));
        assert!(!faq.is_open(2));
        faq.toggle(5);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn accordion_double_toggle_restores() {
        let mut faq = Accordion::default();
        faq.toggle(4);
        faq.toggle(4);
        assert_eq!(faq, Accordion::default());

        faq.toggle(1);
        let before = faq;
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq, before);
    }

    #[test]
    fn hash_opens_matching_item() {
        let mut faq = Accordion::default();
        assert!(faq.open_from_hash("#faq-3", 10));
        assert_eq!(faq.open_index(), Some(3));
        assert!(!faq.open_from_hash("#faq-12", 10));
        assert!(!faq.open_from_hash("#overview", 10));
        assert_eq!(faq.open_index(), Some(3));
        assert_eq!(faq_anchor(3), "faq-3");
    }

    #[test]
    fn tab_selection_is_exclusive() {
        let mut tabs = TabBar::new("overview");
        assert!(tabs.is_active("overview"));
        assert!(tabs.select("faq"));
        assert!(tabs.is_active("faq"));
        assert!(!tabs.is_active("overview"));
        assert!(!tabs.select("faq"));
    }

    #[test]
    fn revealed_sections_stay_revealed() {
        let mut revealed = Revealed::default();
        assert!(revealed.reveal(["overview", "evaluation"]));
        assert!(!revealed.reveal(["overview"]));
        assert!(revealed.reveal(vec!["faq".to_string()]));
        assert!(revealed.is_revealed("overview"));
        assert!(revealed.is_revealed("faq"));
        assert!(!revealed.is_revealed("resources"));
    }
}
