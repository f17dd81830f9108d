//! Source catalog
//!
//! Holds the sorted, deduplicated list of sources for the active category
//! together with the highlighted entry.

use std::collections::HashMap;

use super::{Source, SourceCategory, SourceEnumerator};

/// Build a catalog snapshot from raw identifiers.
///
/// Blank identifiers are dropped, duplicates collapse to the last one seen,
/// and the result is sorted by display name (identifier breaks ties).
pub fn build_sources(category: SourceCategory, identifiers: Vec<String>) -> Vec<Source> {
    let mut by_id: HashMap<String, Source> = HashMap::new();
    for identifier in identifiers {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            continue;
        }
        by_id.insert(
            identifier.to_string(),
            Source::new(category, identifier.to_string()),
        );
    }

    let mut sources: Vec<Source> = by_id.into_values().collect();
    sources.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
    sources
}

/// Enumerate one category, converting failures into a warning.
///
/// Never fails: an enumeration error yields an empty list plus the message.
pub fn enumerate(
    enumerator: &dyn SourceEnumerator,
    category: SourceCategory,
) -> (Vec<Source>, Option<String>) {
    match enumerator.enumerate(category) {
        Ok(identifiers) => {
            let sources = build_sources(category, identifiers);
            tracing::debug!("Enumerated {} {} sources", sources.len(), category.label());
            (sources, None)
        }
        Err(e) => {
            tracing::warn!("Failed to enumerate {} sources: {}", category.label(), e);
            (Vec::new(), Some(format!("{}: {}", category.label(), e)))
        }
    }
}

/// Sorted list of sources for one category plus the highlighted index
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    category: SourceCategory,
    sources: Vec<Source>,
    selected: Option<usize>,
    warning: Option<String>,
}

impl SourceCatalog {
    /// Create an empty catalog for a category
    pub fn new(category: SourceCategory) -> Self {
        Self {
            category,
            sources: Vec::new(),
            selected: None,
            warning: None,
        }
    }

    /// Create a catalog and enumerate it immediately
    pub fn load(enumerator: &dyn SourceEnumerator, category: SourceCategory) -> Self {
        let mut catalog = Self::new(category);
        catalog.refresh(enumerator);
        catalog
    }

    /// Re-enumerate the current category
    pub fn refresh(&mut self, enumerator: &dyn SourceEnumerator) {
        let (sources, warning) = enumerate(enumerator, self.category);
        self.replace(sources, warning);
    }

    /// Switch to another category and enumerate it
    pub fn switch_category(&mut self, enumerator: &dyn SourceEnumerator, category: SourceCategory) {
        if category != self.category {
            self.category = category;
            self.sources.clear();
            self.selected = None;
        }
        self.refresh(enumerator);
    }

    /// Replace the whole snapshot at once.
    ///
    /// The highlighted source is kept by identity key when it survives,
    /// since its index may have moved after sorting.
    pub fn replace(&mut self, sources: Vec<Source>, warning: Option<String>) {
        let previous_key = self
            .selected()
            .map(|s| (s.category, s.identifier.clone()));

        self.sources = sources;
        self.warning = warning;
        self.selected = previous_key
            .and_then(|(category, identifier)| {
                self.sources
                    .iter()
                    .position(|s| s.key() == (category, identifier.as_str()))
            })
            .or(if self.sources.is_empty() { None } else { Some(0) });
    }

    /// Move the highlight down one entry (stops at the last)
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.sources.len() {
                self.selected = Some(index + 1);
            }
        }
    }

    /// Move the highlight up one entry (stops at the first)
    pub fn select_prev(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    pub fn category(&self) -> SourceCategory {
        self.category
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted source, if any
    pub fn selected(&self) -> Option<&Source> {
        self.selected.and_then(|i| self.sources.get(i))
    }

    /// Warning from the last enumeration, if it failed
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
