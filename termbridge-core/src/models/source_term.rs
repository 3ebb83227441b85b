use serde::{Deserialize, Serialize};

/// A traditional-medicine registry entry being mapped.
///
/// Produced by the term-registry collaborator. Construction is the only
/// mutation point; downstream stages treat it as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTerm {
    /// Registry identifier (e.g. "AYU001").
    pub id: String,
    /// Primary label.
    pub label: String,
    /// Originating system tag (e.g. "Ayurveda", "Siddha").
    pub origin_system: String,
    /// Ordered synonyms / translations.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category / classification.
    #[serde(default)]
    pub category: Option<String>,
}

impl SourceTerm {
    pub fn new(id: impl Into<String>, label: impl Into<String>, origin_system: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            origin_system: origin_system.into(),
            synonyms: Vec::new(),
            description: None,
            category: None,
        }
    }

    /// Builder-style synonym attachment.
    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Builder-style category attachment.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
