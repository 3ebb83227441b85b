use serde::{Deserialize, Serialize};

/// A candidate entry from the external biomedical classification.
///
/// Produced only by the classification-search collaborator; the engine
/// never constructs or mutates these. Loose upstream formats are converted
/// to this shape exactly once, at the collaborator boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEntry {
    /// Unique identifier / URI.
    pub id: String,
    /// Classification code (e.g. "5A10", "MG26").
    pub code: String,
    /// Official title.
    pub title: String,
    /// Category (e.g. "Endocrine Disorders").
    #[serde(default)]
    pub category: String,
    /// Subcategory (e.g. "Type 1", "Acute").
    #[serde(default)]
    pub subcategory: String,
    /// System identifier.
    #[serde(default)]
    pub system: String,
    /// Human-readable system name.
    #[serde(default)]
    pub system_name: String,
    /// Detailed description.
    #[serde(default)]
    pub description: String,
    /// Alternative terms.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Full classification URI.
    #[serde(default)]
    pub uri: String,
}

impl TargetEntry {
    pub fn new(id: impl Into<String>, code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: title.into(),
            category: String::new(),
            subcategory: String::new(),
            system: String::new(),
            system_name: String::new(),
            description: String::new(),
            synonyms: Vec::new(),
            uri: String::new(),
        }
    }

    /// Builder-style synonym attachment.
    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }
}
