//! Query expansion: one search per source label plus each usable synonym.

use termbridge_core::models::SourceTerm;

/// Build the ordered expansion query list for a term.
///
/// Always `[label, synonym 1, synonym 2, ...]` capped at `max_synonyms`
/// synonym entries, skipping blank synonyms. The position of each query is
/// load-bearing downstream: dedup keeps the first occurrence of a code in
/// this order.
pub fn expand_queries(term: &SourceTerm, max_synonyms: usize) -> Vec<String> {
    let mut queries = Vec::with_capacity(1 + max_synonyms);
    queries.push(term.label.clone());

    queries.extend(
        term.synonyms
            .iter()
            .filter(|s| !s.trim().is_empty())
            .take(max_synonyms)
            .cloned(),
    );

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_comes_first_then_synonyms_in_order() {
        let term = SourceTerm::new("AYU001", "Jwara", "Ayurveda")
            .with_synonyms(vec!["Fever".into(), "Pyrexia".into()]);
        assert_eq!(expand_queries(&term, 3), vec!["Jwara", "Fever", "Pyrexia"]);
    }

    #[test]
    fn blank_synonyms_are_skipped_and_cap_applies() {
        let term = SourceTerm::new("AYU001", "Jwara", "Ayurveda").with_synonyms(vec![
            "  ".into(),
            "Fever".into(),
            "Pyrexia".into(),
            "Ague".into(),
            "Febrile state".into(),
        ]);
        // Blank dropped, then capped at 3 synonym queries.
        assert_eq!(
            expand_queries(&term, 3),
            vec!["Jwara", "Fever", "Pyrexia", "Ague"]
        );
    }

    #[test]
    fn no_synonyms_yields_single_query() {
        let term = SourceTerm::new("AYU001", "Jwara", "Ayurveda");
        assert_eq!(expand_queries(&term, 3), vec!["Jwara"]);
    }
}
