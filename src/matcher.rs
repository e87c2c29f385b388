//! Project lookup by exact or fuzzy name.
//!
//! An exact, case-insensitive name match always wins. Otherwise every entry
//! whose name contains the search term is scored by match position only:
//! names starting with the term score [`PREFIX_SCORE`], names containing it
//! further in score [`CONTAINS_SCORE`]. Name length does not affect the score.

use crate::{
    error::{FinderError, Result},
    project::ProjectEntry,
};

/// Score for a name that starts with the search term.
pub const PREFIX_SCORE: f64 = 1.0;

/// Score for a name that contains the search term past position 0.
pub const CONTAINS_SCORE: f64 = 0.5;

/// Maximum number of fuzzy candidates returned.
pub const MAX_CANDIDATES: usize = 5;

/// A project entry with its similarity score.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCandidate {
    pub entry: ProjectEntry,
    pub score: f64,
}

/// Outcome of a successful lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum FindResult {
    /// A name matched the search term exactly (ignoring case)
    Exact(ProjectEntry),

    /// Up to [`MAX_CANDIDATES`] containing matches, best first
    Fuzzy(Vec<MatchCandidate>),
}

impl FindResult {
    /// Render the lookup for the caller: the path alone for an exact match,
    /// one `name (path)` line per fuzzy candidate.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Exact(entry) => entry.path.display().to_string(),
            Self::Fuzzy(candidates) => candidates
                .iter()
                .map(|c| format!("{} ({})", c.entry.name, c.entry.path.display()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Similarity of `name` to `term`, or `None` if `name` does not contain it.
///
/// Both strings are compared lowercased.
#[must_use]
pub fn similarity(name: &str, term: &str) -> Option<f64> {
    let position = name.to_lowercase().find(&term.to_lowercase())?;

    Some(if position == 0 {
        PREFIX_SCORE
    } else {
        CONTAINS_SCORE
    })
}

/// Find `term` among `entries`.
///
/// # Errors
///
/// Returns [`FinderError::NoMatch`] when no entry matches exactly or
/// contains the term.
pub fn find(entries: Vec<ProjectEntry>, term: &str) -> Result<FindResult> {
    let lowered = term.to_lowercase();

    if let Some(exact) = entries.iter().find(|e| e.name.to_lowercase() == lowered) {
        return Ok(FindResult::Exact(exact.clone()));
    }

    let mut candidates: Vec<MatchCandidate> = entries
        .into_iter()
        .filter_map(|entry| {
            similarity(&entry.name, term).map(|score| MatchCandidate { entry, score })
        })
        .collect();

    if candidates.is_empty() {
        return Err(FinderError::NoMatch {
            name: term.to_string(),
        });
    }

    // Stable: equal scores keep directory-listing order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_CANDIDATES);

    Ok(FindResult::Fuzzy(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entries(names: &[&str]) -> Vec<ProjectEntry> {
        names
            .iter()
            .map(|name| ProjectEntry::new(Path::new("/projects"), *name))
            .collect()
    }

    fn fuzzy_names(result: &FindResult) -> Vec<&str> {
        match result {
            FindResult::Fuzzy(candidates) => {
                candidates.iter().map(|c| c.entry.name.as_str()).collect()
            }
            FindResult::Exact(_) => panic!("expected fuzzy result"),
        }
    }

    #[test]
    fn test_similarity_tiers() {
        assert_eq!(similarity("Testxyz", "test"), Some(PREFIX_SCORE));
        assert_eq!(similarity("abcTest", "test"), Some(CONTAINS_SCORE));
        assert_eq!(similarity("noMatch", "test"), None);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let result = find(entries(&["my-app", "My-App-v2"]), "MY-APP").unwrap();

        assert_eq!(
            result,
            FindResult::Exact(ProjectEntry::new(Path::new("/projects"), "my-app"))
        );
        assert_eq!(result.render(), "/projects/my-app");
    }

    #[test]
    fn test_exact_match_wins_over_prefix_candidates() {
        // "api-gateway" would score 1.0, but the exact name takes priority
        let result = find(entries(&["api-gateway", "legacy-api", "api"]), "api").unwrap();

        assert!(matches!(result, FindResult::Exact(ref e) if e.name == "api"));
    }

    #[test]
    fn test_prefix_ranks_before_contains() {
        let result = find(entries(&["abcTest", "Testxyz", "noMatch"]), "test").unwrap();

        assert_eq!(fuzzy_names(&result), vec!["Testxyz", "abcTest"]);
    }

    #[test]
    fn test_ties_keep_listing_order() {
        let result = find(
            entries(&["x-lib", "lib-b", "y-lib", "lib-a", "z-lib"]),
            "lib",
        )
        .unwrap();

        assert_eq!(
            fuzzy_names(&result),
            vec!["lib-b", "lib-a", "x-lib", "y-lib", "z-lib"]
        );
    }

    #[test]
    fn test_at_most_five_candidates() {
        let result = find(
            entries(&["svc-1", "svc-2", "svc-3", "svc-4", "svc-5", "svc-6", "svc-7"]),
            "svc",
        )
        .unwrap();

        assert_eq!(
            fuzzy_names(&result),
            vec!["svc-1", "svc-2", "svc-3", "svc-4", "svc-5"]
        );
    }

    #[test]
    fn test_no_match_names_the_term() {
        let err = find(entries(&["alpha", "beta"]), "gamma").unwrap_err();

        assert!(matches!(err, FinderError::NoMatch { ref name } if name == "gamma"));
        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_render_fuzzy_lines() {
        let result = find(entries(&["abcTest", "Testxyz"]), "test").unwrap();

        assert_eq!(
            result.render(),
            "Testxyz (/projects/Testxyz)\nabcTest (/projects/abcTest)"
        );
    }

    #[test]
    fn test_find_is_idempotent() {
        let input = entries(&["abcTest", "Testxyz", "test-suite"]);

        let first = find(input.clone(), "test").unwrap();
        let second = find(input, "test").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }
}
