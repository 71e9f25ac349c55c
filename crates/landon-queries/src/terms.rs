//! Query Terms
//!
//! Tokenizes the raw `orderBy` and `search` query-string entries into
//! structured terms. Nothing here knows which fields exist; that check
//! happens in [`crate::binder`]. Parsing never fails: a malformed search
//! entry becomes a term with `valid_syntax == false`.

/// One `orderBy` entry: `"<field>[ desc]"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTerm {
    pub name: String,
    pub descending: bool,
}

impl SortTerm {
    pub fn new(name: impl Into<String>, descending: bool) -> Self {
        Self {
            name: name.into(),
            descending,
        }
    }
}

/// One `search` entry: `"<field> <op> <value...>"`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    pub name: String,
    pub operator: String,
    pub value: String,
    pub valid_syntax: bool,
}

impl SearchTerm {
    pub fn new(
        name: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            operator: operator.into(),
            value: value.into(),
            valid_syntax: true,
        }
    }

    fn malformed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Parse `orderBy` entries in input order.
///
/// Each entry is split on single spaces; the first token is the field name
/// and a second token equal to `desc` (any case) flips the direction.
/// Blank entries are skipped.
pub fn parse_sort_terms<S: AsRef<str>>(raw: &[S]) -> impl Iterator<Item = SortTerm> + '_ {
    raw.iter()
        .map(AsRef::as_ref)
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let mut tokens = entry.split(' ');
            let name = tokens.next().unwrap_or(entry);
            let descending = tokens
                .next()
                .is_some_and(|t| t.eq_ignore_ascii_case("desc"));
            SortTerm::new(name, descending)
        })
}

/// Parse `search` entries in input order.
///
/// Fewer than three space-separated parts yields an invalid term. Otherwise
/// the second token is the operator and everything after it is rejoined
/// verbatim as the value, internal spaces included.
pub fn parse_search_terms<S: AsRef<str>>(raw: &[S]) -> impl Iterator<Item = SearchTerm> + '_ {
    raw.iter()
        .map(AsRef::as_ref)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let tokens: Vec<&str> = entry.split(' ').collect();
            if tokens.len() < 3 {
                let name = match tokens.first() {
                    Some(first) if !first.is_empty() => *first,
                    _ => entry,
                };
                return SearchTerm::malformed(name);
            }

            SearchTerm::new(tokens[0], tokens[1], tokens[2..].join(" "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_term_parsing() {
        let raw = ["name", "rate desc", "openFrom DESC", "floor asc"];
        let terms: Vec<SortTerm> = parse_sort_terms(&raw).collect();

        assert_eq!(
            terms,
            vec![
                SortTerm::new("name", false),
                SortTerm::new("rate", true),
                SortTerm::new("openFrom", true),
                SortTerm::new("floor", false),
            ]
        );
    }

    #[test]
    fn test_sort_skips_blank_entries() {
        let raw = ["", "   ", "rate"];
        let terms: Vec<SortTerm> = parse_sort_terms(&raw).collect();
        assert_eq!(terms, vec![SortTerm::new("rate", false)]);
    }

    #[test]
    fn test_sort_empty_input() {
        let raw: [&str; 0] = [];
        assert_eq!(parse_sort_terms(&raw).count(), 0);
    }

    #[test]
    fn test_search_term_parsing() {
        let raw = ["name eq Oxford Suite"];
        let terms: Vec<SearchTerm> = parse_search_terms(&raw).collect();

        assert_eq!(terms.len(), 1);
        assert!(terms[0].valid_syntax);
        assert_eq!(terms[0].name, "name");
        assert_eq!(terms[0].operator, "eq");
        assert_eq!(terms[0].value, "Oxford Suite");
    }

    #[test]
    fn test_search_value_keeps_internal_spacing() {
        let raw = ["name eq The  Grand   Room"];
        let term = parse_search_terms(&raw).next().unwrap();
        assert_eq!(term.value, "The  Grand   Room");
    }

    #[test]
    fn test_search_malformed() {
        let raw = ["name", "name eq"];
        let terms: Vec<SearchTerm> = parse_search_terms(&raw).collect();

        assert_eq!(terms.len(), 2);
        assert!(terms.iter().all(|t| !t.valid_syntax));
        assert_eq!(terms[0].name, "name");
        assert_eq!(terms[1].name, "name");
        assert!(terms[1].operator.is_empty());
    }

    #[test]
    fn test_search_whitespace_only_is_malformed() {
        let raw = [" "];
        let term = parse_search_terms(&raw).next().unwrap();
        assert!(!term.valid_syntax);
        assert_eq!(term.name, " ");
    }

    #[test]
    fn test_parsing_keeps_input_order() {
        let raw = vec!["b eq 1".to_string(), "a eq 2".to_string()];
        let names: Vec<String> = parse_search_terms(&raw).map(|t| t.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
