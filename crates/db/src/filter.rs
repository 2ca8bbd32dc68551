//! Predicate builder for collection queries.
//!
//! Every listing in the catalog applies the same conjunction: exclude
//! soft-deleted rows, optionally narrow by a case-insensitive substring
//! search, optionally narrow by an exact match on an enumerated column.
//! The language is a flat AND; there is no OR and no grouping.

/// A conjunction of predicates rendered as a `WHERE` clause with `$n`
/// placeholders and a matching ordered bind list.
///
/// Column names are passed through verbatim, so joined selects can qualify
/// them (`b.title`). Bind values always travel as text; enumerated columns
/// get an explicit cast in the rendered predicate.
#[derive(Debug, Clone)]
pub struct ListFilter {
    clauses: Vec<String>,
    binds: Vec<String>,
}

impl ListFilter {
    /// Start a filter that excludes soft-deleted rows.
    pub fn active(deleted_col: &str) -> Self {
        Self {
            clauses: vec![format!("{deleted_col} IS NULL")],
            binds: Vec::new(),
        }
    }

    /// AND a case-insensitive substring match against `column`.
    ///
    /// A missing or empty term adds nothing, so `search=""` behaves exactly
    /// like no search parameter.
    pub fn search(mut self, column: &str, term: Option<&str>) -> Self {
        if let Some(term) = term {
            if !term.is_empty() {
                self.binds.push(format!("%{term}%"));
                self.clauses
                    .push(format!("{column} ILIKE ${}", self.binds.len()));
            }
        }
        self
    }

    /// AND an equality predicate against `column`.
    pub fn exact(mut self, column: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.binds.push(value);
            self.clauses
                .push(format!("{column} = ${}", self.binds.len()));
        }
        self
    }

    /// AND an equality predicate against an enumerated column.
    ///
    /// The bind is text, so the placeholder carries a cast to `enum_type`.
    pub fn exact_enum(mut self, column: &str, enum_type: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.binds.push(value);
            self.clauses
                .push(format!("{column} = ${}::{enum_type}", self.binds.len()));
        }
        self
    }

    /// Render the full `WHERE` clause. Never empty: the soft-delete
    /// predicate is always present.
    pub fn where_sql(&self) -> String {
        format!("WHERE {}", self.clauses.join(" AND "))
    }

    /// Bind values in placeholder order.
    pub fn binds(&self) -> &[String] {
        &self.binds
    }

    /// Index of the next free placeholder, for queries that append their own
    /// binds (LIMIT/OFFSET) after the filter's.
    pub fn next_placeholder(&self) -> usize {
        self.binds.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_filter_only_excludes_soft_deleted() {
        let filter = ListFilter::active("deleted_at");
        assert_eq!(filter.where_sql(), "WHERE deleted_at IS NULL");
        assert!(filter.binds().is_empty());
        assert_eq!(filter.next_placeholder(), 1);
    }

    #[test]
    fn empty_search_term_adds_no_predicate() {
        let filter = ListFilter::active("deleted_at").search("name", Some(""));
        assert_eq!(filter.where_sql(), "WHERE deleted_at IS NULL");
        assert!(filter.binds().is_empty());
    }

    #[test]
    fn missing_search_term_adds_no_predicate() {
        let filter = ListFilter::active("deleted_at").search("name", None);
        assert_eq!(filter.where_sql(), "WHERE deleted_at IS NULL");
    }

    #[test]
    fn search_wraps_term_in_wildcards() {
        let filter = ListFilter::active("deleted_at").search("name", Some("poe"));
        assert_eq!(
            filter.where_sql(),
            "WHERE deleted_at IS NULL AND name ILIKE $1"
        );
        assert_eq!(filter.binds(), ["%poe%"]);
        assert_eq!(filter.next_placeholder(), 2);
    }

    #[test]
    fn exact_match_appends_equality() {
        let filter = ListFilter::active("deleted_at").exact("isbn", Some("123".to_string()));
        assert_eq!(filter.where_sql(), "WHERE deleted_at IS NULL AND isbn = $1");
        assert_eq!(filter.binds(), ["123"]);
    }

    #[test]
    fn enum_match_casts_the_placeholder() {
        let filter = ListFilter::active("b.deleted_at")
            .search("b.title", Some("rust"))
            .exact_enum("b.genre", "genre_book", Some("fiction".to_string()));
        assert_eq!(
            filter.where_sql(),
            "WHERE b.deleted_at IS NULL AND b.title ILIKE $1 AND b.genre = $2::genre_book"
        );
        assert_eq!(filter.binds(), ["%rust%", "fiction"]);
        assert_eq!(filter.next_placeholder(), 3);
    }

    #[test]
    fn absent_optional_filters_leave_only_soft_delete() {
        let filter = ListFilter::active("b.deleted_at")
            .search("b.title", None)
            .exact_enum("b.genre", "genre_book", None);
        assert_eq!(filter.where_sql(), "WHERE b.deleted_at IS NULL");
        assert!(filter.binds().is_empty());
    }
}
