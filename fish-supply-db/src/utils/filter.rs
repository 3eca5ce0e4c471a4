//! Client-side filtering of loaded rows.
//!
//! A list screen keeps its last loaded rows in memory and re-runs the filter
//! on every keystroke or dropdown change instead of going back to the store.
//! Row counts are small, so this is a plain linear scan.

/// Rows that can be searched and narrowed by a category.
pub trait Filterable {
    /// Fields matched by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Value matched by the category dropdown, if the row has one
    fn category(&self) -> Option<&str>;
}

/// Search text ANDed with an optional exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    query: String,
    category: Option<String>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring to look for; blank matches everything.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_lowercase();
        self
    }

    /// Exact category to require; `None` or blank matches everything.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none()
    }

    pub fn matches<T: Filterable>(&self, row: &T) -> bool {
        let query_ok = self.query.is_empty()
            || row
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query));

        let category_ok = match &self.category {
            None => true,
            Some(wanted) => row.category() == Some(wanted.as_str()),
        };

        query_ok && category_ok
    }

    /// Rows that match, in their original order.
    pub fn apply<T: Filterable + Clone>(&self, rows: &[T]) -> Vec<T> {
        rows.iter().filter(|row| self.matches(*row)).cloned().collect()
    }
}
