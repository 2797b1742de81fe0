use super::filter::{FilterQuery, filter_indices};
use super::record::ProblemRecord;

/// Page-lifetime catalog: the loaded records plus the current filtered view.
#[derive(Debug, Default)]
pub struct CatalogState {
    all: Vec<ProblemRecord>,
    filtered: Vec<usize>,
    pub search: String,
    pub min_rating_input: String,
    pub max_rating_input: String,
    load_error: Option<String>,
}

impl CatalogState {
    pub fn loaded(all: Vec<ProblemRecord>) -> Self {
        let filtered = (0..all.len()).collect();
        Self {
            all,
            filtered,
            ..Self::default()
        }
    }

    pub fn unavailable(error: String) -> Self {
        Self {
            load_error: Some(error),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn get(&self, index: usize) -> Option<&ProblemRecord> {
        self.all.get(index)
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// Filtered rows paired with their stable position in the full catalog.
    pub fn filtered_records(&self) -> impl Iterator<Item = (usize, &ProblemRecord)> {
        self.filtered
            .iter()
            .filter_map(|&index| self.all.get(index).map(|record| (index, record)))
    }

    pub fn current_query(&self) -> FilterQuery {
        FilterQuery::new(&self.search, &self.min_rating_input, &self.max_rating_input)
    }

    pub fn apply_filters(&mut self) {
        self.filtered = filter_indices(&self.all, &self.current_query());
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.min_rating_input.clear();
        self.max_rating_input.clear();
        self.filtered = (0..self.all.len()).collect();
    }
}
