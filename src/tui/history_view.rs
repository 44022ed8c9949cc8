//! History dialog state: past queries with fuzzy filtering via `nucleo`.

use std::sync::Arc;

use nucleo::pattern::{CaseMatching, Normalization};
use nucleo::{Config, Nucleo};

use crate::models::SearchCriteria;
use crate::query::synthesize;
use crate::utils::sanitize_query_line;

/// Filter input limit (characters)
const MAX_FILTER_LEN: usize = 256;

/// A stored record with its query rendered for display and matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub criteria: SearchCriteria,
    pub query: String,
}

impl HistoryItem {
    pub fn new(criteria: SearchCriteria) -> Self {
        let query = synthesize(&criteria);
        Self { criteria, query }
    }
}

pub struct HistoryView {
    nucleo: Nucleo<HistoryItem>,
    filter: String,
    selected_idx: usize,
    total_count: usize,
}

fn matcher() -> Nucleo<HistoryItem> {
    Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1)
}

impl HistoryView {
    pub fn new(records: Vec<SearchCriteria>) -> Self {
        let mut view =
            Self { nucleo: matcher(), filter: String::new(), selected_idx: 0, total_count: 0 };
        view.reload(records);
        view
    }

    /// Replace all items (after the store changed), keeping the current filter
    pub fn reload(&mut self, records: Vec<SearchCriteria>) {
        self.nucleo = matcher();
        self.total_count = records.len();

        let injector = self.nucleo.injector();
        for criteria in records {
            let item = HistoryItem::new(criteria);
            let display = sanitize_query_line(&item.query);
            injector.push(item, move |_item, cols| {
                cols[0] = display.clone().into();
            });
        }

        self.update_pattern();
    }

    /// Let the matcher catch up with injected items and pattern changes
    pub fn tick(&mut self) {
        for _ in 0..10 {
            if !self.nucleo.tick(10).running {
                break;
            }
        }
    }

    pub fn matched_items(&self) -> Vec<&HistoryItem> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| item.data).collect()
    }

    pub fn selected(&self) -> Option<&HistoryItem> {
        self.matched_items().get(self.selected_idx).copied()
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        let total = self.nucleo.snapshot().matched_item_count() as usize;
        if total == 0 {
            self.selected_idx = 0;
            return false;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);
        old_idx != self.selected_idx
    }

    pub fn push_filter_char(&mut self, c: char) -> bool {
        if self.filter.chars().count() >= MAX_FILTER_LEN {
            return false;
        }
        self.filter.push(c);
        self.update_pattern();
        true
    }

    pub fn pop_filter_char(&mut self) -> bool {
        if self.filter.pop().is_none() {
            return false;
        }
        self.update_pattern();
        true
    }

    fn update_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.filter,
            CaseMatching::Smart,
            Normalization::Smart,
            false,
        );
        self.selected_idx = 0;
        self.tick();
    }
}
