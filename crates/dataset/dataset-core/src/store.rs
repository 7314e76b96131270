//! In-memory series store.
//!
//! Holds one monthly series per place for the currently loaded dataset,
//! plus each place's last observed date. A new load replaces the whole
//! store; stores are never merged.

use std::collections::HashMap;

use chrono::NaiveDate;
use dataset_spi::MonthlySeries;

/// Name of the synthetic aggregate entity, always listed first.
pub const AGGREGATE_PLACE: &str = "All Places";

/// Mapping from place name to its monthly series and last observed date.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    order: Vec<String>,
    series: HashMap<String, MonthlySeries>,
    last_dates: HashMap<String, NaiveDate>,
}

impl SeriesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series under `place`, recording its last date. Insertion
    /// order defines listing order.
    pub fn insert(&mut self, place: impl Into<String>, series: MonthlySeries) {
        let place = place.into();
        if let Some(last) = series.last_date() {
            self.last_dates.insert(place.clone(), last);
        }
        if !self.series.contains_key(&place) {
            self.order.push(place.clone());
        }
        self.series.insert(place, series);
    }

    /// Place names in listing order.
    pub fn places(&self) -> &[String] {
        &self.order
    }

    /// The series stored under `place`.
    pub fn get(&self, place: &str) -> Option<&MonthlySeries> {
        self.series.get(place)
    }

    /// Last observed date for `place`.
    pub fn last_date(&self, place: &str) -> Option<NaiveDate> {
        self.last_dates.get(place).copied()
    }

    /// The place a request falls back to when none is given: the aggregate
    /// if present, otherwise the first stored place.
    pub fn default_place(&self) -> Option<&str> {
        if self.series.contains_key(AGGREGATE_PLACE) {
            Some(AGGREGATE_PLACE)
        } else {
            self.order.first().map(String::as_str)
        }
    }

    /// Whether any dataset has been stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of stored places.
    pub fn len(&self) -> usize {
        self.order.len()
    }
}
