//! Settings shared by the adapters.

use std::time::Duration;

use thiserror::Error;

/// Delay between consecutive per-category requests on the categorized REST platform.
pub const CATEGORIZED_THROTTLE: Duration = Duration::from_millis(600);

/// Delay between consecutive category page requests on ForBET.
pub const FORBET_THROTTLE: Duration = Duration::from_millis(700);

pub const TOURS: [&str; 2] = ["WTA", "ATP"];

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Selects competitions by tour tag, rejecting those that mention any excluded word. All matching
/// is case-sensitive substring matching.
#[derive(Debug, Clone, PartialEq)]
pub struct TourFilter {
    pub tours: Vec<String>,
    pub excluded: Vec<String>,
}
impl TourFilter {
    pub fn new(tours: &[&str], excluded: &[&str]) -> Self {
        Self {
            tours: tours.iter().map(|&tour| tour.into()).collect(),
            excluded: excluded.iter().map(|&word| word.into()).collect(),
        }
    }

    pub fn excludes(&self, label: &str) -> bool {
        self.excluded.iter().any(|word| label.contains(word.as_str()))
    }

    /// Index of the first tour tag the label carries, provided it mentions no excluded word.
    pub fn tour_of(&self, label: &str) -> Option<usize> {
        if self.excludes(label) {
            return None;
        }
        self.tours.iter().position(|tour| label.contains(tour.as_str()))
    }

    pub fn accepts(&self, label: &str) -> bool {
        self.tour_of(label).is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tours.is_empty() {
            return Err(ValidationError("at least one tour must be specified".into()));
        }
        if let Some(blank) = self.tours.iter().chain(&self.excluded).find(|word| word.is_empty()) {
            return Err(ValidationError(format!("blank filter word '{blank}'")));
        }
        Ok(())
    }
}
