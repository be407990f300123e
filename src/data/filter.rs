use std::collections::BTreeSet;

use thiserror::Error;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// FilterCriteria – the user-chosen predicates
// ---------------------------------------------------------------------------

/// The conjunction of predicates applied to a dataset.
///
/// Semantics per predicate:
/// * `categories` – a record passes when its category is a member of the
///   selected set. An *empty* set means "nothing selected" and matches no
///   record (it is not a shorthand for "all").
/// * `primary_range` – inclusive `(min, max)` window over the primary metric.
/// * `cost_ceiling` – inclusive upper bound over the cost metric; only
///   consulted when the dataset carries a cost metric at all.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub categories: BTreeSet<String>,
    pub primary_range: (f64, f64),
    pub cost_ceiling: Option<f64>,
}

impl FilterCriteria {
    /// Defaults derived from the loaded dataset: every category selected,
    /// the full observed primary range, ceiling at the observed max cost.
    /// Derived rather than hardcoded so the initial view never hides valid
    /// rows of a differently-ranged dataset.
    pub fn full_view(dataset: &Dataset) -> Self {
        FilterCriteria {
            categories: dataset.categories.clone(),
            primary_range: dataset.primary_bounds.unwrap_or((0.0, 0.0)),
            cost_ceiling: dataset.max_cost,
        }
    }
}

// ---------------------------------------------------------------------------
// FilterError
// ---------------------------------------------------------------------------

/// Malformed criteria. Inverted ranges are rejected, never silently swapped.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("invalid primary range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// filter – the core pipeline step
// ---------------------------------------------------------------------------

/// Return indices of records passing all active predicates, in dataset order.
///
/// Pure over its inputs: the dataset is never mutated, surviving records keep
/// their relative order, and identical inputs yield identical output.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Result<Vec<usize>, FilterError> {
    let (min, max) = criteria.primary_range;
    if min > max {
        return Err(FilterError::InvalidRange { min, max });
    }

    let check_cost = dataset.has_cost();

    Ok(dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !criteria.categories.contains(&rec.category) {
                return false;
            }
            if rec.primary < min || rec.primary > max {
                return false;
            }
            if check_cost {
                if let (Some(ceiling), Some(cost)) = (criteria.cost_ceiling, rec.cost) {
                    if cost > ceiling {
                        return false;
                    }
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect())
}
