use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single row: one food source or one country.
///
/// `primary` is the benefit metric (protein index, GFSI score – higher is
/// better), `cost` the burden metric (cost per gram of protein – lower is
/// better). `cost` is `None` for datasets that carry no cost column at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub primary: f64,
    pub cost: Option<f64>,
    pub category: String,
}

impl Record {
    pub fn new(name: &str, primary: f64, cost: Option<f64>, category: &str) -> Self {
        Record {
            name: name.to_string(),
            primary,
            cost,
            category: category.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MetricLabels – axis / column captions for display
// ---------------------------------------------------------------------------

/// Human-readable captions for the two metric columns of a dataset.
/// `cost` is `None` when the dataset has no cost metric.
#[derive(Debug, Clone)]
pub struct MetricLabels {
    pub primary: String,
    pub cost: Option<String>,
}

impl MetricLabels {
    pub fn new(primary: &str, cost: Option<&str>) -> Self {
        MetricLabels {
            primary: primary.to_string(),
            cost: cost.map(str::to_string),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset with indices derived once at construction.
///
/// Construction is the only place numeric sanity is enforced: rows whose
/// metrics failed coercion (or were NaN) never make it into `records`, so
/// downstream filtering and summarising never see a NaN.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in source order. Never reordered.
    pub records: Vec<Record>,
    /// Sorted set of distinct categories.
    pub categories: BTreeSet<String>,
    /// Observed (min, max) of the primary metric; `None` when empty.
    pub primary_bounds: Option<(f64, f64)>,
    /// Observed maximum cost; `None` when empty or no cost metric.
    pub max_cost: Option<f64>,
    /// Display captions for the metric columns.
    pub labels: MetricLabels,
}

impl Dataset {
    /// Build derived indices from a set of already-coerced rows.
    pub fn from_records(records: Vec<Record>, labels: MetricLabels) -> Self {
        let categories: BTreeSet<String> =
            records.iter().map(|r| r.category.clone()).collect();

        let primary_bounds = records.iter().fold(None, |acc, r| match acc {
            None => Some((r.primary, r.primary)),
            Some((lo, hi)) => Some((f64::min(lo, r.primary), f64::max(hi, r.primary))),
        });

        let max_cost = records
            .iter()
            .filter_map(|r| r.cost)
            .fold(None, |acc: Option<f64>, c| {
                Some(acc.map_or(c, |m| f64::max(m, c)))
            });

        Dataset {
            records,
            categories,
            primary_bounds,
            max_cost,
            labels,
        }
    }

    /// An empty but fully usable dataset. The loader boundary substitutes
    /// this on failure so the rest of the pipeline takes the ordinary
    /// empty path instead of a special error path.
    pub fn empty(labels: MetricLabels) -> Self {
        Dataset::from_records(Vec::new(), labels)
    }

    /// Whether this dataset carries a cost metric.
    pub fn has_cost(&self) -> bool {
        self.labels.cost.is_some()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> MetricLabels {
        MetricLabels::new("Protein Index", Some("Cost per gram protein"))
    }

    #[test]
    fn derives_categories_and_bounds() {
        let ds = Dataset::from_records(
            vec![
                Record::new("Lentils", 78.0, Some(0.4), "Asia"),
                Record::new("Chicken", 85.0, Some(0.7), "US"),
                Record::new("Soy", 92.0, Some(0.5), "Asia"),
            ],
            labels(),
        );
        assert_eq!(ds.categories.iter().collect::<Vec<_>>(), vec!["Asia", "US"]);
        assert_eq!(ds.primary_bounds, Some((78.0, 92.0)));
        assert_eq!(ds.max_cost, Some(0.7));
        assert!(ds.has_cost());
    }

    #[test]
    fn empty_dataset_is_valid() {
        let ds = Dataset::empty(MetricLabels::new("GFSI Score", None));
        assert!(ds.is_empty());
        assert_eq!(ds.primary_bounds, None);
        assert_eq!(ds.max_cost, None);
        assert!(!ds.has_cost());
    }
}
