use super::model::Dataset;

// ---------------------------------------------------------------------------
// Summary – derived statistics over a filtered result
// ---------------------------------------------------------------------------

/// Statistics over the surviving records.
///
/// `best_value` and `best_primary` are indices into `Dataset::records`;
/// ties go to the first occurrence in dataset order. `mean_cost` and
/// `best_value` are `None` for datasets without a cost metric.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub total: usize,
    pub mean_primary: f64,
    pub mean_cost: Option<f64>,
    pub best_value: Option<usize>,
    pub best_primary: usize,
}

/// Outcome of `summarize`. The empty case is an ordinary state every
/// consumer handles, not an error: no mean or extremum is ever taken over
/// an empty slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    NoData { total: usize },
    Stats(SummaryStats),
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

/// Compute summary statistics over the filtered indices.
///
/// Total over valid input: the empty filtered set yields `Summary::NoData`.
/// Means are plain unweighted averages at full precision; any rounding is
/// the renderer's concern.
pub fn summarize(dataset: &Dataset, visible: &[usize]) -> Summary {
    if visible.is_empty() {
        return Summary::NoData {
            total: dataset.len(),
        };
    }

    let count = visible.len();
    let mut primary_sum = 0.0;
    let mut cost_sum = 0.0;
    let mut cost_count = 0usize;
    let mut best_value: Option<usize> = None;
    let mut best_primary = visible[0];

    for &i in visible {
        let rec = &dataset.records[i];
        primary_sum += rec.primary;

        if rec.primary > dataset.records[best_primary].primary {
            best_primary = i;
        }

        if let Some(cost) = rec.cost {
            cost_sum += cost;
            cost_count += 1;
            match best_value {
                None => best_value = Some(i),
                Some(b) => {
                    // strict < keeps the first occurrence on ties
                    if cost < dataset.records[b].cost.unwrap_or(f64::INFINITY) {
                        best_value = Some(i);
                    }
                }
            }
        }
    }

    let mean_cost = if dataset.has_cost() && cost_count > 0 {
        Some(cost_sum / cost_count as f64)
    } else {
        None
    };

    Summary::Stats(SummaryStats {
        count,
        total: dataset.len(),
        mean_primary: primary_sum / count as f64,
        mean_cost,
        best_value,
        best_primary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter, FilterCriteria};
    use crate::data::model::{MetricLabels, Record};

    fn sample_dataset() -> Dataset {
        Dataset::from_records(
            vec![
                Record::new("Lentils", 78.0, Some(0.4), "Asia"),
                Record::new("Chicken", 85.0, Some(0.7), "US"),
                Record::new("Soy", 92.0, Some(0.5), "Asia"),
                Record::new("Milk", 50.0, Some(0.6), "Europe"),
                Record::new("Egg", 88.0, Some(0.45), "US"),
            ],
            MetricLabels::new("Protein Index", Some("Cost per gram protein")),
        )
    }

    #[test]
    fn representative_scenario() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            categories: ["Asia", "US"].iter().map(|s| s.to_string()).collect(),
            primary_range: (70.0, 100.0),
            cost_ceiling: Some(0.7),
        };
        let visible = filter(&ds, &crit).unwrap();

        match summarize(&ds, &visible) {
            Summary::Stats(s) => {
                assert_eq!(s.count, 4);
                assert_eq!(s.total, 5);
                assert!((s.mean_primary - 85.75).abs() < 1e-9);
                assert!((s.mean_cost.unwrap() - 0.5125).abs() < 1e-9);
                assert_eq!(ds.records[s.best_value.unwrap()].name, "Lentils");
                assert_eq!(ds.records[s.best_primary].name, "Soy");
            }
            Summary::NoData { .. } => panic!("expected stats"),
        }
    }

    #[test]
    fn filtered_to_empty_yields_no_data() {
        let ds = sample_dataset();
        let crit = FilterCriteria {
            categories: ["Europe"].iter().map(|s| s.to_string()).collect(),
            primary_range: (90.0, 100.0),
            cost_ceiling: Some(1.0),
        };
        let visible = filter(&ds, &crit).unwrap();
        assert!(visible.is_empty());
        assert_eq!(summarize(&ds, &visible), Summary::NoData { total: 5 });
    }

    #[test]
    fn empty_input_never_panics() {
        let ds = Dataset::empty(MetricLabels::new("GFSI Score", None));
        assert_eq!(summarize(&ds, &[]), Summary::NoData { total: 0 });
    }

    #[test]
    fn ties_break_to_first_occurrence() {
        let ds = Dataset::from_records(
            vec![
                Record::new("A", 90.0, Some(0.5), "X"),
                Record::new("B", 90.0, Some(0.5), "X"),
                Record::new("C", 80.0, Some(0.5), "X"),
            ],
            MetricLabels::new("Protein Index", Some("Cost")),
        );
        let visible = vec![0, 1, 2];
        match summarize(&ds, &visible) {
            Summary::Stats(s) => {
                assert_eq!(s.best_primary, 0);
                assert_eq!(s.best_value, Some(0));
            }
            Summary::NoData { .. } => panic!("expected stats"),
        }
    }

    #[test]
    fn cost_free_dataset_omits_cost_stats() {
        let ds = Dataset::from_records(
            vec![
                Record::new("Ireland", 84.0, None, "Europe"),
                Record::new("Japan", 79.3, None, "Asia"),
            ],
            MetricLabels::new("GFSI Score", None),
        );
        match summarize(&ds, &[0, 1]) {
            Summary::Stats(s) => {
                assert_eq!(s.count, 2);
                assert!((s.mean_primary - 81.65).abs() < 1e-9);
                assert_eq!(s.mean_cost, None);
                assert_eq!(s.best_value, None);
                assert_eq!(ds.records[s.best_primary].name, "Ireland");
            }
            Summary::NoData { .. } => panic!("expected stats"),
        }
    }
}
