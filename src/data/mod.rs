/// Data layer: core types, loading, filtering, and summarising.
///
/// Architecture:
/// ```text
///  .csv / .json / built-in samples
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, drop uncoercible rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, category set, observed bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply criteria → surviving indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  count, means, best value, highest index
///   └──────────┘
/// ```
///
/// Everything here is pure and UI-free; `state` and `ui` sit on top.

pub mod filter;
pub mod loader;
pub mod model;
pub mod samples;
pub mod summary;

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::filter::{filter, FilterCriteria};
    use super::loader::load_file;
    use super::summary::{summarize, Summary};

    // Full pipeline: file → dataset → filter → summary.
    #[test]
    fn load_filter_summarize_end_to_end() {
        let path = std::env::temp_dir().join("food_scout_pipeline.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(
            b"Food,Protein Index,Cost per gram protein,Region\n\
              Lentils,78,0.4,Asia\n\
              Chicken,85,0.7,US\n\
              Soy,92,0.5,Asia\n\
              Milk,50,0.6,Europe\n\
              Egg,88,0.45,US\n",
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 5);

        // Derived defaults keep the whole dataset visible.
        let defaults = FilterCriteria::full_view(&ds);
        assert_eq!(filter(&ds, &defaults).unwrap().len(), 5);

        let crit = FilterCriteria {
            categories: ["Asia", "US"].iter().map(|s| s.to_string()).collect(),
            primary_range: (70.0, 100.0),
            cost_ceiling: Some(0.7),
        };
        let visible = filter(&ds, &crit).unwrap();
        let names: Vec<&str> = visible.iter().map(|&i| ds.records[i].name.as_str()).collect();
        assert_eq!(names, vec!["Lentils", "Chicken", "Soy", "Egg"]);

        match summarize(&ds, &visible) {
            Summary::Stats(s) => {
                assert_eq!((s.count, s.total), (4, 5));
                assert!((s.mean_primary - 85.75).abs() < 1e-9);
                assert!((s.mean_cost.unwrap() - 0.5125).abs() < 1e-9);
            }
            Summary::NoData { .. } => panic!("expected stats"),
        }
    }
}
