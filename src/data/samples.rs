use super::model::{Dataset, MetricLabels, Record};

// ---------------------------------------------------------------------------
// Built-in sample datasets
// ---------------------------------------------------------------------------
//
// The app ships with small hardcoded tables so both views render something
// before any file is opened. Values are representative, not authoritative.

/// Protein sources: protein index vs. cost per gram of protein, by region.
pub fn protein_sources() -> Dataset {
    let records = vec![
        Record::new("Lentils", 78.0, Some(0.40), "Asia"),
        Record::new("Chicken", 85.0, Some(0.70), "US"),
        Record::new("Soy", 92.0, Some(0.50), "Asia"),
        Record::new("Milk", 50.0, Some(0.60), "Europe"),
        Record::new("Egg", 88.0, Some(0.45), "US"),
        Record::new("Chickpeas", 74.0, Some(0.38), "Asia"),
        Record::new("Beef", 80.0, Some(1.10), "US"),
        Record::new("Cod", 83.0, Some(0.95), "Europe"),
        Record::new("Tofu", 89.0, Some(0.52), "Asia"),
        Record::new("Greek Yogurt", 63.0, Some(0.68), "Europe"),
    ];
    Dataset::from_records(
        records,
        MetricLabels::new("Protein Index", Some("Cost per gram protein")),
    )
}

/// Global food security: GFSI score per country. No cost metric.
pub fn food_security() -> Dataset {
    let records = vec![
        Record::new("Finland", 83.7, None, "Europe"),
        Record::new("Ireland", 81.7, None, "Europe"),
        Record::new("Norway", 80.5, None, "Europe"),
        Record::new("Japan", 79.5, None, "Asia"),
        Record::new("Canada", 79.1, None, "Americas"),
        Record::new("United States", 78.0, None, "Americas"),
        Record::new("China", 74.2, None, "Asia"),
        Record::new("Brazil", 68.1, None, "Americas"),
        Record::new("India", 58.9, None, "Asia"),
        Record::new("Nigeria", 42.0, None, "Africa"),
        Record::new("Ethiopia", 38.4, None, "Africa"),
    ];
    Dataset::from_records(records, MetricLabels::new("GFSI Score", None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_well_formed() {
        let foods = protein_sources();
        assert!(foods.has_cost());
        assert!(foods.primary_bounds.is_some());
        assert!(foods.records.iter().all(|r| r.cost.is_some()));

        let countries = food_security();
        assert!(!countries.has_cost());
        assert!(countries.records.iter().all(|r| r.cost.is_none()));
    }
}
