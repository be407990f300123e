use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Dataset, MetricLabels, Record};

// ---------------------------------------------------------------------------
// Column-renaming fallbacks
// ---------------------------------------------------------------------------
//
// Source spreadsheets name their columns inconsistently ("Food" vs
// "Country", "Protein Index" vs "GFSI Score"). Each logical column accepts
// a list of known headers; the first match wins and its original caption is
// kept for display.

const NAME_ALIASES: &[&str] = &["name", "Name", "Food", "food", "Country", "country"];
const PRIMARY_ALIASES: &[&str] = &[
    "primary",
    "Protein Index",
    "protein_index",
    "GFSI Score",
    "gfsi_score",
    "Score",
    "score",
];
const COST_ALIASES: &[&str] = &[
    "cost",
    "Cost",
    "Cost per gram protein",
    "cost_per_gram_protein",
];
const CATEGORY_ALIASES: &[&str] = &["category", "Category", "Region", "region"];

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|a| headers.iter().position(|h| h == a))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one record per line
/// * `.json` – records-oriented array: `[{ "name": ..., ... }, ...]`
///
/// Rows whose numeric cells fail coercion (or are NaN) are dropped from the
/// dataset, never coerced to zero; the drop count is logged. A missing
/// required column is a file-level error.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let name_idx = find_column(&headers, NAME_ALIASES)
        .context("CSV missing a name column (expected e.g. 'Food' or 'Country')")?;
    let primary_idx = find_column(&headers, PRIMARY_ALIASES)
        .context("CSV missing a primary metric column (expected e.g. 'Protein Index')")?;
    let category_idx = find_column(&headers, CATEGORY_ALIASES)
        .context("CSV missing a category column (expected e.g. 'Region')")?;
    let cost_idx = find_column(&headers, COST_ALIASES);

    let labels = MetricLabels::new(
        &headers[primary_idx],
        cost_idx.map(|i| headers[i].as_str()),
    );

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let primary = match parse_metric(row.get(primary_idx).unwrap_or("")) {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };
        let cost = match cost_idx {
            Some(i) => match parse_metric(row.get(i).unwrap_or("")) {
                Some(v) => Some(v),
                None => {
                    skipped += 1;
                    continue;
                }
            },
            None => None,
        };

        records.push(Record {
            name: row.get(name_idx).unwrap_or("").to_string(),
            primary,
            cost,
            category: row.get(category_idx).unwrap_or("").to_string(),
        });
    }

    if skipped > 0 {
        log::warn!("{}: dropped {skipped} row(s) with non-numeric metrics", path.display());
    }

    Ok(Dataset::from_records(records, labels))
}

/// Coerce a cell to a finite number. Empty, unparsable or NaN cells yield
/// `None` so the row is excluded rather than silently treated as zero.
fn parse_metric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Food": "Lentils", "Protein Index": 78, "cost": 0.4, "Region": "Asia" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    // Resolve column names from the first record; later records reuse them.
    let first = match rows.first().and_then(|r| r.as_object()) {
        Some(obj) => obj,
        None => return Ok(Dataset::empty(MetricLabels::new("Score", None))),
    };
    let keys: Vec<String> = first.keys().cloned().collect();

    let name_key = find_column(&keys, NAME_ALIASES)
        .context("JSON records missing a name field")?;
    let primary_key = find_column(&keys, PRIMARY_ALIASES)
        .context("JSON records missing a primary metric field")?;
    let category_key = find_column(&keys, CATEGORY_ALIASES)
        .context("JSON records missing a category field")?;
    let cost_key = find_column(&keys, COST_ALIASES);

    let labels = MetricLabels::new(
        &keys[primary_key],
        cost_key.map(|i| keys[i].as_str()),
    );

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let primary = match obj.get(&keys[primary_key]).and_then(json_metric) {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };
        let cost = match cost_key {
            Some(k) => match obj.get(&keys[k]).and_then(json_metric) {
                Some(v) => Some(v),
                None => {
                    skipped += 1;
                    continue;
                }
            },
            None => None,
        };

        records.push(Record {
            name: json_text(obj.get(&keys[name_key])),
            primary,
            cost,
            category: json_text(obj.get(&keys[category_key])),
        });
    }

    if skipped > 0 {
        log::warn!("{}: dropped {skipped} row(s) with non-numeric metrics", path.display());
    }

    Ok(Dataset::from_records(records, labels))
}

fn json_metric(val: &JsonValue) -> Option<f64> {
    val.as_f64().filter(|v| v.is_finite())
}

fn json_text(val: Option<&JsonValue>) -> String {
    match val {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("food_scout_{name}"));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_with_renamed_columns() {
        let path = write_temp(
            "renamed.csv",
            "Food,Protein Index,Cost per gram protein,Region\n\
             Lentils,78,0.4,Asia\n\
             Chicken,85,0.7,US\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.labels.primary, "Protein Index");
        assert_eq!(ds.labels.cost.as_deref(), Some("Cost per gram protein"));
        assert_eq!(ds.records[0].name, "Lentils");
        assert_eq!(ds.records[1].cost, Some(0.7));
    }

    #[test]
    fn csv_without_cost_column() {
        let path = write_temp(
            "no_cost.csv",
            "Country,GFSI Score,Region\nIreland,84,Europe\n",
        );
        let ds = load_file(&path).unwrap();
        assert!(!ds.has_cost());
        assert_eq!(ds.records[0].cost, None);
        assert_eq!(ds.labels.primary, "GFSI Score");
    }

    #[test]
    fn non_numeric_rows_are_dropped_not_zeroed() {
        let path = write_temp(
            "bad_rows.csv",
            "name,score,category\n\
             Good,42,X\n\
             Bad,n/a,X\n\
             AlsoBad,NaN,X\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name, "Good");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let path = write_temp("missing_col.csv", "name,category\nA,X\n");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("primary metric"));
    }

    #[test]
    fn json_records_round_through() {
        let path = write_temp(
            "records.json",
            r#"[
                {"Food": "Soy", "Protein Index": 92, "cost": 0.5, "Region": "Asia"},
                {"Food": "Milk", "Protein Index": 50, "cost": 0.6, "Region": "Europe"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].name, "Soy");
        assert_eq!(ds.records[1].primary, 50.0);
        assert_eq!(ds.labels.cost.as_deref(), Some("cost"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
