//! Writes a demo `protein_sources.csv` for exercising File → Open.
//!
//! Run with `cargo run --bin generate_sample`.

use anyhow::{Context, Result};

/// Minimal deterministic LCG; enough jitter for demo data.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (name, region, typical protein index, typical cost per gram protein)
    let foods: &[(&str, &str, f64, f64)] = &[
        ("Lentils", "Asia", 78.0, 0.40),
        ("Chickpeas", "Asia", 74.0, 0.38),
        ("Soy", "Asia", 92.0, 0.50),
        ("Tofu", "Asia", 89.0, 0.52),
        ("Chicken", "US", 85.0, 0.70),
        ("Egg", "US", 88.0, 0.45),
        ("Beef", "US", 80.0, 1.10),
        ("Turkey", "US", 84.0, 0.80),
        ("Milk", "Europe", 50.0, 0.60),
        ("Cod", "Europe", 83.0, 0.95),
        ("Greek Yogurt", "Europe", 63.0, 0.68),
        ("Pork", "Europe", 76.0, 0.85),
    ];

    let output_path = "protein_sources.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record(["Food", "Protein Index", "Cost per gram protein", "Region"])
        .context("writing header")?;

    let mut rows = 0usize;
    for &(name, region, index, cost) in foods {
        // A few market variants per food, jittered around the typical values.
        for variant in 1..=3 {
            let jittered_index = index + rng.uniform(-4.0, 4.0);
            let jittered_cost = (cost * rng.uniform(0.85, 1.15)).max(0.05);
            writer
                .write_record([
                    format!("{name} (lot {variant})"),
                    format!("{jittered_index:.1}"),
                    format!("{jittered_cost:.2}"),
                    region.to_string(),
                ])
                .with_context(|| format!("writing row for {name}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} records to {output_path}");
    Ok(())
}
