//! gaussblur Collection Ranking Example
//!
//! This example demonstrates the collection adapter:
//! - Deriving daily increments from cumulative totals
//! - Smoothing many entity series at once
//! - Ranking entities by most recent total and keeping the top N

use gaussblur::prelude::*;

fn main() -> Result<(), BlurError> {
    println!("{}", "=".repeat(80));
    println!("gaussblur Collection Ranking Example");
    println!("{}", "=".repeat(80));
    println!();

    // Cumulative totals per entity, as a tabular loader would produce them.
    let series = vec![
        Series::new("Italy", cumulative(&[0.0, 2.0, 7.0, 11.0, 18.0, 26.0])).with_code("IT"),
        Series::new("Spain", cumulative(&[0.0, 1.0, 3.0, 8.0, 12.0, 15.0])).with_code("ES"),
        Series::new("Norway", cumulative(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0])).with_code("NO"),
    ];

    let model = Blur::new()
        .bandwidth(10.0) // Kernel width for the daily increments
        .top_n(2) // Keep the two largest entities
        .nan_policy(ZeroFill) // Replace NaN output with 0
        .adapter(Collection)
        .build()?;

    let top = model.fit(series);

    for (rank, s) in top.iter().enumerate() {
        println!(
            "#{} {} [{}]: latest total {:.1}",
            rank + 1,
            s.name,
            s.code.as_deref().unwrap_or("--"),
            s.totals.last().copied().unwrap_or(0.0)
        );
        println!("   smoothed daily: {:?}", s.daily);
    }

    Ok(())
}

/// Build cumulative totals from raw daily values.
fn cumulative(daily: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    daily
        .iter()
        .map(|d| {
            total += d;
            total
        })
        .collect()
}
