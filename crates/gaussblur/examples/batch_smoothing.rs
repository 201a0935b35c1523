//! gaussblur Batch Smoothing Examples
//!
//! This example demonstrates the batch adapter:
//! - Smoothing a noisy daily sequence
//! - Controlling the kernel bandwidth
//! - Multi-pass smoothing

use gaussblur::prelude::*;

fn main() -> Result<(), BlurError> {
    println!("{}", "=".repeat(80));
    println!("gaussblur Batch Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_smoothing()?;
    example_2_bandwidth_sweep()?;
    example_3_multi_pass()?;

    Ok(())
}

/// Example 1: Basic Smoothing
/// Smooths a spiky synthetic daily sequence with the default parameters.
fn example_1_basic_smoothing() -> Result<(), BlurError> {
    println!("Example 1: Basic Smoothing");
    println!("{}", "-".repeat(80));

    // Synthetic noisy daily counts: a trend with weekly reporting spikes.
    let daily: Vec<f64> = (0..60)
        .map(|i| (i as f64) * 0.5 + if i % 7 == 0 { 40.0 } else { 0.0 })
        .collect();

    let model = Blur::new()
        .bandwidth(10.0) // Kernel width; larger = smoother
        .adapter(Batch)
        .build()?;

    let result = model.fit(&daily);

    println!("Result summary:\n{}", result);
    println!();
    Ok(())
}

/// Example 2: Bandwidth Sweep
/// Shows how the kernel radius and flattening grow with bandwidth.
fn example_2_bandwidth_sweep() -> Result<(), BlurError> {
    println!("Example 2: Bandwidth Sweep");
    println!("{}", "-".repeat(80));

    let daily: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 0.0 } else { 10.0 })
        .collect();

    for bandwidth in [1.0, 5.0, 20.0] {
        let model = Blur::new().bandwidth(bandwidth).adapter(Batch).build()?;
        let result = model.fit(&daily);
        println!(
            "bandwidth {:>5}: radius {:>3}, center value {:.4}",
            bandwidth,
            result.radius_used,
            result.smoothed[daily.len() / 2]
        );
    }

    println!();
    Ok(())
}

/// Example 3: Multi-Pass Smoothing
/// Applies the kernel repeatedly for extra flattening.
fn example_3_multi_pass() -> Result<(), BlurError> {
    println!("Example 3: Multi-Pass Smoothing");
    println!("{}", "-".repeat(80));

    let daily: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 0.0 } else { 10.0 })
        .collect();

    for passes in [1, 2, 4] {
        let model = Blur::new()
            .bandwidth(2.0)
            .passes(passes)
            .adapter(Batch)
            .build()?;
        let result = model.fit(&daily);
        let spread = result
            .smoothed
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max)
            - result.smoothed.iter().cloned().fold(f64::MAX, f64::min);
        println!("passes {passes}: residual spread {spread:.6}");
    }

    println!();
    Ok(())
}
