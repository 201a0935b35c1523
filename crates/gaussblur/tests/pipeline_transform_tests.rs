//! Tests for the entity-series pipeline.
//!
//! These tests exercise the collection path end to end:
//! - Daily-increment derivation from cumulative totals
//! - NaN policy (zero-fill vs. propagate)
//! - Descending top-N ranking by most recent total
//! - Metadata preservation through the pipeline
//!
//! ## Test Organization
//!
//! 1. **Daily Increments** - Derivation and clamping
//! 2. **Collection Smoothing** - Shapes and metadata
//! 3. **Ranking** - Order, truncation, degenerate series
//! 4. **NaN Policy** - Zero-fill and propagation

use gaussblur::prelude::*;

fn collection(bandwidth: f64) -> CollectionBlur<f64> {
    Blur::new()
        .bandwidth(bandwidth)
        .adapter(Collection)
        .build()
        .unwrap()
}

// ============================================================================
// Daily Increment Tests
// ============================================================================

/// Test increment derivation from growing totals.
///
/// The running previous value is seeded from the first total, so the first
/// increment is always zero.
#[test]
fn test_daily_increments_growing() {
    let increments = daily_increments(&[0.0, 3.0, 9.0, 21.0]);
    assert_eq!(increments, vec![0.0, 3.0, 6.0, 12.0]);
}

/// Test that decreasing totals (reporting corrections) clamp to zero.
#[test]
fn test_daily_increments_clamped() {
    let increments = daily_increments(&[5.0, 3.0, 4.0]);
    assert_eq!(increments, vec![0.0, 0.0, 1.0]);
}

/// Test degenerate inputs.
#[test]
fn test_daily_increments_degenerate() {
    assert_eq!(daily_increments(&[] as &[f64]), Vec::<f64>::new());
    assert_eq!(daily_increments(&[7.0]), vec![0.0]);
}

// ============================================================================
// Collection Smoothing Tests
// ============================================================================

/// Test that each smoothed series keeps its shape and metadata.
#[test]
fn test_collection_shapes_and_metadata() {
    let series = vec![
        Series::new("United States", vec![0.0, 4.0, 10.0, 30.0]).with_code("US"),
        Series::new("Italy", vec![0.0, 2.0, 5.0, 8.0]),
    ];

    let smoothed = collection(10.0).fit(series);

    assert_eq!(smoothed.len(), 2);
    for s in &smoothed {
        assert_eq!(s.daily.len(), s.totals.len());
    }
    assert_eq!(smoothed[0].name, "United States");
    assert_eq!(smoothed[0].code.as_deref(), Some("US"));
    assert_eq!(smoothed[0].totals, vec![0.0, 4.0, 10.0, 30.0]);
    assert_eq!(smoothed[1].code, None);
}

/// Test that smoothed daily values stay within the increment range.
#[test]
fn test_collection_daily_within_increment_range() {
    let totals: Vec<f64> = (0..40).map(|i| (i * i) as f64).collect();
    let increments = daily_increments(&totals);
    let hi = increments.iter().cloned().fold(f64::MIN, f64::max);

    let smoothed = collection(10.0).fit(vec![Series::new("Q", totals)]);

    for &v in &smoothed[0].daily {
        assert!((0.0..=hi + 1e-9).contains(&v));
    }
}

// ============================================================================
// Ranking Tests
// ============================================================================

/// Test descending order by most recent total, with truncation.
#[test]
fn test_ranking_orders_and_truncates() {
    let series = vec![
        Series::new("small", vec![0.0, 1.0, 2.0]),
        Series::new("large", vec![0.0, 50.0, 200.0]),
        Series::new("medium", vec![0.0, 30.0, 40.0]),
    ];

    let top = Blur::new()
        .bandwidth(10.0)
        .top_n(2)
        .adapter(Collection)
        .build()
        .unwrap()
        .fit(series);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "large");
    assert_eq!(top[1].name, "medium");
}

/// Test that keep_all ranks without truncating.
#[test]
fn test_keep_all_ranks_without_truncating() {
    let series = vec![
        Series::new("a", vec![1.0]),
        Series::new("b", vec![3.0]),
        Series::new("c", vec![2.0]),
    ];

    let ranked = Blur::new()
        .bandwidth(10.0)
        .keep_all()
        .adapter(Collection)
        .build()
        .unwrap()
        .fit(series);

    let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c", "a"]);
}

/// Test that the ranking key is the raw total, not the smoothed values.
#[test]
fn test_ranking_uses_raw_totals() {
    // "flat" never grows, so its smoothed daily values are all zero, yet its
    // cumulative total outranks "spiky".
    let series = vec![
        Series::new("spiky", vec![0.0, 20.0, 20.0, 40.0]),
        Series::new("flat", vec![90.0, 90.0, 90.0, 90.0]),
    ];

    let ranked = collection(10.0).fit(series);

    assert_eq!(ranked[0].name, "flat");
    assert!(ranked[0].daily.iter().all(|&v| v == 0.0));
}

/// Test that series without samples rank last and nothing panics.
#[test]
fn test_empty_series_ranks_last() {
    let series = vec![
        Series::new("empty", Vec::new()),
        Series::new("data", vec![0.0, 5.0]),
    ];

    let ranked = collection(10.0).fit(series);

    assert_eq!(ranked[0].name, "data");
    assert_eq!(ranked[1].name, "empty");
    assert!(ranked[1].daily.is_empty());
}

/// Test that a default collection keeps at most 50 series.
#[test]
fn test_default_top_n_is_fifty() {
    let series: Vec<Series<f64>> = (0..60)
        .map(|i| Series::new(format!("s{i}"), vec![i as f64]))
        .collect();

    let ranked = collection(10.0).fit(series);

    assert_eq!(ranked.len(), 50);
    assert_eq!(ranked[0].name, "s59");
    assert_eq!(ranked[49].name, "s10");
}

// ============================================================================
// NaN Policy Tests
// ============================================================================

/// Test that the default policy zero-fills NaN smoothed values.
///
/// A NaN total makes its neighboring increments NaN; within the kernel
/// radius every accumulated sum then degenerates, and the fill restores
/// finite output.
#[test]
fn test_nan_zero_fill_default() {
    let series = vec![Series::new("gappy", vec![0.0, f64::NAN, 5.0, 7.0])];

    let smoothed = collection(10.0).fit(series);

    assert!(smoothed[0].daily.iter().all(|v| v.is_finite()));
}

/// Test that Propagate leaves NaN output in place.
#[test]
fn test_nan_propagate() {
    let series = vec![Series::new("gappy", vec![0.0, f64::NAN, 5.0, 7.0])];

    let smoothed = Blur::new()
        .bandwidth(10.0)
        .nan_policy(Propagate)
        .adapter(Collection)
        .build()
        .unwrap()
        .fit(series);

    assert!(smoothed[0].daily.iter().any(|v| v.is_nan()));
}
