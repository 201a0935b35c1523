//! Tests for the public prelude surface.
//!
//! Verifies that everything a typical caller needs is reachable through
//! `gaussblur::prelude::*` and that the two adapters compose end to end.

use gaussblur::prelude::*;

/// Test that the batch path works entirely through prelude names.
#[test]
fn test_prelude_batch_roundtrip() {
    let daily = vec![0.0, 12.0, 3.0, 9.0, 2.0, 14.0, 5.0];

    let model = Blur::new()
        .bandwidth(10.0)
        .precision(1e-6)
        .passes(1)
        .adapter(Batch)
        .build()
        .expect("valid configuration");

    let result: BlurResult<f64> = model.fit(&daily);
    assert_eq!(result.len(), daily.len());
}

/// Test that the collection path works entirely through prelude names.
#[test]
fn test_prelude_collection_roundtrip() {
    let series = vec![
        Series::new("Italy", vec![0.0, 3.0, 9.0, 21.0]).with_code("IT"),
        Series::new("Spain", vec![0.0, 1.0, 4.0, 9.0]).with_code("ES"),
    ];

    let model = Blur::new()
        .bandwidth(10.0)
        .top_n(1)
        .nan_policy(ZeroFill)
        .adapter(Collection)
        .build()
        .expect("valid configuration");

    let top: Vec<SmoothedSeries<f64>> = model.fit(series);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].code.as_deref(), Some("IT"));
}

/// Test that the NaN policy enum is nameable and matchable.
#[test]
fn test_prelude_nan_policy_names() {
    let policy = NanPolicy::default();
    assert_eq!(policy, ZeroFill);
    assert_ne!(policy, Propagate);
}

/// Test the result Display formatting, including long-sequence elision.
#[test]
fn test_result_display() {
    let samples: Vec<f64> = (0..25).map(|i| i as f64).collect();
    let result = Blur::new()
        .bandwidth(10.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&samples);

    let rendered = format!("{result}");
    assert!(rendered.contains("Bandwidth: 10"));
    assert!(rendered.contains("Radius:    19"));
    assert!(rendered.contains("..."));
}

/// Test that errors render human-readable messages.
#[test]
fn test_error_display() {
    let err = Blur::new()
        .bandwidth(-1.0)
        .adapter(Batch)
        .build()
        .unwrap_err();

    let message = format!("{err}");
    assert!(message.contains("bandwidth"));
    assert!(message.contains("-1"));
}
