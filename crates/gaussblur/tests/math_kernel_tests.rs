#![cfg(feature = "dev")]
//! Tests for the Gaussian kernel.
//!
//! These tests verify the kernel weight function used for smoothing:
//! - Weight values at specific distances
//! - Strict monotone decay with distance
//! - The analytic support radius against the precision threshold
//!
//! ## Test Organization
//!
//! 1. **Weight Computation** - Value tests at specific distances
//! 2. **Mathematical Properties** - Peak value, monotone decay
//! 3. **Support Radius** - Threshold crossing and growth with bandwidth

use approx::assert_relative_eq;

use gaussblur::internals::math::kernel::GaussianKernel;

// ============================================================================
// Weight Computation Tests
// ============================================================================

/// Test the kernel rate and a known weight value.
///
/// For bandwidth 10 the rate is 0.2, so w(1) = exp(-0.04).
#[test]
fn test_kernel_known_values() {
    let kernel = GaussianKernel::new(10.0_f64);

    assert_relative_eq!(kernel.rate(), 0.2, epsilon = 1e-12);
    assert_relative_eq!(kernel.weight(1), (-0.04_f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(kernel.weight(2), (-0.16_f64).exp(), epsilon = 1e-15);
}

/// Test that the center weight is exactly 1 for any bandwidth.
#[test]
fn test_kernel_center_weight_is_one() {
    for bandwidth in [0.5, 1.0, 10.0, 250.0] {
        let kernel = GaussianKernel::new(bandwidth);
        assert_relative_eq!(kernel.weight(0), 1.0, epsilon = 1e-15);
    }
}

/// Test that the kernel works with f32.
#[test]
fn test_kernel_f32() {
    let kernel = GaussianKernel::new(10.0_f32);
    assert_relative_eq!(kernel.weight(0), 1.0_f32, epsilon = 1e-6);
    assert!(kernel.weight(1) < 1.0);
}

// ============================================================================
// Mathematical Property Tests
// ============================================================================

/// Test strict monotone decay of weights with distance.
#[test]
fn test_kernel_monotone_decay() {
    let kernel = GaussianKernel::new(10.0_f64);

    let mut previous = kernel.weight(0);
    for d in 1..30 {
        let current = kernel.weight(d);
        assert!(
            current < previous,
            "weight should strictly decrease: w({}) = {} >= w({}) = {}",
            d,
            current,
            d - 1,
            previous
        );
        previous = current;
    }
}

/// Test that all weights are strictly positive.
#[test]
fn test_kernel_weights_positive() {
    let kernel = GaussianKernel::new(10.0_f64);
    for d in 0..30 {
        assert!(kernel.weight(d) > 0.0);
    }
}

// ============================================================================
// Support Radius Tests
// ============================================================================

/// Test the support radius against the observed constants.
///
/// For bandwidth 10 and precision 1e-6 the crossing distance is
/// ceil(sqrt(-ln 1e-6) / 0.2) = 19.
#[test]
fn test_support_radius_observed_constants() {
    let kernel = GaussianKernel::new(10.0_f64);
    let radius = kernel.support_radius(1e-6);

    assert_eq!(radius, 19);
}

/// Test that the radius lands exactly on the threshold crossing.
///
/// The weight at the radius must be at or below the precision, and the
/// weight one step earlier must be above it.
#[test]
fn test_support_radius_crossing() {
    for bandwidth in [1.0, 4.0, 10.0, 37.5] {
        for precision in [1e-2, 1e-6, 1e-9] {
            let kernel = GaussianKernel::new(bandwidth);
            let radius = kernel.support_radius(precision);

            assert!(
                kernel.weight(radius) <= precision,
                "w(radius) must be at or below the threshold (bw {bandwidth}, p {precision})"
            );
            assert!(
                radius == 0 || kernel.weight(radius - 1) > precision,
                "w(radius - 1) must be above the threshold (bw {bandwidth}, p {precision})"
            );
        }
    }
}

/// Test that the radius grows with bandwidth.
#[test]
fn test_support_radius_grows_with_bandwidth() {
    let narrow = GaussianKernel::new(2.0_f64).support_radius(1e-6);
    let medium = GaussianKernel::new(10.0_f64).support_radius(1e-6);
    let wide = GaussianKernel::new(100.0_f64).support_radius(1e-6);

    assert!(narrow < medium);
    assert!(medium < wide);
}

/// Test that a looser precision shrinks the radius.
#[test]
fn test_support_radius_shrinks_with_precision() {
    let kernel = GaussianKernel::new(10.0_f64);

    assert!(kernel.support_radius(0.5) < kernel.support_radius(1e-6));
}

/// Test the near-degenerate narrow kernel.
///
/// A very small bandwidth makes the kernel collapse to the center weight
/// after a single step.
#[test]
fn test_support_radius_tiny_bandwidth() {
    let kernel = GaussianKernel::new(1e-3_f64);
    assert_eq!(kernel.support_radius(1e-6), 1);
}
