//! Shared utilities for integration tests
#![allow(dead_code, unused_imports)]

pub use approx::assert_relative_eq;

use sparse_typemap::{NativeOf, TypeMap};
use std::sync::Once;

pub const EPSILON: f64 = 1e-12;

static LOGGING: Once = Once::new();

/// Route `log` records through a test-friendly tracing subscriber
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Width in bytes of the native type for `S` under `B`
pub fn native_width<B: TypeMap<S>, S>() -> usize {
    std::mem::size_of::<NativeOf<B, S>>()
}

/// Matrix values with a mix of signs and magnitudes
pub fn generate_values(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (i as f64 * 0.37).sin() * 10f64.powi((i % 7) as i32 - 3))
        .collect()
}
