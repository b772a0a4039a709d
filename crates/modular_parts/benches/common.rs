use std::time::Duration;

use criterion::{Criterion, Throughput};

// Single draws finish in well under a microsecond; more samples over a shorter window.
pub const DRAW_SAMPLES: usize = 100;
pub const DRAW_WARM_UP: Duration = Duration::from_millis(300);
pub const DRAW_MEASUREMENT: Duration = Duration::from_millis(800);

pub fn draw_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(DRAW_SAMPLES)
        .warm_up_time(DRAW_WARM_UP)
        .measurement_time(DRAW_MEASUREMENT)
}

/// Throughput in table entries (or catalog parts) scanned per draw.
pub fn entries_scanned(entries: usize) -> Throughput {
    Throughput::Elements(entries.max(1) as u64)
}
