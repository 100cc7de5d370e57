use std::sync::LazyLock;

use crate::bench::Measurement;

/// Element count used when the recorded sweep below was captured.
pub const RECORDED_ELEMS: usize = 10_000_000;

/// Pool merge sort runtimes recorded from an earlier sweep over 10M random
/// elements. Overlaid on charts as a reference series when the live
/// configuration matches.
pub static RECORDED_RANDOM_10M: LazyLock<Vec<Measurement>> = LazyLock::new(|| {
    vec![
        Measurement { name: "recorded", thread_count: 2, runtime_ms: 7534 },
        Measurement { name: "recorded", thread_count: 4, runtime_ms: 5677 },
        Measurement { name: "recorded", thread_count: 8, runtime_ms: 4997 },
        Measurement { name: "recorded", thread_count: 16, runtime_ms: 5361 },
        Measurement { name: "recorded", thread_count: 32, runtime_ms: 5723 },
        Measurement { name: "recorded", thread_count: 64, runtime_ms: 6089 },
        Measurement { name: "recorded", thread_count: 100, runtime_ms: 6400 },
    ]
});
