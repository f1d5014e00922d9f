//! Phase-timed pipeline walkthrough.
//!
//! Mirrors the classic exploration flow: run the same workload a few
//! different ways, timing each named phase as it goes, then compare the
//! candidates with a sampled benchmark and a summary table.
//!
//! Run with:
//!   cargo run --example pipeline_phases
//!   RUST_LOG=debug cargo run --example pipeline_phases   # runner diagnostics

use std::hint::black_box;

use phasebench::prelude::*;
use phasebench::ReportError;

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;

/// Accumulate the grid in row-major order.
fn sum_row_major(data: &[u64]) -> u64 {
    let mut acc = 0u64;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            acc = acc.wrapping_add(data[y * WIDTH + x]);
        }
    }
    acc
}

/// Accumulate the grid column by column (stride-WIDTH accesses).
fn sum_col_major(data: &[u64]) -> u64 {
    let mut acc = 0u64;
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            acc = acc.wrapping_add(data[y * WIDTH + x]);
        }
    }
    acc
}

fn main() -> Result<(), ReportError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data: Vec<u64> = (0..WIDTH * HEIGHT).map(|i| (i % 251) as u64).collect();

    // One enter/leave pair per phase; the last phase is reported when the
    // timer goes out of scope.
    let mut total = Stopwatch::new();
    {
        let mut timer = ScopeTimer::new("row-major");
        black_box(sum_row_major(&data));
        timer.restart("col-major");
        black_box(sum_col_major(&data));
    }
    println!("phases took {:.3}ms total", total.lap_ms());

    // Sampled comparison of the two traversal orders.
    let config = BenchConfig::default();
    let results = vec![
        run("row-major", &config, || sum_row_major(&data)),
        run("col-major", &config, || sum_col_major(&data)),
    ];
    println!("benchmarks took {:.3}ms total", total.lap_ms());

    let report = Report::new(&results);
    let mut stdout = std::io::stdout();
    write_report(&report, OutputFormat::Human, &mut stdout)?;

    Ok(())
}
