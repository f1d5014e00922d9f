//! Integration tests for PhaseBench.
//!
//! End-to-end checks of the reporting contract: exactly-once leave lines,
//! ordering, formatting, and unwind safety.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use phasebench::{
    BenchConfig, ManualClock, OutputFormat, Report, ScopeTimer, compute_summary, run_with_clock,
    write_report,
};

/// Write sink shareable across a panic boundary.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Every opened interval is reported exactly once, in open order.
#[test]
fn test_restart_sequence_reports_each_interval_once() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let mut timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "alpha");
        clock.advance(Duration::from_millis(1));
        timer.restart("beta");
        clock.advance(Duration::from_millis(2));
        timer.restart("gamma");
        clock.advance(Duration::from_millis(3));
    }

    let lines = out.lines();
    assert_eq!(
        lines,
        vec![
            "enter alpha",
            "leave alpha 1.000ms",
            "enter beta",
            "leave beta 2.000ms",
            "enter gamma",
            "leave gamma 3.000ms",
        ]
    );
    for name in ["alpha", "beta", "gamma"] {
        assert_eq!(out.text().matches(&format!("leave {name}")).count(), 1);
    }
}

/// A 15.5ms interval reports `15.500ms` (three fixed decimals).
#[test]
fn test_elapsed_formatting_three_decimals() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let mut timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "load");
        clock.advance(Duration::from_micros(15_500));
        timer.finish();
    }
    assert_eq!(out.lines()[1], "leave load 15.500ms");
}

/// An explicit finish followed by scope exit emits no second leave line.
#[test]
fn test_finish_then_drop_reports_once() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let mut timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "single");
        clock.advance(Duration::from_millis(5));
        timer.finish();
        clock.advance(Duration::from_millis(30));
    }
    assert_eq!(out.text().matches("leave single").count(), 1);
    assert!(out.text().contains("leave single 5.000ms"));
}

/// A panic unwinding through the owning scope still reports the open
/// interval, exactly once.
#[test]
fn test_unwind_reports_open_interval() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "doomed");
        clock.advance(Duration::from_millis(3));
        panic!("phase failed");
    }));

    assert!(result.is_err());
    assert_eq!(out.text().matches("leave doomed").count(), 1);
    assert!(out.text().contains("leave doomed 3.000ms"));
}

/// Early return from a helper still reports the open interval.
#[test]
fn test_early_return_reports_open_interval() {
    fn helper(clock: &ManualClock, out: SharedBuf, bail: bool) -> u32 {
        let _timer = ScopeTimer::with_parts(clock.clone(), out, "early");
        clock.advance(Duration::from_millis(1));
        if bail {
            return 0;
        }
        clock.advance(Duration::from_millis(9));
        1
    }

    let clock = ManualClock::new();
    let out = SharedBuf::default();
    assert_eq!(helper(&clock, out.clone(), true), 0);
    assert_eq!(out.lines(), vec!["enter early", "leave early 1.000ms"]);
}

/// Reported elapsed time is never negative under a monotonic clock.
#[test]
fn test_elapsed_never_negative() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "zero");
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
    assert_eq!(out.lines()[1], "leave zero 0.000ms");
}

/// Two consecutive phases timed through one timer instance.
#[test]
fn test_two_phase_scenario() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let mut timer = ScopeTimer::with_parts(clock.clone(), out.clone(), "phase1");
        clock.advance(Duration::from_micros(10_042));
        timer.restart("phase2");
        clock.advance(Duration::from_micros(20_187));
    }
    assert_eq!(
        out.lines(),
        vec![
            "enter phase1",
            "leave phase1 10.042ms",
            "enter phase2",
            "leave phase2 20.187ms",
        ]
    );
}

/// Independent timers do not interfere: each holds its own start.
#[test]
fn test_nested_timers_are_independent() {
    let clock = ManualClock::new();
    let out = SharedBuf::default();
    {
        let mut outer = ScopeTimer::with_parts(clock.clone(), out.clone(), "outer");
        clock.advance(Duration::from_millis(1));
        {
            let mut inner = ScopeTimer::with_parts(clock.clone(), out.clone(), "inner");
            clock.advance(Duration::from_millis(2));
            inner.finish();
        }
        clock.advance(Duration::from_millis(3));
        outer.finish();
    }
    let text = out.text();
    assert!(text.contains("leave inner 2.000ms"));
    assert!(text.contains("leave outer 6.000ms"));
}

/// Full pipeline: deterministic bench run, summary statistics, both report
/// renderings.
#[test]
fn test_bench_to_report_pipeline() {
    let clock = ManualClock::new();
    let tick = clock.clone();
    let config = BenchConfig {
        warmup_iters: 1,
        samples: 4,
        iters_per_sample: 2,
    };

    let result = run_with_clock(clock, "workload", &config, || {
        tick.advance(Duration::from_micros(3))
    });
    assert_eq!(result.samples, vec![3_000; 4]);

    let summary = compute_summary(&result.samples_f64());
    assert!((summary.mean - 3_000.0).abs() < f64::EPSILON);
    assert!((summary.std_dev - 0.0).abs() < f64::EPSILON);

    let report = Report::new(&[result]);

    let mut human = Vec::new();
    write_report(&report, OutputFormat::Human, &mut human).unwrap();
    let human = String::from_utf8(human).unwrap();
    assert!(human.contains("workload"));
    assert!(human.contains("3.00µs"));

    let mut json = Vec::new();
    write_report(&report, OutputFormat::Json, &mut json).unwrap();
    let json = String::from_utf8(json).unwrap();
    assert!(json.contains("\"best_ns\": 3000"));
}
