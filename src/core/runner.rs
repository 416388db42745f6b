use crate::app::blocks;
use crate::core::{BenchmarkMarks, Context, Host, Section, TourSettings};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

pub const OPENING_BANNER: &str = "=== Starting Comprehensive Language Tour ===";
pub const CLOSING_BANNER: &str = "\n=== Language Tour Completed Successfully! ===";
pub const CLOSING_NOTE: &str = "All major language features exercised.";

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sections: Vec<Section>,
    /// The figure printed as "total execution time".
    pub reported_total_ms: i64,
    pub elapsed: Duration,
}

/// Reproduces the historical "total execution time" arithmetic.
///
/// This is `now - start + (end - start)`: it counts the benchmark twice and
/// ignores everything before it, so it is not the run's duration.
pub fn legacy_total_ms(now_ms: i64, marks: BenchmarkMarks) -> i64 {
    now_ms - (marks.start_ms - (marks.end_ms - marks.start_ms))
}

pub struct Runner<S: TourSettings> {
    settings: S,
    host: Host,
    monitor: SystemMonitor,
}

impl<S: TourSettings> Runner<S> {
    pub fn new(settings: S, host: Host) -> Self {
        let monitor = SystemMonitor::new(settings.monitoring_enabled());
        Self {
            settings,
            host,
            monitor,
        }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Runs the enabled blocks in order. The first block error is written to
    /// the console as `[exception] ...` and ends the run.
    pub fn run(&mut self) -> Result<RunSummary> {
        let started = Instant::now();
        let sections = Section::normalize(&self.settings.sections());
        let iterations = self.settings.iterations();
        tracing::info!("🚀 Running {} section(s)", sections.len());

        let run_start_ms = self.host.clock.now_millis();
        let mut ctx = Context::new(&mut self.host, iterations, &self.monitor);
        ctx.log(OPENING_BANNER);

        for &section in &sections {
            tracing::debug!("▶️ Section {}: {}", section.number(), section.title());
            ctx.log(section.heading());

            if let Err(e) = blocks::run_section(section, &mut ctx) {
                ctx.log(format!("[exception] {}", e));
                tracing::error!(
                    "❌ Section {} failed: {} (Category: {:?}, Severity: {:?})",
                    section.number(),
                    e,
                    e.category(),
                    e.severity()
                );
                return Err(e);
            }
        }

        let now_ms = ctx.host.clock.now_millis();
        let reported_total_ms = match ctx.benchmark {
            Some(marks) => {
                let legacy = legacy_total_ms(now_ms, marks);
                tracing::warn!(
                    "⚠️ Reported total execution time ({}ms) double-counts the benchmark; wall-clock since start is {}ms",
                    legacy,
                    now_ms - run_start_ms
                );
                legacy
            }
            None => now_ms - run_start_ms,
        };

        ctx.log(CLOSING_BANNER);
        ctx.log(format!("Total execution time: {}ms", reported_total_ms));
        ctx.log(CLOSING_NOTE);

        let elapsed = started.elapsed();
        self.monitor.log_final_stats();
        tracing::info!("✅ Tour finished in {:?}", elapsed);

        Ok(RunSummary {
            sections,
            reported_total_ms,
            elapsed,
        })
    }
}
