use crate::adapters::{StdoutConsole, SystemClock, SystemRandom};
use crate::domain::ports::{Clock, Console, GcHook, RandomSource};
use crate::utils::monitor::SystemMonitor;
use std::fmt::Display;

/// Everything the tour borrows from its environment.
pub struct Host {
    pub console: Box<dyn Console>,
    pub clock: Box<dyn Clock>,
    pub random: Box<dyn RandomSource>,
    pub gc: Option<Box<dyn GcHook>>,
}

impl Host {
    pub fn new(
        console: Box<dyn Console>,
        clock: Box<dyn Clock>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            console,
            clock,
            random,
            gc: None,
        }
    }

    /// Stdout, the local wall clock and OS entropy. No collector.
    pub fn system() -> Self {
        Self::new(
            Box::new(StdoutConsole),
            Box::new(SystemClock),
            Box::new(SystemRandom),
        )
    }

    pub fn with_gc(mut self, gc: Box<dyn GcHook>) -> Self {
        self.gc = Some(gc);
        self
    }
}

/// Wall-clock marks taken around the performance loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkMarks {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl BenchmarkMarks {
    pub fn elapsed_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

pub struct Context<'a> {
    pub host: &'a mut Host,
    pub iterations: usize,
    pub monitor: &'a SystemMonitor,
    pub benchmark: Option<BenchmarkMarks>,
}

impl<'a> Context<'a> {
    pub fn new(host: &'a mut Host, iterations: usize, monitor: &'a SystemMonitor) -> Self {
        Self {
            host,
            iterations,
            monitor,
            benchmark: None,
        }
    }

    pub fn log(&mut self, line: impl AsRef<str>) {
        self.host.console.log(line.as_ref());
    }

    pub fn log_parts(&mut self, parts: &[&dyn Display]) {
        self.host.console.log_parts(parts);
    }
}
