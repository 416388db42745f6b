use crate::domain::model::Section;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// Line-oriented output sink for the tour.
pub trait Console {
    fn log(&mut self, line: &str);

    /// Joins the arguments with single spaces, like a multi-argument log call.
    fn log_parts(&mut self, parts: &[&dyn Display]) {
        let line = parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.log(&line);
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> Result<f64>;
}

/// Host-provided garbage-collection trigger, when the host has one.
pub trait GcHook {
    fn collect(&self);
}

pub trait TourSettings {
    fn sections(&self) -> Vec<Section>;
    fn iterations(&self) -> usize;
    fn monitoring_enabled(&self) -> bool;
}
