pub mod context;
pub mod runner;

pub use crate::domain::model::{Object, Section, Value};
pub use crate::domain::ports::{Clock, Console, GcHook, RandomSource, TourSettings};
pub use crate::utils::error::Result;
pub use context::{BenchmarkMarks, Context, Host};
