#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Section;

pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Sections to run: `include` (everything when empty) minus `skip`, in
/// execution order.
pub fn select_sections(include: &[Section], skip: &[Section]) -> Vec<Section> {
    let base = if include.is_empty() {
        Section::ALL.to_vec()
    } else {
        Section::normalize(include)
    };
    base.into_iter().filter(|s| !skip.contains(s)).collect()
}
