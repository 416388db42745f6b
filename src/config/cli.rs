use crate::config::{select_sections, DEFAULT_ITERATIONS};
use crate::domain::model::Section;
use crate::domain::ports::TourSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_iterations, validate_non_empty, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "script-tour")]
#[command(about = "Walks through core language features and prints what each one does")]
pub struct CliConfig {
    /// Sections to run, comma separated (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub sections: Vec<Section>,

    /// Sections to leave out, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<Section>,

    /// Loop count for the performance section (default: 100000)
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Report process memory in the performance section")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

impl TourSettings for CliConfig {
    fn sections(&self) -> Vec<Section> {
        select_sections(&self.sections, &self.skip)
    }

    fn iterations(&self) -> usize {
        self.iterations.unwrap_or(DEFAULT_ITERATIONS)
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_iterations("iterations", TourSettings::iterations(self))?;
        validate_non_empty("sections", &TourSettings::sections(self))?;
        Ok(())
    }
}
