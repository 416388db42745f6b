pub mod advanced;
pub mod arithmetic;
pub mod control;
pub mod datetime;
pub mod errors;
pub mod functions;
pub mod json;
pub mod objects;
pub mod patterns;
pub mod performance;
pub mod sequences;
pub mod text;
pub mod variables;

use crate::core::{Context, Section};
use crate::utils::error::Result;
use std::fmt::Display;

pub fn run_section(section: Section, ctx: &mut Context<'_>) -> Result<()> {
    match section {
        Section::Variables => variables::run(ctx),
        Section::Control => control::run(ctx),
        Section::Arithmetic => arithmetic::run(ctx),
        Section::Functions => functions::run(ctx),
        Section::Sequences => sequences::run(ctx),
        Section::Objects => objects::run(ctx),
        Section::Text => text::run(ctx),
        Section::Errors => errors::run(ctx),
        Section::DateTime => datetime::run(ctx),
        Section::Patterns => patterns::run(ctx),
        Section::Advanced => advanced::run(ctx),
        Section::Json => json::run(ctx),
        Section::Performance => performance::run(ctx),
    }
}

/// `[a, b, c]`
pub fn bracketed<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
