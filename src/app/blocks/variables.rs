use crate::core::{Context, Value};
use crate::utils::error::Result;

/// One sample per value category.
pub fn samples() -> Vec<(&'static str, Value)> {
    vec![
        ("String", Value::from("Hello World")),
        ("Integer", Value::Int(42)),
        ("Float", Value::Float(3.14159)),
        ("Boolean", Value::Bool(true)),
        ("Null", Value::Null),
        ("Undefined", Value::Undefined),
    ]
}

pub fn describe(label: &str, value: &Value) -> String {
    format!("{}: {} (type: {})", label, value, value.type_label())
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    for (label, value) in samples() {
        ctx.log(describe(label, &value));
    }
    Ok(())
}
