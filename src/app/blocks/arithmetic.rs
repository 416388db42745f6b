use crate::core::Context;
use crate::domain::model::format_number;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicOps {
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    pub quotient: f64,
    pub remainder: f64,
    pub power: f64,
}

pub fn basic_ops(a: f64, b: f64) -> BasicOps {
    BasicOps {
        sum: a + b,
        difference: a - b,
        product: a * b,
        quotient: a / b,
        remainder: a % b,
        power: a.powf(b),
    }
}

/// Rounds halves towards positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let (a, b) = (10.0, 3.0);
    let ops = basic_ops(a, b);
    let (a_text, b_text) = (format_number(a), format_number(b));

    ctx.log(format!("Basic operations with {} and {}:", a_text, b_text));
    let rows = [
        ("Addition", "+", ops.sum),
        ("Subtraction", "-", ops.difference),
        ("Multiplication", "*", ops.product),
        ("Division", "/", ops.quotient),
        ("Modulo", "%", ops.remainder),
        ("Exponentiation", "**", ops.power),
    ];
    for (name, symbol, result) in rows {
        ctx.log(format!(
            "  {}: {} {} {} = {}",
            name,
            a_text,
            symbol,
            b_text,
            format_number(result)
        ));
    }

    let random = ctx.host.random.next_f64()?;

    ctx.log("Math functions:");
    ctx.log(format!("  PI: {}", std::f64::consts::PI));
    ctx.log(format!("  round(4.7): {}", format_number(round_half_up(4.7))));
    ctx.log(format!("  floor(4.7): {}", format_number(4.7f64.floor())));
    ctx.log(format!("  ceil(4.3): {}", format_number(4.3f64.ceil())));
    ctx.log(format!("  max(1, 5, 3): {}", format_number(max_of(&[1.0, 5.0, 3.0]))));
    ctx.log(format!("  min(1, 5, 3): {}", format_number(min_of(&[1.0, 5.0, 3.0]))));
    ctx.log(format!("  random(): {}", format_number(random)));
    ctx.log(format!("  sqrt(16): {}", format_number(16f64.sqrt())));

    Ok(())
}
