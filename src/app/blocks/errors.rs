use crate::core::Context;
use crate::domain::model::format_number;
use crate::utils::error::{Result, TourError};

pub fn risky_operation(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(TourError::invalid_input("Negative values not allowed"));
    }
    Ok(value.sqrt())
}

/// Runs `body`; on error hands it to `handler`; then always runs `cleanup`,
/// whatever the outcome. The result of body/handler is returned unchanged.
pub fn guarded<S, T>(
    state: &mut S,
    body: impl FnOnce(&mut S) -> Result<T>,
    handler: impl FnOnce(&mut S, TourError) -> Result<T>,
    cleanup: impl FnOnce(&mut S),
) -> Result<T> {
    let outcome = match body(state) {
        Ok(value) => Ok(value),
        Err(e) => handler(state, e),
    };
    cleanup(state);
    outcome
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    guarded(
        ctx,
        |ctx| {
            let root = risky_operation(16.0)?;
            ctx.log(format!("Square root of 16: {}", format_number(root)));
            let root = risky_operation(-4.0)?;
            ctx.log(format!("Square root of -4: {}", format_number(root)));
            Ok(())
        },
        |ctx, e| {
            if !e.is_invalid_input() {
                return Err(e);
            }
            tracing::debug!("Caught expected error: {}", e);
            ctx.log(format!("Caught error: {}", e));
            Ok(())
        },
        |ctx| ctx.log("Finally block executed"),
    )
}
