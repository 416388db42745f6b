use crate::core::{BenchmarkMarks, Context};
use crate::utils::error::Result;

/// Sum of `sqrt(i) * sin(i)` for `i` in `0..iterations`.
pub fn accumulate(iterations: usize) -> f64 {
    (0..iterations)
        .map(|i| {
            let x = i as f64;
            x.sqrt() * x.sin()
        })
        .sum()
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let iterations = ctx.iterations;
    let start_ms = ctx.host.clock.now_millis();
    let result = accumulate(std::hint::black_box(iterations));
    let end_ms = ctx.host.clock.now_millis();

    let marks = BenchmarkMarks { start_ms, end_ms };
    ctx.benchmark = Some(marks);
    tracing::debug!("Benchmark marks: {:?}", marks);

    ctx.log(format!(
        "Performance test: {} iterations took {}ms",
        iterations,
        marks.elapsed_ms()
    ));
    ctx.log(format!("Result: {:.2}", result));

    if let Some(usage) = ctx.monitor.memory_usage() {
        ctx.log(format!(
            "Memory usage: {}MB (peak {}MB)",
            usage.current_mb, usage.peak_mb
        ));
    }

    if let Some(gc) = ctx.host.gc.as_deref() {
        ctx.host.console.log("Garbage collection available");
        gc.collect();
        ctx.host.console.log("Garbage collection triggered");
    }

    Ok(())
}
