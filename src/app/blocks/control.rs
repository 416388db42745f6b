use crate::core::{Context, Object};
use crate::utils::error::Result;

pub fn day_name(day: u32) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        _ => "Other day",
    }
}

pub fn grade(score: u32) -> char {
    if score >= 90 {
        'A'
    } else if score >= 80 {
        'B'
    } else if score >= 70 {
        'C'
    } else {
        'F'
    }
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    ctx.log("While loop:");
    let mut counter = 0;
    while counter < 3 {
        ctx.log(format!("  Counter: {}", counter));
        counter += 1;
    }

    ctx.log("For loop:");
    for i in 0..3 {
        ctx.log(format!("  Iteration: {}", i));
    }

    let mapping = Object::with_entries([("a", 1i64), ("b", 2), ("c", 3)]);
    ctx.log("Key iteration:");
    for (key, value) in mapping.data_entries() {
        ctx.log(format!("  {}: {}", key, value));
    }

    let day = 2;
    ctx.log("Match expression:");
    ctx.log(format!("  {}", day_name(day)));

    let score = 85;
    ctx.log("If-else conditions:");
    ctx.log(format!("  Grade: {}", grade(score)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::blocks::testing::capture;
    use crate::core::Section;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(95), 'A');
        assert_eq!(grade(90), 'A');
        assert_eq!(grade(85), 'B');
        assert_eq!(grade(70), 'C');
        assert_eq!(grade(12), 'F');
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(1), "Monday");
        assert_eq!(day_name(2), "Tuesday");
        assert_eq!(day_name(7), "Other day");
    }

    #[test]
    fn test_block_output() {
        let lines = capture(Section::Control);
        assert_eq!(
            lines,
            vec![
                "While loop:",
                "  Counter: 0",
                "  Counter: 1",
                "  Counter: 2",
                "For loop:",
                "  Iteration: 0",
                "  Iteration: 1",
                "  Iteration: 2",
                "Key iteration:",
                "  a: 1",
                "  b: 2",
                "  c: 3",
                "Match expression:",
                "  Tuesday",
                "If-else conditions:",
                "  Grade: B",
            ]
        );
    }
}
