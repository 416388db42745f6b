use crate::core::Context;
use crate::utils::error::Result;

pub const DEFAULT_AGE: u32 = 25;

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

pub fn introduce(name: &str, age: Option<u32>) -> String {
    format!(
        "Hi, I'm {} and I'm {} years old.",
        name,
        age.unwrap_or(DEFAULT_AGE)
    )
}

pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |total, n| total + n)
}

/// Variadic front end for [`sum`].
macro_rules! sum_of {
    ($($n:expr),* $(,)?) => {
        sum(&[$($n),*])
    };
}

/// Each call returns the next integer, starting at 1.
pub fn create_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let multiply = |x: i64, y: i64| x * y;
    let square = |n: i64| n * n;

    ctx.log(greet("Alice"));
    ctx.log(format!("Multiply 4 * 7 = {}", multiply(4, 7)));
    ctx.log(format!("Square of 8 = {}", square(8)));
    ctx.log(introduce("Bob", None));
    ctx.log(introduce("Charlie", Some(30)));
    ctx.log(format!("Sum of 1,2,3,4,5 = {}", sum_of!(1, 2, 3, 4, 5)));

    let mut counter = create_counter();
    let (first, second, third) = (counter(), counter(), counter());
    ctx.log(format!("Counter: {}, {}, {}", first, second, third));

    Ok(())
}
