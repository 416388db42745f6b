use crate::app::blocks::bracketed;
use crate::core::Context;
use crate::utils::error::Result;

pub fn doubled(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n * 2).collect()
}

pub fn evens(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn total(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |sum, n| sum + n)
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let mut fruits = vec!["apple", "banana", "orange"];
    let numbers = [1i64, 2, 3, 4, 5];

    ctx.log(format!("Original fruits: {}", bracketed(&fruits)));
    ctx.log(format!("Array length: {}", fruits.len()));

    fruits.push("grape");
    ctx.log(format!("After push: {}", bracketed(&fruits)));

    if let Some(removed) = fruits.pop() {
        ctx.log(format!(
            "After pop (removed {}): {}",
            removed,
            bracketed(&fruits)
        ));
    }

    fruits.insert(0, "mango");
    ctx.log(format!("After unshift: {}", bracketed(&fruits)));

    ctx.log("Array iteration methods:");
    numbers.iter().enumerate().for_each(|(index, n)| {
        ctx.log(format!("  Index {}: {}", index, n));
    });

    ctx.log(format!("Doubled numbers: {}", bracketed(&doubled(&numbers))));
    ctx.log(format!("Even numbers: {}", bracketed(&evens(&numbers))));
    ctx.log(format!("Sum of numbers: {}", total(&numbers)));

    Ok(())
}
