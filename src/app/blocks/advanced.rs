use crate::app::blocks::bracketed;
use crate::core::{Context, Object, Value};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Tag for a template whose literal segments and interpolated values arrive
/// separately. Truthy values are wrapped in `**`, falsy ones vanish.
pub fn highlight(strings: &[&str], values: &[Value]) -> String {
    strings
        .iter()
        .enumerate()
        .fold(String::new(), |mut result, (i, segment)| {
            result.push_str(segment);
            if let Some(value) = values.get(i).filter(|value| value.is_truthy()) {
                result.push_str(&format!("**{}**", value));
            }
            result
        })
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let colors = ["red", "green", "blue"];
    let [first, second, third] = colors;
    ctx.log(format!("Destructured colors: {}, {}, {}", first, second, third));

    let user = Account {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        role: "admin".to_string(),
    };
    let Account {
        username,
        email,
        role,
    } = user;
    ctx.log(format!("Destructured user: {} ({}) - {}", username, email, role));

    let left = [1, 2, 3];
    let right = [4, 5, 6];
    let combined = [left.as_slice(), right.as_slice()].concat();
    ctx.log(format!("Combined arrays: {}", bracketed(&combined)));

    let original = Object::with_entries([("a", 1i64), ("b", 2)]);
    let extended = original.extended([("c", 3i64), ("d", 4)]);
    ctx.log_parts(&[&"Extended object:", &extended]);

    let highlighted = highlight(
        &["Hello ", ", you have ", " access!"],
        &[Value::from(username), Value::from(role)],
    );
    ctx.log(format!("Tagged template: {}", highlighted));

    Ok(())
}
