use crate::app::blocks::{bracketed, datetime};
use crate::core::Context;
use crate::utils::error::Result;

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn take_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Characters in `[start, end)`; indexes are clamped and swapped when reversed.
pub fn substring(text: &str, start: usize, end: usize) -> String {
    let len = char_len(text);
    let (start, end) = (start.min(len), end.min(len));
    let (from, to) = if start <= end { (start, end) } else { (end, start) };
    take_chars(text, from, to)
}

/// Like [`substring`] but negative indexes count back from the end, and a
/// reversed range is empty rather than swapped.
pub fn slice(text: &str, start: isize, end: isize) -> String {
    let len = char_len(text) as isize;
    let resolve = |index: isize| -> usize {
        if index < 0 {
            (len + index).max(0) as usize
        } else {
            index.min(len) as usize
        }
    };
    take_chars(text, resolve(start), resolve(end))
}

/// Character index of the first occurrence, or -1.
pub fn index_of(text: &str, needle: &str) -> i64 {
    match text.find(needle) {
        Some(byte_index) => text[..byte_index].chars().count() as i64,
        None => -1,
    }
}

pub fn replace_first(text: &str, from: &str, to: &str) -> String {
    text.replacen(from, to, 1)
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let text = "JavaScript is awesome!";
    let name = "world";

    ctx.log(format!("Original text: \"{}\"", text));
    ctx.log(format!("Length: {}", char_len(text)));
    ctx.log(format!("Uppercase: \"{}\"", text.to_uppercase()));
    ctx.log(format!("Lowercase: \"{}\"", text.to_lowercase()));
    ctx.log(format!("Substring (0, 10): \"{}\"", substring(text, 0, 10)));
    ctx.log(format!("Slice (11, -1): \"{}\"", slice(text, 11, -1)));
    ctx.log(format!("Index of 'Script': {}", index_of(text, "Script")));
    ctx.log(format!("Includes 'awesome': {}", text.contains("awesome")));
    ctx.log(format!(
        "Replace 'awesome' with 'great': \"{}\"",
        replace_first(text, "awesome", "great")
    ));

    let today = datetime::to_date_string(&ctx.host.clock.now());
    ctx.log(format!("Interpolation: Hello, {}! Today is {}", name, today));

    let sentence = "The quick brown fox";
    let words: Vec<&str> = sentence.split(' ').collect();
    ctx.log(format!("Split into words: {}", bracketed(&words)));
    ctx.log(format!("Joined with dashes: \"{}\"", words.join("-")));

    Ok(())
}
