use crate::core::Context;
use crate::utils::error::Result;
use regex::Regex;

pub const PHONE_MASK: &str = "XXX-XXX-XXXX";

pub struct Patterns {
    email: Regex,
    phone: Regex,
    phone_anywhere: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            phone: Regex::new(r"^\d{3}-\d{3}-\d{4}$")?,
            phone_anywhere: Regex::new(r"\d{3}-\d{3}-\d{4}")?,
        })
    }

    pub fn is_email(&self, candidate: &str) -> bool {
        self.email.is_match(candidate)
    }

    pub fn is_phone(&self, candidate: &str) -> bool {
        self.phone.is_match(candidate)
    }

    /// Replaces every phone-number-shaped substring with [`PHONE_MASK`].
    pub fn mask_phones(&self, text: &str) -> String {
        self.phone_anywhere.replace_all(text, PHONE_MASK).into_owned()
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "Valid"
    } else {
        "Invalid"
    }
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let patterns = Patterns::new()?;
    let emails = ["test@example.com", "invalid-email", "user@domain.org"];
    let phones = ["123-456-7890", "555-0123", "invalid-phone"];

    ctx.log("Email validation:");
    for email in emails {
        ctx.log(format!("  \"{}\": {}", email, verdict(patterns.is_email(email))));
    }

    ctx.log("Phone validation:");
    for phone in phones {
        ctx.log(format!("  \"{}\": {}", phone, verdict(patterns.is_phone(phone))));
    }

    let sentence = "Call me at 123-456-7890 or 555-0123";
    ctx.log(format!("Original: {}", sentence));
    ctx.log(format!("Hidden: {}", patterns.mask_phones(sentence)));

    Ok(())
}
