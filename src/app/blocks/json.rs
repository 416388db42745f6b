use crate::core::Context;
use crate::domain::model::Dataset;
use crate::utils::error::Result;

/// Two-space indented JSON.
pub fn to_pretty_json(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

pub fn parse_dataset(json: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(json)?)
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let dataset = Dataset::sample(ctx.host.clock.now_millis());

    let json = to_pretty_json(&dataset)?;
    ctx.log("JSON stringified:");
    ctx.log(&json);

    let parsed = parse_dataset(&json)?;
    tracing::debug!("Round trip preserved dataset: {}", parsed == dataset);
    ctx.log(format!("Parsed back - Active users: {}", parsed.active_users()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::blocks::testing::capture;
    use crate::core::Section;

    #[test]
    fn test_round_trip_preserves_fields() {
        let dataset = Dataset::sample(1_705_311_000_000);
        let json = to_pretty_json(&dataset).unwrap();
        let parsed = parse_dataset(&json).unwrap();

        assert_eq!(parsed, dataset);
        assert_eq!(parsed.active_users(), 2);
    }

    #[test]
    fn test_pretty_layout() {
        let json = to_pretty_json(&Dataset::sample(7)).unwrap();
        assert!(json.starts_with("{\n  \"users\": [\n    {\n      \"id\": 1,"));
        assert!(json.contains("\"name\": \"Charlie\""));
        assert!(json.ends_with("\"timestamp\": 7\n}"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = parse_dataset("{\"users\": [").unwrap_err();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_block_output() {
        let lines = capture(Section::Json);
        assert_eq!(lines[0], "JSON stringified:");
        assert_eq!(lines[1], "{");
        assert_eq!(lines.last().unwrap(), "Parsed back - Active users: 2");
    }
}
