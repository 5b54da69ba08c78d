//! Free-text instruction description parsing.
//!
//! BrickSet instruction entries carry a free-text description such as
//! `"BI 3004/60 - 79003 V29 1/2"`. The version tag and the
//! part-index/part-count pair are recoverable with two patterns.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:vers|V|v).?(\d\d)").expect("valid pattern"));

static PARTS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\s|-)([0-9]{1,2})/([0-9]{1,2})(?:\s|$)").expect("valid pattern")
});

/// Structured fields extracted from an instructions description.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ParsedDescription {
    pub version: Option<String>,
    pub part: Option<u32>,
    pub parts: Option<u32>,
}

/// Extract the version tag and part-index/part-count pair from a
/// description. Fields with no match stay unset.
pub(crate) fn parse(description: &str) -> ParsedDescription {
    let version = match VERSION_PATTERN.captures(description) {
        Some(caps) => Some(format!("V{}", &caps[1])),
        // Some entries end in a bare region code instead of a version tag.
        None if description.ends_with(" IN") || description.ends_with(" NA") => {
            Some(description[description.len() - 2..].to_string())
        }
        None => None,
    };

    let (part, parts) = match PARTS_PATTERN.captures(description) {
        Some(caps) => (caps[1].parse().ok(), caps[2].parse().ok()),
        None => (None, None),
    };

    ParsedDescription {
        version,
        part,
        parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_and_parts() {
        let parsed = parse("BI 3004/60 - 79003 V29 1/2");
        assert_eq!(parsed.version.as_deref(), Some("V29"));
        assert_eq!(parsed.part, Some(1));
        assert_eq!(parsed.parts, Some(2));
    }

    #[test]
    fn lowercase_version_tag() {
        let parsed = parse("BI 3017 / 24 - 65503 v39");
        assert_eq!(parsed.version.as_deref(), Some("V39"));
        assert_eq!(parsed.part, None);
        assert_eq!(parsed.parts, None);
    }

    #[test]
    fn version_with_separator() {
        let parsed = parse("BI 3102, 4550404 vers.46");
        assert_eq!(parsed.version.as_deref(), Some("V46"));
    }

    #[test]
    fn region_code_fallback() {
        assert_eq!(parse("BI 3103/32 - 76042 IN").version.as_deref(), Some("IN"));
        assert_eq!(parse("BI 3016/80G, 4296454 NA").version.as_deref(), Some("NA"));
    }

    #[test]
    fn version_tag_wins_over_region_code() {
        let parsed = parse("BI 3006/60 V39 IN");
        assert_eq!(parsed.version.as_deref(), Some("V39"));
    }

    #[test]
    fn parts_require_short_numbers() {
        // "3004/60" is a print code, not a part pair; only " 1/2" counts.
        let parsed = parse("BI 3004/60 - 1/2");
        assert_eq!(parsed.part, Some(1));
        assert_eq!(parsed.parts, Some(2));

        let parsed = parse("BI 3004/601");
        assert_eq!(parsed.part, None);
        assert_eq!(parsed.parts, None);
    }

    #[test]
    fn parts_at_end_of_text() {
        let parsed = parse("79003 Instructions 2/2");
        assert_eq!(parsed.part, Some(2));
        assert_eq!(parsed.parts, Some(2));
    }

    #[test]
    fn no_matches() {
        assert_eq!(parse("Sticker sheet"), ParsedDescription::default());
    }
}
