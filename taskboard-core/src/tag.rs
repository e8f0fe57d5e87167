//! Line-tag parsing: `name: value | key=val | key=val`.
//!
//! A line is a candidate tag only if it contains a `:`; anything else is
//! skipped. Leading whitespace and `*` list markers are stripped first, so
//! board files can be written as markdown bullet lists.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::Tag;

/// Strip leading whitespace / `*` list markers and trailing whitespace.
fn strip_markers(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || c == '*')
        .trim_end()
}

/// Parse one raw input line into a [`Tag`].
///
/// Returns `Ok(None)` for non-candidate lines (no `:`), `Ok(Some(tag))` for
/// parsed tags. `line_no` is 1-based and only used for diagnostics.
///
/// Rule: text before the first `:` is the name; the remainder splits on `|`,
/// the first segment (trimmed) is the value, and each later segment must be
/// a `key=value` pair (split on the first `=`, key and value trimmed).
/// Later duplicate keys overwrite earlier ones. A segment without `=` is
/// fatal — the input is treated as corrupt, not skippable.
pub fn parse_line(raw: &str, line_no: usize) -> Result<Option<Tag>, ParseError> {
    let line = strip_markers(raw);
    let Some((name, remainder)) = line.split_once(':') else {
        return Ok(None);
    };

    let mut segments = remainder.split('|');
    let value = segments.next().unwrap_or_default().trim().to_owned();

    let mut attributes = BTreeMap::new();
    for segment in segments {
        let segment = segment.trim();
        let Some((key, val)) = segment.split_once('=') else {
            return Err(ParseError::MalformedAttribute {
                line: line_no,
                segment: segment.to_owned(),
            });
        };
        attributes.insert(key.trim().to_owned(), val.trim().to_owned());
    }

    Ok(Some(Tag {
        name: name.to_owned(),
        value,
        attributes,
    }))
}

/// Best-effort numeric parse for attribute values.
///
/// Returns the parsed value when `value` is present and parses cleanly after
/// trimming; otherwise the default. Never errors — wip limits and priorities
/// degrade silently.
pub fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    match value {
        Some(s) => s.trim().parse().unwrap_or(default),
        None => default,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Tag {
        parse_line(line, 1)
            .expect("parse_line")
            .expect("candidate line")
    }

    #[test]
    fn plain_tag_without_attributes() {
        let tag = parse("title: My Project Board");
        assert_eq!(tag.name, "title");
        assert_eq!(tag.value, "My Project Board");
        assert!(tag.attributes.is_empty());
    }

    #[test]
    fn attributes_are_split_and_trimmed() {
        let tag = parse("doing: write spec | priority = 1 | person = ben ");
        assert_eq!(tag.value, "write spec");
        assert_eq!(tag.attributes.get("priority").map(String::as_str), Some("1"));
        assert_eq!(tag.attributes.get("person").map(String::as_str), Some("ben"));
    }

    #[test]
    fn later_duplicate_attribute_wins() {
        let tag = parse("doing: x | priority=1 | priority=2");
        assert_eq!(tag.attributes.get("priority").map(String::as_str), Some("2"));
    }

    #[test]
    fn list_markers_and_indentation_are_stripped() {
        let tag = parse("  * doing: fix login");
        assert_eq!(tag.name, "doing");
        assert_eq!(tag.value, "fix login");
    }

    #[test]
    fn line_without_colon_is_not_a_candidate() {
        assert_eq!(parse_line("just some prose", 1), Ok(None));
        assert_eq!(parse_line("", 1), Ok(None));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let tag = parse("doing: deploy service at 10:30");
        assert_eq!(tag.name, "doing");
        assert_eq!(tag.value, "deploy service at 10:30");
    }

    #[test]
    fn attribute_value_keeps_later_equals_signs() {
        let tag = parse("doing: x | note=a=b");
        assert_eq!(tag.attributes.get("note").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn segment_without_equals_is_fatal() {
        let err = parse_line("doing: x | oops", 7).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedAttribute { line: 7, segment: "oops".to_owned() }
        );
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn trailing_pipe_is_fatal() {
        let err = parse_line("doing: x |", 3).unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute { line: 3, .. }));
    }

    #[test]
    fn parse_or_accepts_clean_integers() {
        assert_eq!(parse_or(Some("7"), 10), 7);
        assert_eq!(parse_or(Some(" 7 "), 10), 7);
        assert_eq!(parse_or(Some("-2"), 10), -2);
    }

    #[test]
    fn parse_or_falls_back_on_garbage_or_absence() {
        assert_eq!(parse_or(Some("abc"), 10), 10);
        assert_eq!(parse_or(Some("1.5"), 10), 10);
        assert_eq!(parse_or(Some(""), 10), 10);
        assert_eq!(parse_or(None, 10), 10);
    }

    #[test]
    fn parse_or_respects_unsigned_bounds() {
        assert_eq!(parse_or::<u32>(Some("-1"), 0), 0);
        assert_eq!(parse_or::<u32>(Some("4"), 0), 4);
    }
}
