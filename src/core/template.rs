/// Headline template parsing and rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slots every headline template must carry: subject, action,
/// place, filled in order of appearance.
pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed brace")]
    UnclosedBrace,
    #[error("unmatched closing brace")]
    UnmatchedClose,
    #[error("named placeholder '{{{0}}}' is not supported; slots are positional '{{}}'")]
    NamedPlaceholder(String),
    #[error("expected exactly 3 slots (subject, action, place), found {found}")]
    SlotCount { found: usize },
}

/// The three positional slots, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Subject,
    Action,
    Place,
}

impl Slot {
    fn nth(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::Subject),
            1 => Some(Slot::Action),
            2 => Some(Slot::Place),
            _ => None,
        }
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A positional slot: `{}`.
    Slot(Slot),
}

/// A parsed headline format string — a sequence of segments with
/// exactly three positional slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Parse a format string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{}` → the next positional slot (subject, then action, then place)
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    ///
    /// Exactly three slots are required; named placeholders are rejected.
    pub fn parse(input: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;
        let mut slots = 0usize;

        while i < len {
            if chars[i] == '{' {
                // Escaped brace
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                // Find the closing brace
                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(TemplateError::UnclosedBrace);
                    }
                    end += 1;
                }
                if end == len {
                    return Err(TemplateError::UnclosedBrace);
                }

                let content: String = chars[start..end].iter().collect();
                if !content.is_empty() {
                    return Err(TemplateError::NamedPlaceholder(content));
                }

                // Flush any accumulated literal
                if !literal_buf.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal_buf)));
                }

                if let Some(slot) = Slot::nth(slots) {
                    segments.push(Segment::Slot(slot));
                }
                slots += 1;
                i = end + 1;
            } else if chars[i] == '}' {
                // Escaped closing brace
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(TemplateError::UnmatchedClose);
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(Segment::Literal(literal_buf));
        }

        if slots != SLOT_COUNT {
            return Err(TemplateError::SlotCount { found: slots });
        }

        Ok(Template { segments })
    }

    /// Interpolate the three slots, in order. The output never contains
    /// a `{}` pair: every slot was consumed at parse time.
    pub fn render(&self, subject: &str, action: &str, place: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Slot::Subject) => out.push_str(subject),
                Segment::Slot(Slot::Action) => out.push_str(action),
                Segment::Slot(Slot::Place) => out.push_str(place),
            }
        }
        out
    }

    /// Reconstruct the original format string, re-escaping braces.
    pub fn source(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    for ch in text.chars() {
                        match ch {
                            '{' => out.push_str("{{"),
                            '}' => out.push_str("}}"),
                            other => out.push(other),
                        }
                    }
                }
                Segment::Slot(_) => out.push_str("{}"),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_slots_in_order() {
        let t = Template::parse("A {} B {} C {} D").unwrap();
        let slots: Vec<_> = t
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(slot) => Some(*slot),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![Slot::Subject, Slot::Action, Slot::Place]);
    }

    #[test]
    fn parse_emoji_template() {
        let t = Template::parse("🚨 SATIRICAL NEWS: {} {} {}!").unwrap();
        assert_eq!(
            t.segments[0],
            Segment::Literal("🚨 SATIRICAL NEWS: ".to_string())
        );
        assert_eq!(t.segments[1], Segment::Slot(Slot::Subject));
    }

    #[test]
    fn render_example_headline() {
        let t = Template::parse("🚨 SATIRICAL NEWS: {} {} {}!").unwrap();
        let text = t.render("Shahrukh Khan", "launches startup for", "Taj Mahal");
        assert_eq!(
            text,
            "🚨 SATIRICAL NEWS: Shahrukh Khan launches startup for Taj Mahal!"
        );
        assert!(!text.contains("{}"));
    }

    #[test]
    fn parse_escaped_braces() {
        let t = Template::parse("{{quote}} {} {} {}").unwrap();
        assert_eq!(t.segments[0], Segment::Literal("{quote} ".to_string()));
    }

    #[test]
    fn parse_too_few_slots_error() {
        assert_eq!(
            Template::parse("only {} and {}"),
            Err(TemplateError::SlotCount { found: 2 })
        );
    }

    #[test]
    fn parse_too_many_slots_error() {
        assert_eq!(
            Template::parse("{} {} {} {}"),
            Err(TemplateError::SlotCount { found: 4 })
        );
    }

    #[test]
    fn parse_named_placeholder_error() {
        assert!(matches!(
            Template::parse("{subject} {} {}"),
            Err(TemplateError::NamedPlaceholder(name)) if name == "subject"
        ));
    }

    #[test]
    fn parse_unclosed_brace_error() {
        assert_eq!(
            Template::parse("bad { here"),
            Err(TemplateError::UnclosedBrace)
        );
    }

    #[test]
    fn parse_nested_brace_error() {
        assert_eq!(
            Template::parse("bad {x{y}} {} {}"),
            Err(TemplateError::UnclosedBrace)
        );
    }

    #[test]
    fn escaped_pair_then_unmatched_close_error() {
        assert_eq!(
            Template::parse("bad {{} {} {}"),
            Err(TemplateError::UnmatchedClose)
        );
    }

    #[test]
    fn parse_unmatched_close_error() {
        assert_eq!(
            Template::parse("bad } here"),
            Err(TemplateError::UnmatchedClose)
        );
    }

    #[test]
    fn source_round_trips() {
        let raw = "📰 PARODY ALERT: Local Sources Report {} {} {}";
        let t = Template::parse(raw).unwrap();
        assert_eq!(t.source(), raw);
        assert_eq!(Template::parse(&t.source()).unwrap(), t);
    }

    #[test]
    fn source_re_escapes_braces() {
        let raw = "{{lit}} {} {} {}";
        let t = Template::parse(raw).unwrap();
        assert_eq!(t.source(), raw);
    }
}
