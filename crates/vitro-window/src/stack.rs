//! Error stack reformatter
//!
//! Normalizes raw JS stack traces into one shape. Accepts V8-style
//! frames (`at func (file:1:2)`, `at file:1:2`) and Firefox-style
//! frames (`func@file:1:2`), drops engine-internal frames, and passes
//! anything unparseable through verbatim.

use std::fmt;

/// One parsed stack frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Function name, `<anonymous>` when the source had none
    pub function: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "    at {} ({}:{}:{})",
            self.function, self.file, self.line, self.column
        )
    }
}

/// Parse a single frame line in either V8 or Firefox form
pub fn parse_frame(line: &str) -> Option<StackFrame> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("at ") {
        let rest = rest.trim();
        return if let Some(open) = rest.find('(') {
            let function = rest[..open].trim();
            let location = rest[open + 1..].trim_end_matches(')');
            let (file, line, column) = parse_location(location)?;
            Some(StackFrame {
                function: named_or_anonymous(function),
                file,
                line,
                column,
            })
        } else {
            let (file, line, column) = parse_location(rest)?;
            Some(StackFrame {
                function: "<anonymous>".to_string(),
                file,
                line,
                column,
            })
        };
    }

    if let Some((function, location)) = line.split_once('@') {
        let (file, line, column) = parse_location(location)?;
        return Some(StackFrame {
            function: named_or_anonymous(function.trim()),
            file,
            line,
            column,
        });
    }

    None
}

fn named_or_anonymous(name: &str) -> String {
    if name.is_empty() {
        "<anonymous>".to_string()
    } else {
        name.to_string()
    }
}

/// Split `file:line:column` from the right
fn parse_location(s: &str) -> Option<(String, u32, u32)> {
    let (rest, column) = s.rsplit_once(':')?;
    let (file, line) = rest.rsplit_once(':')?;
    if file.is_empty() {
        return None;
    }
    Some((file.to_string(), line.parse().ok()?, column.parse().ok()?))
}

/// Frames the host machinery added, not the hosted script
fn is_internal(file: &str) -> bool {
    file.starts_with("node:") || file.starts_with("internal/") || file == "native"
}

/// Rebuild a normalized `Name: message` block from a raw stack dump.
/// Internal frames are dropped; lines that parse as neither frame
/// style pass through indented but otherwise untouched.
pub fn reformat(name: &str, message: &str, raw_stack: &str) -> String {
    let mut out = if message.is_empty() {
        name.to_string()
    } else {
        format!("{name}: {message}")
    };

    for (index, line) in raw_stack.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_frame(trimmed) {
            Some(frame) if is_internal(&frame.file) => {}
            Some(frame) => {
                out.push('\n');
                out.push_str(&frame.to_string());
            }
            // a leading "Error: message" header repeats what we
            // already rendered
            None if index == 0 && trimmed.starts_with(name) => {}
            None => {
                out.push('\n');
                out.push_str("    ");
                out.push_str(trimmed);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v8_frame() {
        let frame = parse_frame("    at doWork (app.js:10:5)").unwrap();
        assert_eq!(frame.function, "doWork");
        assert_eq!(frame.file, "app.js");
        assert_eq!(frame.line, 10);
        assert_eq!(frame.column, 5);
    }

    #[test]
    fn test_parse_v8_anonymous_frame() {
        let frame = parse_frame("at https://cdn.example.com/lib.js:3:14").unwrap();
        assert_eq!(frame.function, "<anonymous>");
        assert_eq!(frame.file, "https://cdn.example.com/lib.js");
        assert_eq!(frame.line, 3);
        assert_eq!(frame.column, 14);
    }

    #[test]
    fn test_parse_firefox_frame() {
        let frame = parse_frame("handleClick@main.js:42:7").unwrap();
        assert_eq!(frame.function, "handleClick");
        assert_eq!(frame.file, "main.js");

        let anon = parse_frame("@main.js:1:1").unwrap();
        assert_eq!(anon.function, "<anonymous>");
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(parse_frame("not a stack line"), None);
        assert_eq!(parse_frame("at nowhere"), None);
        assert_eq!(parse_frame(""), None);
    }

    #[test]
    fn test_reformat_mixed_styles() {
        let raw = "Error: it broke\n    at doWork (app.js:10:5)\nhandleClick@main.js:42:7";
        let formatted = reformat("Error", "it broke", raw);

        assert_eq!(
            formatted,
            "Error: it broke\n    at doWork (app.js:10:5)\n    at handleClick (main.js:42:7)"
        );
    }

    #[test]
    fn test_reformat_drops_internal_frames() {
        let raw = "    at hostCall (node:internal/modules:1:1)\n    at user (app.js:2:3)\n    at native";
        let formatted = reformat("TypeError", "x is not a function", raw);

        assert_eq!(
            formatted,
            "TypeError: x is not a function\n    at user (app.js:2:3)\n    at native"
        );
    }

    #[test]
    fn test_reformat_passthrough_and_empty_message() {
        let formatted = reformat("Error", "", "something odd happened here");
        assert_eq!(formatted, "Error\n    something odd happened here");
    }
}
