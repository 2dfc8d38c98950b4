//! Tolerant JSON preprocessing for workspace files
//!
//! Editor workspace files are JSONC: `//` and `/* */` comments and trailing
//! commas are allowed. `serde_json` parses strict JSON only, so the content
//! is rewritten to a strict equivalent first.

/// Rewrite JSONC content as strict JSON.
///
/// Comments are removed (newlines inside them are kept, so parse errors
/// still point at the right line) and commas directly before a closing `]`
/// or `}` are dropped. String literals pass through untouched.
pub fn to_strict_json(content: &str) -> String {
    strip_trailing_commas(&strip_comments(content))
}

/// Remove `//` line comments and `/* */` block comments.
fn strip_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        result.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                for rest in chars.by_ref() {
                    if rest == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for rest in chars.by_ref() {
                    if prev == '*' && rest == '/' {
                        break;
                    }
                    if rest == '\n' {
                        result.push('\n');
                    }
                    prev = rest;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Remove commas whose next significant character closes an array or object.
fn strip_trailing_commas(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        result.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            ',' => {
                let mut whitespace = String::new();
                let mut closes = false;
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() {
                        whitespace.push(next);
                        chars.next();
                    } else {
                        closes = next == ']' || next == '}';
                        break;
                    }
                }
                if !closes {
                    result.push(',');
                }
                result.push_str(&whitespace);
            }
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_comments() {
        let input = "{\n  // active roots\n  \"folders\": []\n}";
        let strict = to_strict_json(input);
        assert!(!strict.contains("active roots"));
        assert!(serde_json::from_str::<serde_json::Value>(&strict).is_ok());
    }

    #[test]
    fn test_strips_block_comments() {
        let input = "{ /* one\n   two */ \"folders\": [] }";
        let strict = to_strict_json(input);
        assert!(!strict.contains("two"));
        assert!(serde_json::from_str::<serde_json::Value>(&strict).is_ok());
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let input = r#"{"url": "https://example.com", "glob": "src/*.rs"}"#;
        assert_eq!(to_strict_json(input), input);
    }

    #[test]
    fn test_strips_trailing_commas() {
        let input = "{\n  \"folders\": [\n    {\"path\": \"/a\"},\n  ],\n}";
        let value: serde_json::Value = serde_json::from_str(&to_strict_json(input)).unwrap();
        assert_eq!(value["folders"][0]["path"], "/a");
    }

    #[test]
    fn test_comma_inside_string_is_kept() {
        let input = r#"{"name": "a, }"}"#;
        assert_eq!(to_strict_json(input), input);
    }

    #[test]
    fn test_strict_input_is_unchanged() {
        let input = r#"{"folders": [{"path": "/a"}], "settings": {}}"#;
        assert_eq!(to_strict_json(input), input);
    }
}
