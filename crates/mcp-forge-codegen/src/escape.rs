//! Escaping of human-entered text embedded in generated source.
//!
//! JSON string quoting is used for string literals because its escape set is
//! valid in both Python and JavaScript.

/// Quotes text as a double-quoted string literal.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::escape::string_literal;
///
/// assert_eq!(string_literal("abc"), r#""abc""#);
/// assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(string_literal(r"^\d+$"), r#""^\\d+$""#);
/// ```
#[must_use]
pub fn string_literal(text: &str) -> String {
    let quoted = serde_json::Value::String(text.to_string()).to_string();
    if quoted.contains(is_unicode_line_break) {
        quoted
            .replace('\u{85}', "\\u0085")
            .replace('\u{2028}', "\\u2028")
            .replace('\u{2029}', "\\u2029")
    } else {
        quoted
    }
}

/// Line terminators JSON leaves unescaped.
const fn is_unicode_line_break(ch: char) -> bool {
    matches!(ch, '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for every character that ends a line in Python or
/// JavaScript source, or that some editor treats as a line break.
#[must_use]
pub const fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{0B}' | '\u{0C}') || is_unicode_line_break(ch)
}

/// Splits text into lines suitable for line comments.
///
/// Every line terminator splits, `\r\n` counts once, and other control
/// characters become spaces. Trailing whitespace is dropped; an empty input
/// yields a single empty line.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::escape::comment_lines;
///
/// assert_eq!(comment_lines("a\rb\u{2028}c"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn comment_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized
        .split(is_line_terminator)
        .map(|line| {
            line.chars()
                .map(|ch| if ch.is_control() && ch != '\t' { ' ' } else { ch })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Flattens text onto a single line.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::escape::single_line;
///
/// assert_eq!(single_line("first\nsecond\r\nthird"), "first second third");
/// ```
#[must_use]
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes text for the body of a Python triple-quoted docstring.
///
/// Line breaks other than `\n` are written as escape sequences so the
/// docstring never spans a line the tokenizer does not expect.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::escape::python_docstring;
///
/// assert_eq!(python_docstring(r#"Uses """quotes""""#), r#"Uses \"\"\"quotes\"\"\""#);
/// ```
#[must_use]
pub fn python_docstring(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.replace("\r\n", "\n").chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' | '\t' => result.push(ch),
            '\r' => result.push_str("\\r"),
            c if c.is_control() || is_unicode_line_break(c) => {
                result.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => result.push(c),
        }
    }
    result
}

/// Escapes literal text placed inside a Python f-string.
#[must_use]
pub fn python_fstring_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('{', "{{")
        .replace('}', "}}")
}

/// Escapes literal text placed inside a JavaScript template literal.
#[must_use]
pub fn js_template_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Neutralizes comment terminators inside a JSDoc block.
#[must_use]
pub fn jsdoc_text(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Escapes a regular expression for use in a JavaScript regex literal.
///
/// Unescaped forward slashes are escaped; existing escape sequences are
/// preserved, and line breaks are written as escape sequences.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::escape::js_regex_body;
///
/// assert_eq!(js_regex_body("^[a-z]+$"), "^[a-z]+$");
/// assert_eq!(js_regex_body("^https?://x$"), r"^https?:\/\/x$");
/// assert_eq!(js_regex_body(r"a\/b"), r"a\/b");
/// ```
#[must_use]
pub fn js_regex_body(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut escaped = false;

    for ch in pattern.chars() {
        match ch {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            '/' if !escaped => result.push_str("\\/"),
            _ => result.push(ch),
        }
        escaped = ch == '\\' && !escaped;
    }

    if escaped {
        // Trailing lone backslash would escape the closing delimiter.
        result.push('\\');
    }

    result
}
