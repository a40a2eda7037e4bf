//! Turns comment HTML into text that is safe to draw in a terminal.
//!
//! Comment bodies are user supplied. Besides markup they may carry escape
//! sequences (raw or entity-encoded) that would drive the host terminal, so
//! the output never contains control characters other than `\n`.

/// Escapes or sanitizes rich text before it is drawn.
pub trait SanitizedRenderer {
    fn sanitize(&self, raw_html: &str) -> String;
}

/// Plain-text rendering of comment HTML for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSanitizer;

impl SanitizedRenderer for TerminalSanitizer {
    fn sanitize(&self, raw_html: &str) -> String {
        let text = decode_entities(&strip_tags(raw_html));
        let text = strip_ansi_escapes::strip_str(&text);
        let text: String = text
            .chars()
            .filter(|ch| *ch == '\n' || !ch.is_control())
            .collect();
        collapse_blank_lines(&text)
    }
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "pre", "blockquote", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            // Unterminated tag: keep it as text.
            out.push_str(&rest[open..]);
            return out;
        };

        let tag = &after[..close];
        rest = &after[close + 1..];

        let closing = tag.starts_with('/');
        let name: String = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match name.as_str() {
            "script" | "style" if !closing => {
                rest = skip_raw_text(rest, &name);
            }
            "br" => out.push('\n'),
            "li" if !closing => out.push_str("• "),
            _ if closing && BLOCK_TAGS.contains(&name.as_str()) => out.push('\n'),
            _ => {}
        }
    }

    out.push_str(rest);
    out
}

/// Skip everything up to and including `</name ...>`.
fn skip_raw_text<'a>(input: &'a str, name: &str) -> &'a str {
    let needle = format!("</{name}");
    let lower = input.to_ascii_lowercase();
    match lower.find(&needle) {
        Some(start) => match input[start..].find('>') {
            Some(end) => &input[start + end + 1..],
            None => "",
        },
        None => "",
    }
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_entity(&after[..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_none_or(|last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
