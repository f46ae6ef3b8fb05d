//! Cleanup of raw model text into strictly parseable JSON.
//!
//! Even in JSON mode, Gemini replies can arrive wrapped in Markdown
//! code fences or carrying trailing commas and `//` comments. This
//! stage removes that noise. It is best-effort and infallible: text
//! that still fails to parse is reported by the decoder, not here.

/// Clean a raw model reply so a strict JSON parser accepts it.
///
/// Idempotent — running it over already-clean JSON is a no-op.
pub fn clean_model_json(raw: &str) -> String {
    let unfenced = strip_fences(raw.trim());
    let uncommented = strip_line_comments(unfenced);
    let cleaned = strip_trailing_commas(&uncommented);
    cleaned.trim().to_string()
}

/// Remove one leading and one trailing code-fence marker, if present.
/// The opening fence may carry a language tag (```` ```json ````).
fn strip_fences(text: &str) -> &str {
    let mut text = text;

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        };
    }

    let trimmed = text.trim_end();
    if let Some(rest) = trimmed.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Cut each line at the first `//`. Not string-aware: a `//` inside a
/// JSON string is cut too.
fn strip_line_comments(text: &str) -> String {
    text.lines()
        .map(|line| match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop any comma whose next non-whitespace character closes a brace
/// or bracket.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                continue;
            }
        }
        out.push(c);
    }

    out
}
