//! Response post-processing: force an H1 title onto the first line and
//! derive a filesystem-safe slug from it.

pub const HEADING_PREFIX: &str = "# ";
pub const UNTITLED: &str = "untitled";

/// Markdown body ready to be written, plus the file stem derived from its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDocument {
    pub body: String,
    pub slug: String,
}

impl FormattedDocument {
    /// `<slug>.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// Ensure the first line of `raw` is an H1 heading and derive a slug from it.
///
/// Only the first line is touched: surrounding whitespace and every `*`
/// emphasis marker are removed, and `# ` is prepended unless already there.
/// The remaining lines are kept as-is and rejoined with `\n`. Lines end at
/// `\n`, `\r\n` or a lone `\r`, and at the other Unicode line boundaries.
/// Text with no lines at all is returned unchanged with slug `untitled`.
pub fn format_document(raw: &str) -> FormattedDocument {
    let mut lines = split_lines(raw).into_iter();
    let Some(first) = lines.next() else {
        return FormattedDocument {
            body: raw.to_string(),
            slug: UNTITLED.to_string(),
        };
    };

    let heading = heading_line(first);
    let slug = slugify(&heading[HEADING_PREFIX.len()..]);

    let mut body = heading;
    for line in lines {
        body.push('\n');
        body.push_str(line);
    }

    FormattedDocument { body, slug }
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the ASCII file,
/// group and record separators, NEL and the Unicode line/paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// A trailing break does not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn heading_line(line: &str) -> String {
    let stripped: String = line.trim().chars().filter(|&c| c != '*').collect();
    let cleaned = stripped.trim();

    if cleaned.starts_with(HEADING_PREFIX) {
        cleaned.to_string()
    } else if cleaned == HEADING_PREFIX.trim_end() {
        // bare "#": an empty title, not a title reading "#"
        HEADING_PREFIX.to_string()
    } else {
        format!("{HEADING_PREFIX}{cleaned}")
    }
}

/// Lowercase, hyphenated slug keeping only ASCII letters, digits and hyphens.
///
/// Falls back to `untitled` when nothing survives the filtering.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let slug = kept
        .trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        UNTITLED.to_string()
    } else {
        slug
    }
}
