//! Flattening for the taxon description markup.
//!
//! The taxon service emits a limited `<h4>`/`<p>`/`<a>` vocabulary. The
//! panel renders labeled lines instead of trusting markup, so everything
//! tag-shaped that is not an `<h4>` section title is stripped.

/// One renderable line of a taxon description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum MarkupLine {
    Heading(String),
    Text(String),
}

pub(super) fn markup_lines(markup: &str) -> Vec<MarkupLine> {
    let mut lines = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find("<h4>") {
        push_text_lines(&mut lines, &rest[..start]);
        rest = &rest[start + "<h4>".len()..];
        match rest.find("</h4>") {
            Some(end) => {
                let heading = strip_tags(&rest[..end]);
                let heading = heading.trim();
                if !heading.is_empty() {
                    lines.push(MarkupLine::Heading(heading.to_owned()));
                }
                rest = &rest[end + "</h4>".len()..];
            }
            None => {
                // Unterminated heading; treat the tail as plain text.
                push_text_lines(&mut lines, rest);
                rest = "";
            }
        }
    }
    push_text_lines(&mut lines, rest);
    lines
}

fn push_text_lines(lines: &mut Vec<MarkupLine>, chunk: &str) {
    for line in strip_tags(chunk).lines() {
        let line = line.trim();
        if !line.is_empty() {
            lines.push(MarkupLine::Text(line.to_owned()));
        }
    }
}

fn strip_tags(chunk: &str) -> String {
    let mut out = String::with_capacity(chunk.len());
    let mut in_tag = false;
    for ch in chunk.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
