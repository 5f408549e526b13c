// src/util/text.rs
use regex::Regex;

use crate::domain::Fragment;

/// Split free-text notes into renderable fragments, turning every
/// `http(s)://` URL into a link fragment.
///
/// The scan runs left to right; a URL match extends until the next
/// whitespace character. Literal spans between matches keep their text,
/// with newlines emitted as `Fragment::LineBreak`. A fresh matcher is
/// built per call; no scan state survives between calls.
///
/// # Examples
///
/// ```
/// use modelview::domain::Fragment;
/// use modelview::util::text::linkify;
///
/// let fragments = linkify("See https://example.com for details");
/// assert_eq!(fragments.len(), 3);
/// assert_eq!(fragments[1], Fragment::url("https://example.com"));
/// ```
pub fn linkify(text: &str) -> Vec<Fragment> {
    let url = Regex::new(r"\bhttps?://\S+").unwrap();

    let mut fragments = Vec::new();
    let mut end = 0;
    for m in url.find_iter(text) {
        push_literal(&mut fragments, &text[end..m.start()]);
        fragments.push(Fragment::url(m.as_str()));
        end = m.end();
    }
    push_literal(&mut fragments, &text[end..]);

    fragments
}

/// The Notes entry for a record: linkified notes when present, otherwise
/// a hint naming the sidecar notes file for this model.
pub fn note_fragments(notes: Option<&str>, model_name: &str) -> Vec<Fragment> {
    match notes {
        Some(text) if !text.is_empty() => linkify(text),
        _ => vec![Fragment::Text(sidecar_note_hint(model_name))],
    }
}

/// Instructional fallback naming the sidecar `.txt` file: the model name
/// with its final `.`-delimited extension replaced (a name without a dot
/// keeps its whole text).
pub fn sidecar_note_hint(model_name: &str) -> String {
    let stem = match model_name.rfind('.') {
        Some(last) => &model_name[..last],
        None => model_name,
    };
    format!("Add custom notes in {stem}.txt")
}

fn push_literal(fragments: &mut Vec<Fragment>, span: &str) {
    if span.is_empty() {
        return;
    }
    let mut parts = span.split('\n');
    if let Some(first) = parts.next() {
        if !first.is_empty() {
            fragments.push(Fragment::text(first));
        }
        for part in parts {
            fragments.push(Fragment::LineBreak);
            if !part.is_empty() {
                fragments.push(Fragment::text(part));
            }
        }
    }
}
