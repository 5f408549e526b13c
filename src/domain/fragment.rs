// src/domain/fragment.rs

/// One renderable piece of an info entry. Presenters decide how a
/// fragment looks; the sequence order is the reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    LineBreak,
    Link { href: String, text: String },
}

impl Fragment {
    pub fn text(s: impl Into<String>) -> Self {
        Fragment::Text(s.into())
    }

    /// A link whose visible text equals its target, as produced for
    /// URLs lifted out of plain-text notes.
    pub fn url(href: impl Into<String>) -> Self {
        let href = href.into();
        Fragment::Link {
            text: href.clone(),
            href,
        }
    }

    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Fragment::Link {
            href: href.into(),
            text: text.into(),
        }
    }
}
