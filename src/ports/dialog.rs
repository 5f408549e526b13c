// src/ports/dialog.rs
use crate::domain::{Fragment, MetadataRecord};

/// One labeled row of the info dialog: "Notes: ..." or "Civitai: ...".
/// The label may carry an icon URL shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoEntry {
    pub label: String,
    pub icon: Option<String>,
    pub fragments: Vec<Fragment>,
}

impl InfoEntry {
    pub fn new(label: impl Into<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            fragments,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The entry rendered as plain text, links collapsing to their
    /// visible text. Used by the terminal host and in assertions.
    pub fn text(&self) -> String {
        fragments_to_text(&self.fragments)
    }
}

/// A dialog action the host renders as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub enabled: bool,
}

impl ActionButton {
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }
}

/// Everything the dialog wants shown: title, entries, an optional
/// preview image and the action row. The dialog mutates its own copy
/// and pushes the whole view through the host on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    /// True while the metadata fetch is pending.
    pub loading: bool,
    /// Warning text shown in place of the loading indicator when the
    /// metadata fetch fails.
    pub notice: Option<String>,
    pub entries: Vec<InfoEntry>,
    /// Preview image URL; hidden until the external lookup reveals it.
    pub preview_image: Option<String>,
    pub actions: Vec<ActionButton>,
}

impl DialogView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            loading: true,
            ..Self::default()
        }
    }

    /// The raw metadata view: one row per key in the order the service
    /// sent them, values coerced to text, nothing else.
    pub fn for_metadata(record: &MetadataRecord) -> Self {
        Self {
            title: "Raw metadata".to_string(),
            loading: false,
            notice: None,
            entries: record
                .entries()
                .map(|(key, value)| InfoEntry::new(key, vec![Fragment::Text(value)]))
                .collect(),
            preview_image: None,
            actions: vec![],
        }
    }
}

/// Capability the dialog needs from whatever displays it. Hosts are
/// composed in, not inherited from; the dialog never assumes more than
/// this surface.
///
/// `is_open` is consulted after every await point: a host dismissed
/// mid-fetch must not have its view mutated by a late completion.
pub trait DialogHost {
    fn open(&mut self, view: &DialogView);
    fn append_action(&mut self, button: &ActionButton);
    fn refresh(&mut self, view: &DialogView);
    fn close(&mut self);
    fn is_open(&self) -> bool;
}

/// Host that displays nothing and stays open until closed. Used when
/// the session output is rendered once at the end, as the HTML page
/// export does.
#[derive(Debug, Default)]
pub struct HeadlessDialog {
    open: bool,
}

impl HeadlessDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DialogHost for HeadlessDialog {
    fn open(&mut self, _view: &DialogView) {
        self.open = true;
    }

    fn append_action(&mut self, _button: &ActionButton) {}

    fn refresh(&mut self, _view: &DialogView) {}

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Flatten fragments to plain text: links keep their visible text,
/// breaks become newlines.
pub fn fragments_to_text(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::LineBreak => out.push('\n'),
            Fragment::Link { text, .. } => out.push_str(text),
        }
    }
    out
}
