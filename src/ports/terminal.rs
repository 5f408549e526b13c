// src/ports/terminal.rs
use crate::constants::LOADING_TEXT;
use crate::domain::Fragment;
use crate::ports::dialog::{ActionButton, DialogHost, DialogView, InfoEntry};

/// Dialog host that writes progressive lines to stdout. Each refresh
/// prints entries that are new or whose text changed; nothing is ever
/// redrawn in place.
#[derive(Debug, Default)]
pub struct TerminalDialog {
    open: bool,
    rendered: Vec<String>,
    preview_shown: bool,
    notice_shown: bool,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_line(entry: &InfoEntry) -> String {
        let mut text = String::new();
        for fragment in &entry.fragments {
            match fragment {
                Fragment::Text(t) => text.push_str(t),
                Fragment::LineBreak => text.push('\n'),
                Fragment::Link { href, text: t } if href == t => text.push_str(t),
                Fragment::Link { href, text: t } => {
                    text.push_str(t);
                    text.push_str(&format!(" <{href}>"));
                }
            }
        }
        format!("{}: {}", entry.label, text)
    }

    fn print_changes(&mut self, view: &DialogView) {
        if let (Some(notice), false) = (&view.notice, self.notice_shown) {
            println!("{notice}");
            self.notice_shown = true;
        }
        for (i, entry) in view.entries.iter().enumerate() {
            let line = Self::entry_line(entry);
            if i >= self.rendered.len() {
                println!("{line}");
                self.rendered.push(line);
            } else if self.rendered[i] != line {
                println!("{line}");
                self.rendered[i] = line;
            }
        }
        if let (Some(url), false) = (&view.preview_image, self.preview_shown) {
            println!("Preview: {url}");
            self.preview_shown = true;
        }
    }
}

impl DialogHost for TerminalDialog {
    fn open(&mut self, view: &DialogView) {
        self.open = true;
        println!("== {} ==", view.title);
        if view.loading {
            println!("{LOADING_TEXT}");
        }
        self.print_changes(view);
    }

    fn append_action(&mut self, _button: &ActionButton) {
        // Actions are interactive affordances; a one-shot CLI run has
        // no button row to extend.
    }

    fn refresh(&mut self, view: &DialogView) {
        self.print_changes(view);
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
