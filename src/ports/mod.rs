// src/ports/mod.rs
pub mod dialog;
pub mod html;
pub mod terminal;

pub use dialog::{ActionButton, DialogHost, DialogView, HeadlessDialog, InfoEntry};
pub use html::HtmlPresenter;
pub use terminal::TerminalDialog;
