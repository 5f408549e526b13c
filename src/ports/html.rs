// src/ports/html.rs
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

use crate::domain::{Fragment, MetadataRecord};
use crate::ports::dialog::{DialogView, InfoEntry};

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn fragment_html(fragment: &Fragment) -> String {
        match fragment {
            Fragment::Text(text) => encode_text(text).into_owned(),
            Fragment::LineBreak => "<br>".to_string(),
            Fragment::Link { href, text } => format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                encode_double_quoted_attribute(href),
                encode_text(text)
            ),
        }
    }

    fn entry_html(entry: &InfoEntry) -> String {
        let icon = entry
            .icon
            .as_ref()
            .map(|src| {
                format!(
                    r#"<img class="entry-icon" src="{}" alt="">"#,
                    encode_double_quoted_attribute(src)
                )
            })
            .unwrap_or_default();
        let value: String = entry.fragments.iter().map(Self::fragment_html).collect();

        format!(
            "<p>{icon}<label>{}: </label><span>{value}</span></p>",
            encode_text(&entry.label)
        )
    }

    fn metadata_html(record: &MetadataRecord) -> String {
        let rows: String = record
            .entries()
            .map(|(key, value)| {
                format!(
                    "<div><label>{}</label><span>{}</span></div>",
                    encode_text(key),
                    encode_text(&value)
                )
            })
            .collect();

        format!("<details><summary>Raw metadata</summary>{rows}</details>")
    }

    /// Render the dialog as a self-contained page. The raw metadata
    /// record, when given, is included as a collapsible section.
    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, view: &DialogView, metadata: Option<&MetadataRecord>) -> String {
        let title = encode_text(&view.title);
        let notice = view
            .notice
            .as_ref()
            .map(|n| format!(r#"<div class="notice">{}</div>"#, encode_text(n)))
            .unwrap_or_default();
        let entries: String = view.entries.iter().map(Self::entry_html).collect();
        let preview = view
            .preview_image
            .as_ref()
            .map(|url| {
                format!(
                    r#"<img class="preview" src="{}">"#,
                    encode_double_quoted_attribute(url)
                )
            })
            .unwrap_or_default();
        let raw = metadata.map(Self::metadata_html).unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        main {{
            display: flex;
            gap: 1rem;
        }}
        label {{
            font-weight: 600;
        }}
        .entry-icon {{
            width: 18px;
            position: relative;
            top: 3px;
            margin: 0 5px 0 0;
        }}
        .preview {{
            max-width: 300px;
            border-radius: 4px;
        }}
        .notice {{
            color: #8a6d3b;
            background: #fcf8e3;
            padding: 0.5rem 1rem;
            border-radius: 4px;
        }}
        details {{
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }}
        details div {{
            display: flex;
            gap: 0.5rem;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h2>{title}</h2>
        {notice}
        <main>
            <div class="info">
                {entries}
            </div>
            {preview}
        </main>
        {raw}
    </div>
</body>
</html>"#
        )
    }
}
