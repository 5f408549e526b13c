// src/constants.rs
//
// Wire-level strings and magic numbers shared across the codebase.
// The pysssss.* names and routes belong to the ComfyUI custom-scripts
// extension protocol and must not be renamed.

/// Metadata key carrying free-text user notes.
///
/// Used in: `domain/metadata.rs`
pub const NOTES_KEY: &str = "pysssss.notes";

/// Metadata key carrying the SHA-256 content hash of the model file,
/// used as the lookup key against the Civitai index.
///
/// Used in: `domain/metadata.rs`
pub const HASH_KEY: &str = "pysssss.sha256";

/// Route prefix of the local metadata endpoint. The `{type}/{name}`
/// composite is appended as a single percent-encoded path component.
///
/// Used in: `infrastructure/comfy.rs`
pub const METADATA_ROUTE: &str = "/pysssss/metadata/";

/// Default ComfyUI host, overridable with `--host`.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_HOST: &str = "http://127.0.0.1:8188";

/// Base URL of the Civitai public API.
///
/// Used in: `infrastructure/civitai.rs`
pub const CIVITAI_API_BASE: &str = "https://civitai.com/api/v1";

/// Base URL of Civitai model detail pages; the looked-up model id is
/// appended to build the "View ..." link target.
///
/// Used in: `domain/model.rs`
pub const CIVITAI_MODELS_PAGE: &str = "https://civitai.com/models";

/// Icon shown next to the Civitai entry label.
///
/// Used in: `application/dialog.rs`, `ports/html.rs`
pub const CIVITAI_FAVICON: &str = "https://civitai.com/favicon.ico";

/// Label of the action that opens the raw metadata view. Disabled
/// until the record has loaded.
///
/// Used in: `application/dialog.rs`
pub const RAW_METADATA_LABEL: &str = "View raw metadata";

/// Placeholder text for entries whose data is still being fetched.
///
/// Used in: `application/dialog.rs`, `ports/terminal.rs`
pub const LOADING_TEXT: &str = "ℹ️ Loading...";

/// Prefix for inline error texts replacing a pending placeholder.
///
/// Used in: `application/dialog.rs`
pub const WARNING_PREFIX: &str = "⚠️ ";

/// Request timeout for both HTTP clients, in seconds.
///
/// Neither fetch is retried; a hung service should fail the request
/// rather than park the dialog on its loading state forever.
///
/// Used in: `infrastructure/comfy.rs`, `infrastructure/civitai.rs`
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Delay in milliseconds after writing the HTML file before opening the
/// browser.
///
/// On macOS, the browser needs a brief moment for the file to be fully
/// written and indexed before opening. Without this delay, the browser may
/// open an empty or incomplete file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;
