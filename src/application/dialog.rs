// src/application/dialog.rs
use tracing::{debug, instrument, warn};

use crate::application::{MetadataRepository, VersionIndex, VersionLookup};
use crate::constants::{CIVITAI_FAVICON, LOADING_TEXT, RAW_METADATA_LABEL, WARNING_PREFIX};
use crate::domain::{DomainError, Fragment, LookupStatus, MetadataRecord, ModelRef};
use crate::ports::dialog::{ActionButton, DialogHost, DialogView, InfoEntry};
use crate::util::text::note_fragments;

/// Lifecycle of the info dialog. The only way back to `Closed` is an
/// explicit dismissal, which discards the fetched records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    /// Shown with the loading indicator, metadata fetch pending.
    Opening,
    /// Metadata rendered, raw-metadata action enabled.
    Loaded,
}

/// The model info dialog session: fetches the metadata record, renders
/// the Notes entry, and optionally enriches the view from the external
/// index. All display goes through the [`DialogHost`] capability; the
/// session never assumes anything about how the host draws.
pub struct ModelInfoDialog<R: MetadataRepository, H: DialogHost> {
    model: ModelRef,
    repository: R,
    host: H,
    state: DialogState,
    view: DialogView,
    metadata: Option<MetadataRecord>,
    lookup: Option<LookupStatus>,
}

impl<R: MetadataRepository, H: DialogHost> ModelInfoDialog<R, H> {
    pub fn new(model: ModelRef, repository: R, host: H) -> Self {
        Self {
            model,
            repository,
            host,
            state: DialogState::Closed,
            view: DialogView::default(),
            metadata: None,
            lookup: None,
        }
    }

    /// Open the dialog: show the title and loading indicator, fetch the
    /// metadata record, then render the Notes entry and enable the
    /// raw-metadata action.
    ///
    /// A failed fetch replaces the loading indicator with a warning
    /// message, leaves the action disabled, and is returned to the
    /// caller. The view is never left on the loading state.
    #[instrument(level = "debug", skip(self), fields(model = %self.model))]
    pub async fn open(&mut self) -> Result<(), DomainError> {
        self.view = DialogView::new(&self.model.name);
        self.view
            .actions
            .push(ActionButton::disabled(RAW_METADATA_LABEL));
        self.state = DialogState::Opening;
        self.host.open(&self.view);
        self.host.append_action(&self.view.actions[0]);

        let result = self.repository.get_metadata(&self.model).await;

        // The host may have been dismissed while the fetch was in
        // flight; a late completion must not touch the dead view.
        if !self.host.is_open() {
            debug!("host dismissed during metadata fetch, discarding result");
            self.state = DialogState::Closed;
            return Ok(());
        }

        self.view.loading = false;
        match result {
            Ok(record) => {
                self.view.actions[0].enabled = true;
                self.view.entries.push(InfoEntry::new(
                    "Notes",
                    note_fragments(record.notes(), &self.model.name),
                ));
                self.metadata = Some(record);
                self.state = DialogState::Loaded;
                self.host.refresh(&self.view);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "metadata fetch failed");
                self.view.notice = Some(format!("{WARNING_PREFIX}{err}"));
                self.host.refresh(&self.view);
                Err(err)
            }
        }
    }

    /// Add the Civitai entry and resolve it from the external index.
    ///
    /// One-shot: the pending placeholder is replaced in place by either
    /// the detail-page link (revealing the first preview image) or a
    /// warning-prefixed error text. Failures stay inside the entry; the
    /// rest of the dialog keeps working and nothing is retried.
    #[instrument(level = "debug", skip(self, lookup), fields(model = %self.model))]
    pub async fn enrich<I: VersionIndex>(&mut self, lookup: &VersionLookup<I>) {
        let Some(record) = self.metadata.clone() else {
            debug!("no metadata loaded, skipping enrichment");
            return;
        };

        let entry =
            InfoEntry::new("Civitai", vec![Fragment::text(LOADING_TEXT)]).with_icon(CIVITAI_FAVICON);
        self.view.entries.push(entry);
        let index = self.view.entries.len() - 1;
        self.lookup = Some(LookupStatus::Pending);
        self.host.refresh(&self.view);

        let result = lookup.for_record(&record).await;

        if !self.host.is_open() {
            debug!("host dismissed during lookup, discarding result");
            self.state = DialogState::Closed;
            return;
        }

        match result {
            Ok(version) => {
                self.view.entries[index].fragments = vec![Fragment::link(
                    version.page_url(),
                    format!("View {}", version.model_name),
                )];
                if let Some(image) = version.preview_image() {
                    self.view.preview_image = Some(image.to_string());
                }
                self.lookup = Some(LookupStatus::Found(version));
            }
            Err(err) => {
                warn!(%err, "external lookup failed");
                let message = err.to_string();
                self.view.entries[index].fragments =
                    vec![Fragment::text(format!("{WARNING_PREFIX}{message}"))];
                self.lookup = Some(LookupStatus::Failed(message));
            }
        }
        self.host.refresh(&self.view);
    }

    /// The raw metadata view, available once the record is loaded.
    pub fn raw_metadata(&self) -> Option<DialogView> {
        self.metadata.as_ref().map(DialogView::for_metadata)
    }

    /// Dismiss the dialog and discard both records.
    pub fn dismiss(&mut self) {
        self.host.close();
        self.state = DialogState::Closed;
        self.metadata = None;
        self.lookup = None;
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn view(&self) -> &DialogView {
        &self.view
    }

    pub fn metadata(&self) -> Option<&MetadataRecord> {
        self.metadata.as_ref()
    }

    pub fn lookup_status(&self) -> Option<&LookupStatus> {
        self.lookup.as_ref()
    }
}
