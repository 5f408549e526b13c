mod helpers;

use anyhow::Result;
use helpers::{fixtures, sample_record, test_model};
use modelview::application::{DialogState, ModelInfoDialog, VersionLookup};
use modelview::domain::{DomainError, Fragment, LookupStatus, RemoteVersion};
use modelview::util::testing::{HostEvent, MockMetadataRepository, MockVersionIndex, RecordingHost};

fn sample_remote_version() -> RemoteVersion {
    RemoteVersion {
        model_id: "58390".to_string(),
        model_name: "Detail Tweaker".to_string(),
        images: vec!["https://image.civitai.com/0.jpeg".to_string()],
    }
}

#[tokio::test]
async fn given_served_record_when_opening_then_renders_linkified_notes() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());

    // Act
    dialog.open().await?;

    // Assert
    assert_eq!(dialog.state(), DialogState::Loaded);
    let view = dialog.view();
    assert!(!view.loading);
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].label, "Notes");
    assert_eq!(
        view.entries[0].fragments,
        vec![
            Fragment::text("See "),
            Fragment::url("https://example.com/a"),
            Fragment::text(" for details"),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn given_opening_when_loading_then_raw_action_starts_disabled() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());

    // Act
    dialog.open().await?;

    // Assert - opened disabled, appended disabled, enabled after load
    let events = &dialog.host().events;
    match &events[0] {
        HostEvent::Opened(view) => {
            assert!(view.loading);
            assert_eq!(view.actions.len(), 1);
            assert_eq!(view.actions[0].label, "View raw metadata");
            assert!(!view.actions[0].enabled);
        }
        other => panic!("Expected Opened first, got {other:?}"),
    }
    assert!(matches!(&events[1], HostEvent::ActionAppended(b) if !b.enabled));
    assert!(dialog.view().actions[0].enabled);
    Ok(())
}

#[tokio::test]
async fn given_record_without_notes_when_opening_then_shows_sidecar_hint() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, serde_json::json!({"format": "safetensors"}))
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());

    // Act
    dialog.open().await?;

    // Assert
    assert_eq!(
        dialog.view().entries[0].fragments,
        vec![Fragment::text("Add custom notes in detail.txt")]
    );
    Ok(())
}

#[tokio::test]
async fn given_failing_fetch_when_opening_then_shows_warning_and_returns_error() {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_failure(&model, "service answered 500")
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());

    // Act
    let result = dialog.open().await;

    // Assert - the loading state never sticks around on failure
    assert!(matches!(
        result,
        Err(DomainError::MetadataUnavailable { .. })
    ));
    let view = dialog.view();
    assert!(!view.loading);
    assert_eq!(
        view.notice.as_deref(),
        Some("⚠️ Metadata request failed for loras/detail.safetensors: service answered 500")
    );
    assert!(!view.actions[0].enabled);
    assert!(dialog.raw_metadata().is_none());
}

#[tokio::test]
async fn given_dismissal_mid_fetch_when_opening_then_discards_completion() -> Result<()> {
    // Arrange - the host reports closed as soon as the dialog is shown
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let mut dialog =
        ModelInfoDialog::new(model, repository, RecordingHost::with_dismissal_mid_fetch());

    // Act
    dialog.open().await?;

    // Assert - no refresh reached the dismissed view
    assert_eq!(dialog.state(), DialogState::Closed);
    assert_eq!(dialog.host().refresh_count(), 0);
    assert!(dialog.metadata().is_none());
    Ok(())
}

#[tokio::test]
async fn given_found_version_when_enriching_then_renders_link_and_preview() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let index = MockVersionIndex::builder()
        .with_version(fixtures::HASH, sample_remote_version())
        .build();
    let lookup = VersionLookup::new(index);
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.enrich(&lookup).await;

    // Assert
    let view = dialog.view();
    assert_eq!(view.entries.len(), 2);
    let entry = &view.entries[1];
    assert_eq!(entry.label, "Civitai");
    assert_eq!(entry.icon.as_deref(), Some("https://civitai.com/favicon.ico"));
    assert_eq!(
        entry.fragments,
        vec![Fragment::link(
            "https://civitai.com/models/58390",
            "View Detail Tweaker"
        )]
    );
    assert_eq!(
        view.preview_image.as_deref(),
        Some("https://image.civitai.com/0.jpeg")
    );
    assert!(matches!(
        dialog.lookup_status(),
        Some(LookupStatus::Found(_))
    ));
    Ok(())
}

#[tokio::test]
async fn given_pending_lookup_when_enriching_then_placeholder_shows_first() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let lookup = VersionLookup::new(MockVersionIndex::builder().build());
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.enrich(&lookup).await;

    // Assert - the refresh before resolution carries the placeholder
    let events = &dialog.host().events;
    let pending = events
        .iter()
        .filter_map(|e| match e {
            HostEvent::Refreshed(view) => view.entries.get(1),
            _ => None,
        })
        .find(|entry| entry.text() == "ℹ️ Loading...");
    assert!(pending.is_some(), "placeholder refresh missing: {events:?}");
    Ok(())
}

#[tokio::test]
async fn given_unknown_hash_when_enriching_then_entry_says_model_not_found() -> Result<()> {
    // Arrange - index without the hash answers 404
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let lookup = VersionLookup::new(MockVersionIndex::builder().build());
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.enrich(&lookup).await;

    // Assert
    assert_eq!(dialog.view().entries[1].text(), "⚠️ Model not found");
    assert!(matches!(
        dialog.lookup_status(),
        Some(LookupStatus::Failed(_))
    ));
    Ok(())
}

#[tokio::test]
async fn given_server_error_when_enriching_then_entry_carries_status_text() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let index = MockVersionIndex::builder()
        .with_status(fixtures::HASH, 500, "Internal Server Error")
        .build();
    let lookup = VersionLookup::new(index);
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.enrich(&lookup).await;

    // Assert
    assert_eq!(
        dialog.view().entries[1].text(),
        "⚠️ Error loading info (500) Internal Server Error"
    );
    Ok(())
}

#[tokio::test]
async fn given_record_without_hash_when_enriching_then_entry_names_the_gap() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, serde_json::json!({"pysssss.notes": "n"}))
        .build();
    let lookup = VersionLookup::new(MockVersionIndex::builder().build());
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.enrich(&lookup).await;

    // Assert
    assert_eq!(
        dialog.view().entries[1].text(),
        "⚠️ No content hash in metadata"
    );
    Ok(())
}

#[tokio::test]
async fn given_unopened_dialog_when_enriching_then_does_nothing() {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder().build();
    let lookup = VersionLookup::new(MockVersionIndex::builder().build());
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());

    // Act
    dialog.enrich(&lookup).await;

    // Assert
    assert!(dialog.view().entries.is_empty());
    assert!(dialog.lookup_status().is_none());
}

#[tokio::test]
async fn given_loaded_dialog_when_viewing_raw_metadata_then_rows_keep_order() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    let raw = dialog.raw_metadata().expect("metadata is loaded");

    // Assert
    let labels: Vec<&str> = raw.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["pysssss.notes", "pysssss.sha256", "format"]);
    assert_eq!(raw.entries[2].text(), "safetensors");
    Ok(())
}

#[tokio::test]
async fn given_loaded_dialog_when_dismissing_then_discards_records() -> Result<()> {
    // Arrange
    let model = test_model();
    let repository = MockMetadataRepository::builder()
        .with_record(&model, sample_record())
        .build();
    let mut dialog = ModelInfoDialog::new(model, repository, RecordingHost::new());
    dialog.open().await?;

    // Act
    dialog.dismiss();

    // Assert
    assert_eq!(dialog.state(), DialogState::Closed);
    assert!(dialog.metadata().is_none());
    assert!(dialog.raw_metadata().is_none());
    assert!(matches!(dialog.host().events.last(), Some(HostEvent::Closed)));
    Ok(())
}
