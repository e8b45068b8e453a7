//! Integration tests for the vault draft submission lifecycle
//!
//! These tests drive a draft through editing, submission, failure and retry
//! against the mock creation service from the test-utils crate.

use std::sync::Arc;

use vault_draft::{BuildError, CreationError, DraftError, DraftState, OwnerError, SecurityLevel};
use vault_draft_test_utils::addresses::{SOLANA_A, SOLANA_B, SOLANA_C, SOLANA_SELF};
use vault_draft_test_utils::{
    MockCreationService, StaticWallet, TestDraftBuilder, assert_draft_err, assert_error_contains,
};

#[tokio::test]
async fn test_second_submission_rejected_while_in_flight() {
    let service = MockCreationService::new();
    service.hold_calls();
    let draft = Arc::new(
        TestDraftBuilder::new()
            .with_owner(SOLANA_A)
            .with_required(2)
            .build(service.clone())
            .unwrap(),
    );

    let first = {
        let draft = Arc::clone(&draft);
        tokio::spawn(async move { draft.submit().await })
    };

    service.wait_for_call().await;
    assert!(draft.is_submitting());
    assert_draft_err!(draft.submit().await, DraftError::SubmissionInProgress);
    assert_eq!(service.call_count(), 1);

    service.release_calls();
    let handle = first.await.unwrap().unwrap();
    assert_eq!(draft.state(), DraftState::Succeeded(handle));
    assert_draft_err!(draft.submit().await, DraftError::AlreadySubmitted);
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_submission_allowed_again_after_failure_resolves() {
    let service = MockCreationService::new();
    service.hold_calls();
    service.fail_next(CreationError::Unavailable("node offline".to_string()));
    let draft = Arc::new(TestDraftBuilder::new().build(service.clone()).unwrap());

    let first = {
        let draft = Arc::clone(&draft);
        tokio::spawn(async move { draft.submit().await })
    };
    service.wait_for_call().await;
    assert_draft_err!(draft.submit().await, DraftError::SubmissionInProgress);

    service.release_calls();
    assert_draft_err!(
        first.await.unwrap(),
        DraftError::Creation(CreationError::Unavailable(_))
    );
    assert!(matches!(draft.state(), DraftState::Failed(_)));

    assert!(draft.submit().await.is_ok());
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn test_aborted_submission_returns_to_editing() {
    let service = MockCreationService::new();
    service.hold_calls();
    let draft = Arc::new(TestDraftBuilder::new().build(service.clone()).unwrap());

    let task = {
        let draft = Arc::clone(&draft);
        tokio::spawn(async move { draft.submit().await })
    };
    service.wait_for_call().await;
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    assert_eq!(draft.state(), DraftState::Editing);

    service.release_calls();
    draft.submit().await.unwrap();
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn test_failed_submission_preserves_every_value() {
    let service = MockCreationService::new();
    service.fail_next(CreationError::Rejected("insufficient rent".to_string()));

    let mut draft = TestDraftBuilder::new()
        .with_owner(SOLANA_A)
        .with_owner(SOLANA_B)
        .with_required(3)
        .with_name("Team Treasury")
        .with_description("Main treasury for our team's funds")
        .build(service.clone())
        .unwrap();
    draft.set_daily_limit("12.5", vault_draft::LimitAsset::Dai).unwrap();

    let before = draft.build().unwrap();
    assert_error_contains!(draft.submit().await, "insufficient rent");

    assert_eq!(draft.build().unwrap(), before);
    assert_eq!(service.last_payload(), Some(before.clone()));

    // Editing moves the draft out of Failed without losing anything
    draft.add_owner().unwrap();
    assert_eq!(draft.state(), DraftState::Editing);
    assert_eq!(draft.build().unwrap(), before);

    let handle = draft.submit().await.unwrap();
    assert_eq!(handle.address, "vault-1");
    assert_eq!(service.received(), vec![before.clone(), before]);
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_service() {
    let service = MockCreationService::new();
    let draft = TestDraftBuilder::new()
        .with_owner("not a solana key")
        .build(service.clone())
        .unwrap();

    assert_draft_err!(
        draft.submit().await,
        DraftError::Build(BuildError::InvalidAddress { index: 1, .. })
    );
    assert_eq!(draft.state(), DraftState::Editing);
    assert_eq!(service.call_count(), 0);
}

#[test]
fn test_owner_edits_track_threshold() {
    let mut draft = vault_draft::VaultDraft::new(
        &StaticWallet::new(SOLANA_SELF),
        MockCreationService::new(),
        vault_draft::DraftConfig::solana(),
    )
    .unwrap();

    for _ in 0..3 {
        draft.add_owner().unwrap();
    }
    draft.set_required_signatures(4).unwrap();
    assert_eq!(draft.describe_threshold(), SecurityLevel::Maximum);

    draft.remove_owner(2).unwrap();
    assert_eq!(draft.required_signatures(), 3);

    draft.remove_owner(1).unwrap();
    draft.remove_owner(1).unwrap();
    assert_eq!(draft.required_signatures(), 1);
    assert_eq!(draft.describe_threshold(), SecurityLevel::Minimal);

    assert_draft_err!(draft.remove_owner(0), DraftError::Owner(OwnerError::ImmutableOwner));
    assert_draft_err!(
        draft.remove_owner(1),
        DraftError::Owner(OwnerError::InvalidIndex { index: 1, len: 1 })
    );
}

#[test]
fn test_describe_messages() {
    let service = MockCreationService::new();

    let single = TestDraftBuilder::new().with_required(1).build(service.clone()).unwrap();
    assert!(single.describe_threshold().to_string().contains("minimal security"));

    let all = TestDraftBuilder::new()
        .with_owner(SOLANA_A)
        .with_owner(SOLANA_B)
        .with_required(3)
        .build(service.clone())
        .unwrap();
    assert!(all.describe_threshold().to_string().starts_with("All owners must sign"));

    let partial = TestDraftBuilder::new()
        .with_owner(SOLANA_A)
        .with_owner(SOLANA_C)
        .with_required(2)
        .build(service)
        .unwrap();
    assert_eq!(
        partial.describe_threshold().to_string(),
        "2 of 3 owners must sign each transaction."
    );
}
