//! Integration tests for the payload handed to the vault creation service

#[cfg(feature = "serde")]
use serde_json::json;
use vault_draft::{
    AddressFormat, AdvancedSettings, BuildError, DailyLimit, DraftConfig, DraftError, LimitAsset,
    MemberPermissions, TimeLock,
};
use vault_draft_test_utils::addresses::{EVM_A, EVM_B, EVM_SELF, SOLANA_A, SOLANA_B, SOLANA_SELF};
use vault_draft_test_utils::malformed::{SHORT_BASE58, UNPREFIXED_HEX};
use vault_draft_test_utils::{
    MockCreationService, TestDraftBuilder, assert_draft_err, solana_owners,
};

#[test]
fn test_self_plus_blank_owners_builds_single_member() {
    let draft = TestDraftBuilder::new()
        .with_blank_owner()
        .with_blank_owner()
        .build(MockCreationService::new())
        .unwrap();

    let payload = draft.build().unwrap();
    assert_eq!(payload.threshold, 1);
    assert_eq!(payload.members.len(), 1);
    assert_eq!(payload.members[0].address, SOLANA_SELF);
    assert_eq!(payload.members[0].permissions, MemberPermissions::full());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_service_receives_exact_wire_shape() {
    let service = MockCreationService::new();
    let settings = AdvancedSettings::default()
        .with_daily_limit(DailyLimit::parse("5.0", LimitAsset::Eth).unwrap())
        .with_time_lock(TimeLock::TwentyFourHours)
        .with_emergency_recovery(true);
    let draft = TestDraftBuilder::new()
        .with_owner(SOLANA_A)
        .with_blank_owner()
        .with_owner(SOLANA_B)
        .with_required(2)
        .with_settings(settings)
        .with_name("Team Treasury")
        .build(service.clone())
        .unwrap();

    draft.submit().await.unwrap();

    let sent = serde_json::to_value(service.last_payload().unwrap()).unwrap();
    let full = json!({ "proposer": true, "voter": true, "executor": true });
    assert_eq!(
        sent,
        json!({
            "threshold": 2,
            "members": [
                { "address": SOLANA_SELF, "permissions": full },
                { "address": SOLANA_A, "permissions": full },
                { "address": SOLANA_B, "permissions": full },
            ],
            "settings": {
                "dailyLimit": { "baseUnits": "5000000000000000000", "asset": "ETH" },
                "timeLock": "24h",
                "emergencyRecoveryEnabled": true,
                "contractInteractionEnabled": true,
            },
            "metadata": { "name": "Team Treasury" },
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_payload_deserializes_from_service_json() {
    use vault_draft::VaultCreationPayload;

    let text = r#"{
        "threshold": 1,
        "members": [
            { "address": "owner", "permissions": { "proposer": true, "voter": false, "executor": true } }
        ],
        "settings": {
            "dailyLimit": { "baseUnits": "1500000", "asset": "USDC" },
            "timeLock": "custom",
            "emergencyRecoveryEnabled": false,
            "contractInteractionEnabled": false
        },
        "metadata": {}
    }"#;

    let payload: VaultCreationPayload = serde_json::from_str(text).unwrap();
    assert!(!payload.members[0].permissions.voter);
    assert_eq!(payload.settings.daily_limit.to_string(), "1.5 USDC");
    assert_eq!(payload.settings.time_lock, TimeLock::Custom);
    assert_eq!(payload.metadata.name, None);
}

#[test]
fn test_evm_addresses() {
    let draft = TestDraftBuilder::new()
        .with_config(DraftConfig::evm())
        .with_self_address(EVM_SELF)
        .with_owner(EVM_A)
        .with_owner(EVM_B)
        .with_required(2)
        .build(MockCreationService::new())
        .unwrap();
    assert_eq!(draft.build().unwrap().members.len(), 3);

    let draft = TestDraftBuilder::new()
        .with_config(DraftConfig::evm())
        .with_self_address(EVM_SELF)
        .with_owner(UNPREFIXED_HEX)
        .build(MockCreationService::new())
        .unwrap();
    assert_draft_err!(
        draft.build(),
        DraftError::Build(BuildError::InvalidAddress { reason, .. }) if reason.contains("0x")
    );
}

#[test]
fn test_short_base58_rejected() {
    let draft =
        TestDraftBuilder::new().with_owner(SHORT_BASE58).build(MockCreationService::new()).unwrap();
    assert_draft_err!(
        draft.build(),
        DraftError::Build(BuildError::InvalidAddress { reason, .. }) if reason.contains("32 bytes")
    );
}

#[test]
fn test_any_format_accepts_free_text() {
    let draft = TestDraftBuilder::new()
        .with_config(DraftConfig::new().with_address_format(AddressFormat::Any))
        .with_owner("alice.sol")
        .build(MockCreationService::new())
        .unwrap();
    assert_eq!(draft.build().unwrap().members[1].address, "alice.sol");
}

#[test]
fn test_owner_limit_applies_to_submitted_members() {
    let mut builder = TestDraftBuilder::new().with_config(DraftConfig::new().with_max_owners(3));
    for owner in solana_owners() {
        builder = builder.with_owner(owner);
    }
    let draft = builder.build(MockCreationService::new()).unwrap();
    assert_draft_err!(
        draft.build(),
        DraftError::Build(BuildError::TooManyOwners { count: 5, max: 3 })
    );

    // Blank owners do not count
    let draft = TestDraftBuilder::new()
        .with_config(DraftConfig::new().with_max_owners(2))
        .with_owner(SOLANA_A)
        .with_blank_owner()
        .with_blank_owner()
        .build(MockCreationService::new())
        .unwrap();
    assert_eq!(draft.build().unwrap().members.len(), 2);
}

#[test]
fn test_threshold_above_filled_members_rejected() {
    let draft = TestDraftBuilder::new()
        .with_owner(SOLANA_A)
        .with_blank_owner()
        .with_required(3)
        .build(MockCreationService::new())
        .unwrap();
    assert_eq!(draft.required_signatures(), 3);
    assert_draft_err!(
        draft.build(),
        DraftError::Build(BuildError::ThresholdOutOfRange { threshold: 3, members: 2 })
    );
}
