//! Integration tests for mirror-node payload types.
//!
//! These tests verify that the typed views correctly deserialize full
//! mirror-node REST responses, and that validated models round-trip and
//! convert without altering any field.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hedera_kit::*;

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

// ============================================================================
// Account payloads
// ============================================================================

#[test]
fn test_account_payload_full_fields() {
    init();

    let payload = serde_json::json!({
        "account": "0.0.1234",
        "alias": "HIQQEXWKW53RKN4W6XXC4Q232SYNZ3SZANVZZSUME5B5PRGXL663UAQA",
        "auto_renew_period": 7776000,
        "balance": {
            "timestamp": "1586567700.453054000",
            "balance": 80_000_000_000u64,
            "tokens": [
                {"token_id": "0.0.200001", "balance": 8}
            ]
        },
        "created_timestamp": "1562591528.000123457",
        "decline_reward": false,
        "deleted": false,
        "ethereum_nonce": 10,
        "evm_address": "0xac384c53f03855fa1b3616052f8ba32c6c2a2fec",
        "expiry_timestamp": "1586567700.453054000",
        "key": {"_type": "ECDSA_SECP256K1", "key": format!("03{}", "ab".repeat(32))},
        "max_automatic_token_associations": 200,
        "memo": "entity memo",
        "pending_reward": 100,
        "receiver_sig_required": true,
        "staked_account_id": null,
        "staked_node_id": 3,
        "stake_period_start": "1655164800.000000000"
    });

    let info: AccountInfo = serde_json::from_value(payload).unwrap();
    assert_eq!(info.account, "0.0.1234".parse().unwrap());
    assert_eq!(info.balance.balance.as_tinybar(), 80_000_000_000);
    assert_eq!(info.balance.tokens[0].token_id, "0.0.200001".parse().unwrap());
    assert_eq!(info.key.as_ref().unwrap().key_type(), KeyType::EcdsaSecp256k1);
    assert_eq!(info.memo, "entity memo");

    let staking = info.staking_info();
    assert!(staking.is_staked_to_node());
    assert_eq!(staking.pending_reward, Hbar::tinybar(100));
}

#[test]
fn test_account_payload_rejects_malformed_id() {
    init();

    let payload = serde_json::json!({
        "account": "0.0.1234.5",
        "balance": {"timestamp": null, "balance": 0, "tokens": []},
        "memo": ""
    });
    assert!(serde_json::from_value::<AccountInfo>(payload).is_err());
}

// ============================================================================
// Token payloads
// ============================================================================

#[test]
fn test_token_payload_with_custom_fees() {
    init();

    let payload = serde_json::json!({
        "admin_key": {"_type": "ED25519", "key": "aa".repeat(32)},
        "auto_renew_account": "0.0.1234",
        "auto_renew_period": 7776000,
        "created_timestamp": "1586567700.453054000",
        "custom_fees": {
            "created_timestamp": "1586567700.453054000",
            "fixed_fees": [
                {
                    "all_collectors_are_exempt": false,
                    "amount": 10,
                    "collector_account_id": "0.0.789012",
                    "denominating_token_id": "0.0.123456"
                }
            ],
            "fractional_fees": [
                {
                    "all_collectors_are_exempt": false,
                    "amount": {"numerator": 1, "denominator": 10},
                    "collector_account_id": "0.0.789012",
                    "denominating_token_id": "0.0.123456",
                    "maximum": 100,
                    "minimum": 1,
                    "net_of_transfers": true
                }
            ],
            "royalty_fees": []
        },
        "decimals": "2",
        "deleted": false,
        "expiry_timestamp": 1234567890000000000i64,
        "fee_schedule_key": null,
        "freeze_default": false,
        "freeze_key": null,
        "initial_supply": "1000000",
        "kyc_key": null,
        "max_supply": "0",
        "memo": "",
        "modified_timestamp": "1586567700.453054000",
        "name": "Example Fungible",
        "pause_key": null,
        "pause_status": "NOT_APPLICABLE",
        "supply_key": null,
        "supply_type": "INFINITE",
        "symbol": "EXF",
        "token_id": "0.0.123456",
        "total_supply": "1000000",
        "treasury_account_id": "0.0.1234",
        "type": "FUNGIBLE_COMMON",
        "wipe_key": null
    });

    let token: TokenInfo = serde_json::from_value(payload).unwrap();
    assert!(token.is_fungible());
    assert_eq!(token.decimals, 2);
    assert_eq!(token.custom_fees.fixed_fees.len(), 1);
    assert_eq!(token.custom_fees.fractional_fees.len(), 1);

    // The deserialized fixed fee converts like a constructed one
    let builder = token.custom_fees.fixed_fees[0].to_custom_fixed_fee();
    assert_eq!(builder.amount, 10);
    assert_eq!(builder.collector_account_id, Some("0.0.789012".parse().unwrap()));

    let fractional = token.custom_fees.fractional_fees[0].to_custom_fractional_fee();
    assert_eq!(fractional.assessment_method, FeeAssessmentMethod::Exclusive);
    assert_eq!(fractional.maximum, Some(100));
}

#[test]
fn test_nft_payload() {
    init();

    let metadata = STANDARD.encode(b"ipfs://bafkreibwci24bt2xtqi23g35gfx63wj555u77lwl2t55ajbfjqomgefxce");
    let payload = serde_json::json!({
        "account_id": "0.0.1234",
        "created_timestamp": "1610682445.003266000",
        "delegating_spender": null,
        "deleted": false,
        "metadata": metadata,
        "modified_timestamp": "1610682445.003266001",
        "serial_number": 124,
        "spender": "0.0.5678",
        "token_id": "0.0.222222"
    });

    let nft: Nft = serde_json::from_value(payload).unwrap();
    assert_eq!(nft.serial_number.value(), 124);
    assert!(nft.metadata.starts_with(b"ipfs://"));
    assert_eq!(nft.spender, Some("0.0.5678".parse().unwrap()));
}

#[test]
fn test_token_relationship_payload() {
    init();

    let payload = serde_json::json!({
        "automatic_association": true,
        "balance": 5,
        "created_timestamp": "1586567700.453054000",
        "decimals": 2,
        "freeze_status": "UNFROZEN",
        "kyc_status": "GRANTED",
        "token_id": "0.0.27335"
    });
    let rel: TokenRelationship = serde_json::from_value(payload).unwrap();
    assert_eq!(rel.freeze_status, FreezeStatus::Unfrozen);
    assert_eq!(rel.kyc_status, KycStatus::Granted);
}

// ============================================================================
// Topic payloads
// ============================================================================

#[test]
fn test_topic_message_payload() {
    init();

    let payload = serde_json::json!({
        "chunk_info": {
            "initial_transaction_id": {
                "account_id": "0.0.1234",
                "nonce": 0,
                "scheduled": false,
                "transaction_valid_start": "1234567890.000000006"
            },
            "number": 1,
            "total": 2
        },
        "consensus_timestamp": "1234567890.000000007",
        "message": STANDARD.encode(b"chunked message"),
        "payer_account_id": "0.0.1234",
        "running_hash": STANDARD.encode(&[1u8, 2, 3]),
        "running_hash_version": 3,
        "sequence_number": 7,
        "topic_id": "0.0.2345"
    });

    let msg: TopicMessage = serde_json::from_value(payload).unwrap();
    assert_eq!(msg.message, b"chunked message");
    assert_eq!(msg.running_hash, vec![1, 2, 3]);
    let chunk = msg.chunk_info.unwrap();
    assert_eq!(chunk.number, 1);
    assert_eq!(chunk.total, 2);
    assert_eq!(
        chunk.initial_transaction_id.to_string(),
        "0.0.1234@1234567890.000000006"
    );
}

// ============================================================================
// Network payloads
// ============================================================================

#[test]
fn test_network_nodes_payload() {
    init();

    let payload = serde_json::json!({
        "nodes": [
            {
                "description": "",
                "file_id": "0.0.102",
                "max_stake": 50_000_000_000_000_000u64,
                "memo": "0.0.4",
                "min_stake": 1_000_000_000_000_000u64,
                "node_id": 1,
                "node_account_id": "0.0.4",
                "node_cert_hash": "0x01d1737538",
                "public_key": "0x4a5ad514",
                "reward_rate_start": 1000000,
                "service_endpoints": [
                    {"ip_address_v4": "13.124.142.126", "port": 50211, "domain_name": null},
                    {"ip_address_v4": null, "port": 50212, "domain_name": "node1.hedera.com"}
                ],
                "stake": 20_000_000_000_000_000u64,
                "stake_not_rewarded": 19_900_000_000_000_000u64,
                "stake_rewarded": 100_000_000_000_000u64,
                "staking_period": {"from": "1655164800.000000000", "to": "1655251200.000000000"},
                "timestamp": {"from": "1636052707.740848001", "to": null}
            }
        ]
    });

    #[derive(serde::Deserialize)]
    struct NodesPage {
        nodes: Vec<NetworkNode>,
    }

    let page: NodesPage = serde_json::from_value(payload).unwrap();
    assert_eq!(page.nodes.len(), 1);
    let node = &page.nodes[0];
    assert_eq!(node.service_endpoints.len(), 2);
    assert_eq!(
        node.service_endpoints[1].domain_name.as_deref(),
        Some("node1.hedera.com")
    );
    assert_eq!(node.stake, Some(Hbar::tinybar(20_000_000_000_000_000)));
}

#[test]
fn test_exchange_rate_payload() {
    init();

    let payload = serde_json::json!({
        "current_rate": {
            "cent_equivalent": 596987,
            "expiration_time": 1649689200,
            "hbar_equivalent": 30000
        },
        "next_rate": {
            "cent_equivalent": 594920,
            "expiration_time": 1649692800,
            "hbar_equivalent": 30000
        },
        "timestamp": "1649689200.123456789"
    });
    let rates: ExchangeRateInfo = serde_json::from_value(payload).unwrap();
    assert_eq!(rates.current_rate.hbar_equivalent, 30000);
    assert_eq!(rates.timestamp.unwrap().seconds(), "1649689200");
}

// ============================================================================
// End-to-end model scenarios
// ============================================================================

#[test]
fn test_fixed_fee_construct_and_convert() {
    init();

    let fee = FixedFee::new(
        10,
        Some("0.0.123456".parse().unwrap()),
        "0.0.789012".parse().unwrap(),
        false,
    )
    .unwrap();

    let builder = fee.to_custom_fixed_fee();
    assert_eq!(builder.amount, 10);
    assert_eq!(
        builder.collector_account_id,
        Some("0.0.789012".parse().unwrap())
    );
    assert_eq!(
        builder.denominating_token_id,
        Some("0.0.123456".parse().unwrap())
    );
    assert!(!builder.all_collectors_are_exempt);
}

#[test]
fn test_fractional_fee_zero_denominator_is_not_rejected() {
    init();

    // Known gap carried over from the wire format: division by zero is
    // not validated at this layer.
    let fee = FractionalFee::new(
        Fraction::new(1, 0),
        None,
        0,
        None,
        false,
        "0.0.789012".parse().unwrap(),
        false,
    )
    .unwrap();
    assert_eq!(fee.to_custom_fractional_fee().denominator, 0);
}

#[test]
fn test_did_service_bad_id_message() {
    init();

    let err = DidService::new(
        "did:hedera:testnet:abc#svc-1",
        ServiceType::LinkedDomains,
        "https://example.com",
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid service ID format");
}

#[test]
fn test_transaction_id_negative_nonce_message() {
    init();

    let err = TransactionId::new(
        "0.0.1234".parse().unwrap(),
        "1586567700.453054000".parse().unwrap(),
        -1,
        false,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid nonce: must be a non-negative integer"
    );
}

#[test]
fn test_models_round_trip_unchanged() {
    init();

    // Constructing from a validated model's own field values succeeds and
    // compares field-for-field equal: no transformation is ever applied.
    let fee = FractionalFee::new(
        Fraction::new(3, 200),
        Some("0.0.123456".parse().unwrap()),
        1,
        Some(500),
        true,
        "0.0.789012".parse().unwrap(),
        true,
    )
    .unwrap();
    let again = FractionalFee::new(
        fee.amount,
        fee.denominating_token_id,
        fee.minimum,
        fee.maximum,
        fee.net_of_transfers,
        fee.collector_account_id.unwrap(),
        fee.all_collectors_are_exempt,
    )
    .unwrap();
    assert_eq!(fee, again);

    let transfer = Transfer::new("0.0.1234".parse().unwrap(), 1_000_000, false).unwrap();
    let again = Transfer::new(transfer.account, transfer.amount, transfer.is_approval).unwrap();
    assert_eq!(transfer, again);
    assert_eq!(again.amount, 1_000_000);
}

#[test]
fn test_serde_round_trip_preserves_wire_shape() {
    init();

    let json = serde_json::json!({
        "all_collectors_are_exempt": false,
        "amount": 10,
        "collector_account_id": "0.0.789012",
        "denominating_token_id": "0.0.123456"
    });
    let fee: FixedFee = serde_json::from_value(json.clone()).unwrap();
    let back = serde_json::to_value(&fee).unwrap();
    assert_eq!(json, back);
}
