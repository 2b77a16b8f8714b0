use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

#[test]
fn events_use_nep297_envelope() {
    testing_env!(context(seller()).build());
    events::emit_item_listed(&seller(), &nft(), TOKEN, U128(42));

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("EVENT_JSON:"));

    let events = events();
    let event = &events[0];
    assert_eq!(event["standard"], "marketplace_ledger");
    assert_eq!(event["version"], "1.0.0");
    assert_eq!(event["event"], "LISTING_UPDATE");
    assert_eq!(event["data"].as_array().unwrap().len(), 1);
    assert_eq!(event["data"][0]["author"], seller().as_str());
    assert_eq!(event["data"][0]["price"], "42");
}

#[test]
fn item_canceled_fields() {
    testing_env!(context(seller()).build());
    events::emit_item_canceled(&seller(), &nft(), TOKEN);

    let events = events();
    let data = &events[0]["data"][0];
    assert_eq!(data["operation"], "item_canceled");
    assert_eq!(data["collection_id"], "nft.near");
    assert_eq!(data["token_id"], TOKEN);
    assert!(data.get("price").is_none());
}

#[test]
fn proceeds_events_use_own_type() {
    testing_env!(context(seller()).build());
    events::emit_proceeds_withdrawn(&seller(), u128::MAX);
    events::emit_withdraw_failed(&seller(), 5, "TransferFailed: nope".into());

    let events = events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "PROCEEDS_UPDATE");
    assert_eq!(events[0]["data"][0]["amount"], u128::MAX.to_string());
    assert_eq!(events[1]["data"][0]["operation"], "withdraw_failed");
    assert_eq!(events[1]["data"][0]["reason"], "TransferFailed: nope");
}

#[test]
fn storage_events_use_own_type() {
    testing_env!(context(seller()).build());
    events::emit_storage_deposit(&seller(), 10, 30);
    events::emit_storage_withdraw(&seller(), 20, 10);

    let events = events();
    assert_eq!(events[0]["event"], "STORAGE_UPDATE");
    assert_eq!(events[0]["data"][0]["operation"], "storage_deposit");
    assert_eq!(events[0]["data"][0]["new_balance"], "30");
    assert_eq!(events[1]["data"][0]["amount"], "20");
    assert_eq!(events[1]["data"][0]["account_id"], seller().as_str());
}

#[test]
fn contract_events_use_own_type() {
    testing_env!(context(owner()).build());
    events::emit_owner_transferred(&owner(), &buyer());
    events::emit_gas_config_updated(&owner(), &GasConfig::default());

    let events = events();
    assert_eq!(events[0]["event"], "CONTRACT_UPDATE");
    assert_eq!(events[0]["data"][0]["new_owner"], buyer().as_str());
    assert_eq!(events[1]["data"][0]["callback_tgas"], "30");
}

#[test]
fn rejected_transition_emits_nothing() {
    let mut contract = new_contract();
    callback_env(vec![token_result(&seller(), &[])]);

    assert!(
        contract
            .on_listing_checked(nft(), TOKEN.to_string(), U128(1), seller())
            .is_err()
    );
    assert!(get_logs().is_empty());
}
