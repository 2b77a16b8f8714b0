// =============================================================================
// Listing Lifecycle Integration Tests
// =============================================================================
// list_item / update_listing / cancel_listing against the mock registry.

use anyhow::Result;

use super::helpers::*;

#[tokio::test]
async fn test_list_item_happy_path() -> Result<()> {
    let env = setup().await?;
    approve(&env.nft, &env.seller, &env.ledger).await?;

    let result = list_item(&env.seller, &env.ledger, &env.nft, 100).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    assert_eq!(event_operations(&result), vec!["item_listed"]);

    assert_eq!(
        get_listing(&env.ledger, &env.nft).await?,
        ListingState::Listed {
            price: "100".into(),
            seller_id: env.seller.id().to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_list_without_approval_fails() -> Result<()> {
    let env = setup().await?;

    let result = list_item(&env.seller, &env.ledger, &env.nft, 100).await?;
    assert!(failed_with(&result, "NotApprovedForMarketplace"));
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);
    Ok(())
}

#[tokio::test]
async fn test_list_by_non_owner_fails() -> Result<()> {
    let env = setup().await?;
    approve(&env.nft, &env.seller, &env.ledger).await?;

    let result = list_item(&env.buyer, &env.ledger, &env.nft, 100).await?;
    assert!(failed_with(&result, "NotOwner"));
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);
    Ok(())
}

#[tokio::test]
async fn test_list_zero_price_fails() -> Result<()> {
    let env = setup().await?;
    approve(&env.nft, &env.seller, &env.ledger).await?;

    let result = list_item(&env.seller, &env.ledger, &env.nft, 0).await?;
    assert!(failed_with(&result, "PriceMustBeAboveZero"));
    Ok(())
}

#[tokio::test]
async fn test_list_twice_fails() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, 100).await?;

    let result = list_item(&env.seller, &env.ledger, &env.nft, 200).await?;
    assert!(failed_with(&result, "AlreadyListed"));
    assert_eq!(
        get_listing(&env.ledger, &env.nft).await?,
        ListingState::Listed {
            price: "100".into(),
            seller_id: env.seller.id().to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_list_twice_by_other_account_fails() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, 100).await?;

    let result = list_item(&env.buyer, &env.ledger, &env.nft, 5).await?;
    assert!(failed_with(&result, "AlreadyListed"));
    assert_eq!(
        get_listing(&env.ledger, &env.nft).await?,
        ListingState::Listed {
            price: "100".into(),
            seller_id: env.seller.id().to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_list_without_storage_deposit_fails() -> Result<()> {
    let env = setup().await?;
    let other = env.worker.dev_create_account().await?;
    nft_transfer(&env.nft, &env.seller, &other).await?;
    approve(&env.nft, &other, &env.ledger).await?;

    let result = list_item(&other, &env.ledger, &env.nft, 100).await?;
    assert!(failed_with(&result, "InsufficientStorage"));
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);

    storage_deposit(&other, &env.ledger, STORAGE_DEPOSIT)
        .await?
        .into_result()?;
    let result = list_item(&other, &env.ledger, &env.nft, 100).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    Ok(())
}

#[tokio::test]
async fn test_listing_storage_charged_and_released() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, 100).await?;

    let charged = storage_balance_of(&env.ledger, &env.seller).await?;
    assert!(charged.used_bytes > 0);

    let result = storage_withdraw(&env.seller, &env.ledger).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    let after_withdraw = storage_balance_of(&env.ledger, &env.seller).await?;
    assert_eq!(after_withdraw.available, "0");
    assert_eq!(after_withdraw.used_bytes, charged.used_bytes);

    cancel_listing(&env.seller, &env.ledger, &env.nft)
        .await?
        .into_result()?;
    let released = storage_balance_of(&env.ledger, &env.seller).await?;
    assert_eq!(released.used_bytes, 0);
    assert_eq!(released.available, released.total);
    Ok(())
}

#[tokio::test]
async fn test_update_listing() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, 100).await?;

    let result = update_listing(&env.seller, &env.ledger, &env.nft, 250).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    assert_eq!(event_operations(&result), vec!["item_listed"]);
    assert_eq!(
        get_listing(&env.ledger, &env.nft).await?,
        ListingState::Listed {
            price: "250".into(),
            seller_id: env.seller.id().to_string(),
        }
    );

    let result = update_listing(&env.seller, &env.ledger, &env.nft, 0).await?;
    assert!(failed_with(&result, "PriceMustBeAboveZero"));
    Ok(())
}

#[tokio::test]
async fn test_update_absent_listing_fails() -> Result<()> {
    let env = setup().await?;
    approve(&env.nft, &env.seller, &env.ledger).await?;

    let result = update_listing(&env.seller, &env.ledger, &env.nft, 100).await?;
    assert!(failed_with(&result, "NotListed"));
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);
    Ok(())
}

#[tokio::test]
async fn test_cancel_listing() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, 100).await?;

    let result = cancel_listing(&env.buyer, &env.ledger, &env.nft).await?;
    assert!(failed_with(&result, "NotOwner"));

    let result = cancel_listing(&env.seller, &env.ledger, &env.nft).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    assert_eq!(event_operations(&result), vec!["item_canceled"]);
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);

    let result = cancel_listing(&env.seller, &env.ledger, &env.nft).await?;
    assert!(failed_with(&result, "NotListed"));
    Ok(())
}

#[tokio::test]
async fn test_missing_yocto_rejected() -> Result<()> {
    let env = setup().await?;
    approve(&env.nft, &env.seller, &env.ledger).await?;

    let result = env
        .seller
        .call(env.ledger.id(), "list_item")
        .args_json(serde_json::json!({
            "collection_id": env.nft.id(),
            "token_id": TOKEN_ID,
            "price": "100",
        }))
        .gas(CALL_GAS)
        .transact()
        .await?;
    assert!(failed_with(&result, "1 yoctoNEAR"));
    Ok(())
}
