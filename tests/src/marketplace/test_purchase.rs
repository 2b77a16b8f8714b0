// =============================================================================
// Purchase Integration Tests
// =============================================================================
// buy_item: price checks, NFT delivery, seller credit.

use anyhow::Result;
use near_workspaces::types::NearToken;

use super::helpers::*;

const PRICE: NearToken = NearToken::from_near(1);

#[tokio::test]
async fn test_buy_item_transfers_token_and_credits_seller() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, PRICE.as_yoctonear()).await?;

    let result = buy_item(&env.buyer, &env.ledger, &env.nft, PRICE).await?;
    assert!(result.is_success(), "{:?}", result.failures());
    assert!(result.clone().json::<bool>()?);
    assert_eq!(event_operations(&result), vec!["item_bought"]);

    assert_eq!(token_owner(&env.nft).await?, env.buyer.id().to_string());
    assert_eq!(get_listing(&env.ledger, &env.nft).await?, ListingState::Absent);
    assert_eq!(
        get_proceeds(&env.ledger, &env.seller).await?,
        PRICE.as_yoctonear()
    );
    Ok(())
}

#[tokio::test]
async fn test_overpayment_is_credited_not_refunded() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, PRICE.as_yoctonear()).await?;

    let payment = NearToken::from_millinear(1_500);
    let result = buy_item(&env.buyer, &env.ledger, &env.nft, payment).await?;
    assert!(result.json::<bool>()?);

    assert_eq!(
        get_proceeds(&env.ledger, &env.seller).await?,
        payment.as_yoctonear()
    );
    Ok(())
}

#[tokio::test]
async fn test_underpayment_rejected() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, PRICE.as_yoctonear()).await?;

    let result = buy_item(&env.buyer, &env.ledger, &env.nft, NearToken::from_millinear(999)).await?;
    assert!(failed_with(&result, "PriceNotMet"));
    assert!(failed_with(&result, &PRICE.as_yoctonear().to_string()));

    assert_eq!(token_owner(&env.nft).await?, env.seller.id().to_string());
    assert_eq!(get_proceeds(&env.ledger, &env.seller).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_buy_unlisted_fails() -> Result<()> {
    let env = setup().await?;

    let result = buy_item(&env.buyer, &env.ledger, &env.nft, PRICE).await?;
    assert!(failed_with(&result, "NotListed"));
    Ok(())
}

#[tokio::test]
async fn test_buyer_can_relist_after_purchase() -> Result<()> {
    let env = setup().await?;
    approve_and_list(&env, PRICE.as_yoctonear()).await?;
    buy_item(&env.buyer, &env.ledger, &env.nft, PRICE)
        .await?
        .into_result()?;

    // The transfer cleared the seller's approval; the new owner approves again.
    approve(&env.nft, &env.buyer, &env.ledger).await?;
    let result = list_item(&env.buyer, &env.ledger, &env.nft, 2 * PRICE.as_yoctonear()).await?;
    assert!(result.is_success(), "{:?}", result.failures());

    let result = cancel_listing(&env.seller, &env.ledger, &env.nft).await?;
    assert!(failed_with(&result, "NotOwner"));
    Ok(())
}
