//! Minimal NEP-171 Mock NFT for Integration Testing
//!
//! Implements only what the marketplace ledger talks to:
//! - nft_token (owner + NEP-178 approvals)
//! - nft_transfer (owner or approved account, approval id checked)
//! - nft_approve / nft_revoke / nft_is_approved
//! - nft_mint (test helper)

use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, NearToken, PanicOnDefault};
use std::collections::HashMap;

#[near(serializers = [borsh])]
#[derive(Clone)]
pub struct TokenRecord {
    owner_id: AccountId,
    approvals: HashMap<AccountId, u64>,
    next_approval_id: u64,
}

#[near(serializers = [json])]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockNFT {
    tokens: LookupMap<String, TokenRecord>,
    /// Test helper: if set, the next nft_transfer will fail
    fail_next_transfer: bool,
}

fn assert_one_yocto() {
    assert_eq!(
        env::attached_deposit(),
        NearToken::from_yoctonear(1),
        "Requires 1 yoctoNEAR"
    );
}

#[near]
impl MockNFT {
    #[init]
    pub fn new() -> Self {
        Self {
            tokens: LookupMap::new(b"t"),
            fail_next_transfer: false,
        }
    }

    // =========================================================================
    // NEP-171 Core
    // =========================================================================

    pub fn nft_token(&self, token_id: String) -> Option<Token> {
        self.tokens.get(&token_id).map(|record| Token {
            token_id: token_id.clone(),
            owner_id: record.owner_id.clone(),
            approved_account_ids: record.approvals.clone(),
        })
    }

    #[payable]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        assert_one_yocto();

        // Test helper: fail if flag is set
        if self.fail_next_transfer {
            self.fail_next_transfer = false;
            env::panic_str("MockNFT: Simulated transfer failure");
        }

        let sender_id = env::predecessor_account_id();
        let mut record = self
            .tokens
            .get(&token_id)
            .cloned()
            .unwrap_or_else(|| env::panic_str("Token not found"));

        if sender_id != record.owner_id {
            let granted = record
                .approvals
                .get(&sender_id)
                .unwrap_or_else(|| env::panic_str("Sender not approved"));
            if let Some(expected) = approval_id {
                assert_eq!(*granted, expected, "Approval id mismatch");
            }
        }
        assert_ne!(
            record.owner_id, receiver_id,
            "The token owner and the receiver should be different"
        );

        if let Some(memo) = memo {
            env::log_str(&format!("Memo: {}", memo));
        }

        record.owner_id = receiver_id;
        record.approvals.clear();
        self.tokens.insert(token_id, record);
    }

    // =========================================================================
    // NEP-178 Approvals (no nft_on_approve callback)
    // =========================================================================

    #[payable]
    pub fn nft_approve(&mut self, token_id: String, account_id: AccountId, msg: Option<String>) {
        let _ = msg;
        let mut record = self.owned_record(&token_id);
        record.next_approval_id += 1;
        let approval_id = record.next_approval_id;
        record.approvals.insert(account_id, approval_id);
        self.tokens.insert(token_id, record);
    }

    #[payable]
    pub fn nft_revoke(&mut self, token_id: String, account_id: AccountId) {
        assert_one_yocto();
        let mut record = self.owned_record(&token_id);
        record.approvals.remove(&account_id);
        self.tokens.insert(token_id, record);
    }

    pub fn nft_is_approved(
        &self,
        token_id: String,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let Some(record) = self.tokens.get(&token_id) else {
            return false;
        };
        match (record.approvals.get(&approved_account_id), approval_id) {
            (Some(granted), Some(expected)) => *granted == expected,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    // =========================================================================
    // Test Helpers (not in real NFT)
    // =========================================================================

    /// Mint a token to `receiver_id` (for testing only)
    pub fn nft_mint(&mut self, token_id: String, receiver_id: AccountId) {
        assert!(!self.tokens.contains_key(&token_id), "Token already exists");
        self.tokens.insert(
            token_id,
            TokenRecord {
                owner_id: receiver_id,
                approvals: HashMap::new(),
                next_approval_id: 0,
            },
        );
    }

    /// Set flag to fail the next nft_transfer call (for testing callbacks)
    pub fn set_fail_next_transfer(&mut self, should_fail: bool) {
        self.fail_next_transfer = should_fail;
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn owned_record(&self, token_id: &str) -> TokenRecord {
        let record = self
            .tokens
            .get(token_id)
            .cloned()
            .unwrap_or_else(|| env::panic_str("Token not found"));
        assert_eq!(
            record.owner_id,
            env::predecessor_account_id(),
            "Predecessor must be the token owner"
        );
        record
    }
}
