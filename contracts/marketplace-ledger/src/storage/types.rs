use near_sdk::json_types::U128;
use near_sdk::near;

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    near_sdk::env::storage_byte_cost().as_yoctonear()
}

/// Prepaid storage of one account. `used_bytes * byte cost` of `balance` is
/// reserved by live listings and cannot be withdrawn.
#[near(serializers = [borsh])]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageAccount {
    pub balance: u128,
    pub used_bytes: u64,
}

impl StorageAccount {
    pub fn reserved(&self) -> u128 {
        (self.used_bytes as u128) * storage_byte_cost()
    }

    pub fn available(&self) -> u128 {
        self.balance.saturating_sub(self.reserved())
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageBalanceView {
    pub total: U128,
    pub used_bytes: u64,
    pub available: U128,
}

impl From<&StorageAccount> for StorageBalanceView {
    fn from(account: &StorageAccount) -> Self {
        Self {
            total: U128(account.balance),
            used_bytes: account.used_bytes,
            available: U128(account.available()),
        }
    }
}
