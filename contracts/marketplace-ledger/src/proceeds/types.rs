use near_sdk::json_types::U128;
use near_sdk::near;

/// Per-seller escrow. `pending <= balance` always holds; `pending` is the part
/// credited by purchases whose registry transfer has not resolved.
#[near(serializers = [borsh])]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProceedsBalance {
    pub balance: u128,
    pub pending: u128,
}

impl ProceedsBalance {
    pub fn withdrawable(&self) -> u128 {
        self.balance.saturating_sub(self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0 && self.pending == 0
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProceedsView {
    pub balance: U128,
    pub pending: U128,
    pub withdrawable: U128,
}

impl From<&ProceedsBalance> for ProceedsView {
    fn from(entry: &ProceedsBalance) -> Self {
        Self {
            balance: U128(entry.balance),
            pending: U128(entry.pending),
            withdrawable: U128(entry.withdrawable()),
        }
    }
}
