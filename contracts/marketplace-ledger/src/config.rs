//! Gas budgets for the registry calls and their callbacks.

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasConfig {
    /// `nft_token` reads issued before every owner-gated transition.
    pub registry_view_tgas: u64,
    /// `nft_transfer` issued by `buy_item`.
    pub registry_transfer_tgas: u64,
    /// Each `on_*` callback, including purchase rollback and payout resolution.
    pub callback_tgas: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            registry_view_tgas: DEFAULT_REGISTRY_VIEW_GAS,
            registry_transfer_tgas: DEFAULT_REGISTRY_TRANSFER_GAS,
            callback_tgas: DEFAULT_CALLBACK_GAS,
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct GasConfigUpdate {
    #[serde(default)]
    pub registry_view_tgas: Option<u64>,
    #[serde(default)]
    pub registry_transfer_tgas: Option<u64>,
    #[serde(default)]
    pub callback_tgas: Option<u64>,
}

fn check_tgas(name: &str, tgas: u64) -> Result<(), MarketplaceError> {
    if tgas == 0 || tgas > MAX_TGAS {
        return Err(MarketplaceError::InvalidInput(format!(
            "{name} must be 1..={MAX_TGAS}"
        )));
    }
    Ok(())
}

impl GasConfig {
    pub fn validate(&self) -> Result<(), MarketplaceError> {
        check_tgas("registry_view_tgas", self.registry_view_tgas)?;
        check_tgas("registry_transfer_tgas", self.registry_transfer_tgas)?;
        check_tgas("callback_tgas", self.callback_tgas)?;
        // A purchase attaches transfer + callback gas to one call chain.
        if self.registry_transfer_tgas + self.callback_tgas > MAX_TGAS {
            return Err(MarketplaceError::InvalidInput(format!(
                "registry_transfer_tgas + callback_tgas cannot exceed {MAX_TGAS}"
            )));
        }
        Ok(())
    }

    /// Returns the patched config without touching `self`; callers store it only after validation.
    pub fn patched(&self, patch: &GasConfigUpdate) -> GasConfig {
        GasConfig {
            registry_view_tgas: patch.registry_view_tgas.unwrap_or(self.registry_view_tgas),
            registry_transfer_tgas: patch
                .registry_transfer_tgas
                .unwrap_or(self.registry_transfer_tgas),
            callback_tgas: patch.callback_tgas.unwrap_or(self.callback_tgas),
        }
    }

    pub(crate) fn view_gas(&self) -> Gas {
        Gas::from_tgas(self.registry_view_tgas)
    }

    pub(crate) fn transfer_gas(&self) -> Gas {
        Gas::from_tgas(self.registry_transfer_tgas)
    }

    pub(crate) fn callback_gas(&self) -> Gas {
        Gas::from_tgas(self.callback_tgas)
    }
}
