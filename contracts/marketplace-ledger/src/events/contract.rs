use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

// --- CONTRACT_UPDATE ---

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_gas_config_updated(owner_id: &AccountId, config: &crate::GasConfig) {
    EventBuilder::new(CONTRACT, "gas_config_updated", owner_id)
        .field("registry_view_tgas", config.registry_view_tgas.to_string())
        .field("registry_transfer_tgas", config.registry_transfer_tgas.to_string())
        .field("callback_tgas", config.callback_tgas.to_string())
        .emit();
}
