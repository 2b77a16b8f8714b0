use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(owner_id: AccountId, gas_config: Option<GasConfig>) -> Self {
        let gas_config = gas_config.unwrap_or_default();
        if let Err(e) = gas_config.validate() {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            gas_config,
            listings: LookupMap::new(StorageKey::Listings),
            proceeds: LookupMap::new(StorageKey::Proceeds),
            pending_purchases: LookupMap::new(StorageKey::PendingPurchases),
            storage_accounts: LookupMap::new(StorageKey::StorageAccounts),
        }
    }

    // --- Admin ---

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn set_owner(&mut self, new_owner_id: AccountId) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner_id == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner_id;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Owner only. Unset fields keep their current value; the merged config is
    /// validated as a whole before it is stored.
    #[payable]
    #[handle_result]
    pub fn update_gas_config(&mut self, update: GasConfigUpdate) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let patched = self.gas_config.patched(&update);
        patched.validate()?;
        self.gas_config = patched;
        events::emit_gas_config_updated(&self.owner_id, &self.gas_config);
        Ok(())
    }

    // --- Views ---

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_gas_config(&self) -> &GasConfig {
        &self.gas_config
    }
}
