multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_GOVERNANCE_DURATION, ERR_INVALID_LOCK_DURATION, ERR_INVALID_STAKE_DURATION,
    ERR_ZERO_MIN_STAKE_SIZE,
};
use crate::types::Role;

/// Slack between block timestamps and wall-clock expectations: 1 hour
pub const TIMESTAMP_BUFFER: u64 = 3_600;

pub const ONE_DAY: u64 = 86_400;

/// Shortest accepted lock, stake or governance duration
pub const MINIMUM_DURATION: u64 = TIMESTAMP_BUFFER + ONE_DAY;

#[multiversx_sc::module]
pub trait ParamsModule:
    crate::storage::StorageModule + crate::access::AccessModule + crate::events::EventsModule
{
    // ========================================================
    // Controller-tunable parameters
    // ========================================================

    #[endpoint(setLockSize)]
    fn set_lock_size(&self, value: BigUint) {
        self.require_role(Role::Controller);
        let old_value = self.lock_size().replace(&value);
        self.lock_size_updated_event(&self.blockchain().get_caller(), &old_value, &value);
    }

    #[endpoint(setMinStakeSize)]
    fn set_min_stake_size(&self, value: BigUint) {
        self.require_role(Role::Controller);
        require!(value > 0u64, ERR_ZERO_MIN_STAKE_SIZE);
        let old_value = self.min_stake_size().replace(&value);
        self.min_stake_size_updated_event(&self.blockchain().get_caller(), &old_value, &value);
    }

    #[endpoint(setDefaultRedeemCost)]
    fn set_default_redeem_cost(&self, value: BigUint) {
        self.require_role(Role::Controller);
        let old_value = self.default_redeem_cost().replace(&value);
        self.default_redeem_cost_updated_event(&self.blockchain().get_caller(), &old_value, &value);
    }

    #[endpoint(setLockDuration)]
    fn set_lock_duration(&self, value: u64) {
        self.require_role(Role::Controller);
        require!(is_valid_duration(value), ERR_INVALID_LOCK_DURATION);
        let old_value = self.lock_duration().replace(value);
        self.lock_duration_updated_event(&self.blockchain().get_caller(), old_value, value);
    }

    #[endpoint(setStakeDuration)]
    fn set_stake_duration(&self, value: u64) {
        self.require_role(Role::Controller);
        require!(is_valid_duration(value), ERR_INVALID_STAKE_DURATION);
        let old_value = self.stake_duration().replace(value);
        self.stake_duration_updated_event(&self.blockchain().get_caller(), old_value, value);
    }

    #[endpoint(setGovernanceDuration)]
    fn set_governance_duration(&self, value: u64) {
        self.require_role(Role::Controller);
        require!(is_valid_duration(value), ERR_INVALID_GOVERNANCE_DURATION);
        let old_value = self.governance_duration().replace(value);
        self.governance_duration_updated_event(&self.blockchain().get_caller(), old_value, value);
    }

    // ========================================================
    // Admin-managed addresses
    // ========================================================

    #[endpoint(setControllerAddress)]
    fn set_controller_address(&self, address: ManagedAddress) {
        self.require_role(Role::Admin);
        let old_address = self.controller_address().replace(&address);
        self.controller_address_updated_event(
            &self.blockchain().get_caller(),
            &old_address,
            &address,
        );
    }

    #[endpoint(setRewardsPoolAddress)]
    fn set_rewards_pool_address(&self, address: ManagedAddress) {
        self.require_role(Role::Admin);
        let old_address = self.rewards_pool_address().replace(&address);
        self.rewards_pool_address_updated_event(
            &self.blockchain().get_caller(),
            &old_address,
            &address,
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (lockSize, lockDuration, minStakeSize, stakeDuration,
    /// governanceDuration, defaultRedeemCost)
    #[view(getParameters)]
    fn get_parameters(&self) -> MultiValue6<BigUint, u64, BigUint, u64, u64, BigUint> {
        (
            self.lock_size().get(),
            self.lock_duration().get(),
            self.min_stake_size().get(),
            self.stake_duration().get(),
            self.governance_duration().get(),
            self.default_redeem_cost().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getLockSize)]
    #[storage_mapper("lockSize")]
    fn lock_size(&self) -> SingleValueMapper<BigUint>;

    #[view(getLockDuration)]
    #[storage_mapper("lockDuration")]
    fn lock_duration(&self) -> SingleValueMapper<u64>;

    #[view(getMinStakeSize)]
    #[storage_mapper("minStakeSize")]
    fn min_stake_size(&self) -> SingleValueMapper<BigUint>;

    #[view(getStakeDuration)]
    #[storage_mapper("stakeDuration")]
    fn stake_duration(&self) -> SingleValueMapper<u64>;

    #[view(getGovernanceDuration)]
    #[storage_mapper("governanceDuration")]
    fn governance_duration(&self) -> SingleValueMapper<u64>;

    #[view(getDefaultRedeemCost)]
    #[storage_mapper("defaultRedeemCost")]
    fn default_redeem_cost(&self) -> SingleValueMapper<BigUint>;
}

pub fn is_valid_duration(value: u64) -> bool {
    value >= MINIMUM_DURATION
}
