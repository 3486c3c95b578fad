multiversx_sc::imports!();

use crate::types::Role;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Locks ──

    #[event("locked")]
    fn locked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] fingerprint: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("unlocked")]
    fn unlocked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] fingerprint: &ManagedBuffer,
        amount: &BigUint,
    );

    // ── Stakes and votes ──

    #[event("staked")]
    fn staked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("unstaked")]
    fn unstaked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("addedVotes")]
    fn added_votes_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("removedVotes")]
    fn removed_votes_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    // ── Vaults and withdrawals ──

    #[event("vaultsOpened")]
    fn vaults_opened_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("withdrawn")]
    fn withdrawn_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("emergencyWithdrawal")]
    fn emergency_withdrawal_event(&self, #[indexed] admin: &ManagedAddress, amount: &BigUint);

    // ── Rewards and gas ──

    #[event("gasBudgetUpdated")]
    fn gas_budget_updated_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] received: &BigUint,
        gas_budget: &BigUint,
    );

    #[event("rewarded")]
    fn rewarded_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] staking_amount: &BigUint,
        #[indexed] is_stake: bool,
        token_amount: &BigUint,
    );

    // ── Governance of the contract itself ──

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("paused")]
    fn paused_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("versionChanged")]
    fn version_changed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_version: u64,
        new_version: u64,
    );

    // ── Parameters ──

    #[event("lockSizeUpdated")]
    fn lock_size_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: &BigUint,
        new_value: &BigUint,
    );

    #[event("minStakeSizeUpdated")]
    fn min_stake_size_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: &BigUint,
        new_value: &BigUint,
    );

    #[event("defaultRedeemCostUpdated")]
    fn default_redeem_cost_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: &BigUint,
        new_value: &BigUint,
    );

    #[event("lockDurationUpdated")]
    fn lock_duration_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: u64,
        new_value: u64,
    );

    #[event("stakeDurationUpdated")]
    fn stake_duration_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: u64,
        new_value: u64,
    );

    #[event("governanceDurationUpdated")]
    fn governance_duration_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_value: u64,
        new_value: u64,
    );

    #[event("controllerAddressUpdated")]
    fn controller_address_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_address: &ManagedAddress,
        new_address: &ManagedAddress,
    );

    #[event("rewardsPoolAddressUpdated")]
    fn rewards_pool_address_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] old_address: &ManagedAddress,
        new_address: &ManagedAddress,
    );
}
