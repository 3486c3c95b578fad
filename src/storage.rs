multiversx_sc::imports!();

use crate::types::VaultEntry;

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Collaborators ──

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getControllerAddress)]
    #[storage_mapper("controllerAddress")]
    fn controller_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewardsPoolAddress)]
    #[storage_mapper("rewardsPoolAddress")]
    fn rewards_pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Account ledger ──

    #[view(getAvailable)]
    #[storage_mapper("available")]
    fn available(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getGasBudget)]
    #[storage_mapper("gasBudget")]
    fn gas_budget(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Votes bought with `addVotes`. `votesOf` hides them while the voter
    /// flag is clear.
    #[storage_mapper("directVotes")]
    fn direct_votes(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Sum of the account's stakes, counted from `becomeVoter` on
    #[storage_mapper("stakeVotes")]
    fn stake_votes(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(isVoter)]
    #[storage_mapper("isVoter")]
    fn is_voter(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Locks and stakes ──

    #[view(getLock)]
    #[storage_mapper("locks")]
    fn locks(
        &self,
        owner: &ManagedAddress,
        fingerprint: &ManagedBuffer,
    ) -> SingleValueMapper<BigUint>;

    #[view(getStake)]
    #[storage_mapper("stakes")]
    fn stakes(&self, owner: &ManagedAddress, delegate: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Delegates with a non-zero stake from `owner`
    #[storage_mapper("stakeDelegates")]
    fn stake_delegates(&self, owner: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    // ── Vault queues ──

    #[storage_mapper("vaults")]
    fn vaults(&self, owner: &ManagedAddress) -> QueueMapper<VaultEntry<Self::Api>>;

    // ── Version guard ──

    #[view(getVersion)]
    #[storage_mapper("version")]
    fn version(&self) -> SingleValueMapper<u64>;
}
