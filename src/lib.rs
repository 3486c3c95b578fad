#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod custody_ledger_proxy;
pub mod errors;
pub mod events;
pub mod params;
pub mod storage;
pub mod token_proxy;
pub mod types;
pub mod vault;

use errors::*;
use params::is_valid_duration;
use types::Role;

// ============================================================
// Constants
// ============================================================

/// Fingerprints are relay identifiers; longer keys are rejected
const MAX_FINGERPRINT_LENGTH: usize = 40;

/// Version stored at deploy time. Every upgrade must exceed the stored one.
const INITIAL_VERSION: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CustodyLedger:
    storage::StorageModule
    + events::EventsModule
    + access::AccessModule
    + params::ParamsModule
    + vault::VaultModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        token_address: ManagedAddress,
        controller_address: ManagedAddress,
        lock_size: BigUint,
        lock_duration: u64,
        min_stake_size: BigUint,
        stake_duration: u64,
        governance_duration: u64,
        rewards_pool_address: ManagedAddress,
        default_redeem_cost: BigUint,
    ) {
        require!(lock_size > 0u64, ERR_ZERO_LOCK_SIZE);
        require!(min_stake_size > 0u64, ERR_ZERO_MIN_STAKE_SIZE);
        require!(is_valid_duration(lock_duration), ERR_INVALID_LOCK_DURATION);
        require!(is_valid_duration(stake_duration), ERR_INVALID_STAKE_DURATION);
        require!(
            is_valid_duration(governance_duration),
            ERR_INVALID_GOVERNANCE_DURATION
        );

        self.token_address().set(&token_address);
        self.controller_address().set(&controller_address);
        self.rewards_pool_address().set(&rewards_pool_address);

        self.lock_size().set(&lock_size);
        self.lock_duration().set(lock_duration);
        self.min_stake_size().set(&min_stake_size);
        self.stake_duration().set(stake_duration);
        self.governance_duration().set(governance_duration);
        self.default_redeem_cost().set(&default_redeem_cost);

        let deployer = self.blockchain().get_caller();
        self.role_members(Role::Admin).insert(deployer.clone());
        self.role_members(Role::Pauser).insert(deployer.clone());
        self.role_members(Role::Upgrader).insert(deployer);
        self.role_members(Role::Controller).insert(controller_address);

        self.paused().set(false);
        self.version().set(INITIAL_VERSION);
    }

    /// Swaps the code in place. Storage is left as it is; only the
    /// version guard moves forward.
    #[upgrade]
    fn upgrade(&self, new_version: u64) {
        self.require_role(Role::Upgrader);

        let current_version = self.version().get();
        require!(new_version > current_version, ERR_VERSION_NOT_INCREASING);
        self.version().set(new_version);

        self.version_changed_event(
            &self.blockchain().get_caller(),
            current_version,
            new_version,
        );
    }

    // ========================================================
    // ENDPOINT: depositGas
    // Native currency is never kept: it becomes gas budget for
    // the sender and is forwarded to the controller.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(depositGas)]
    fn deposit_gas(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let gas_budget = self.gas_budget(&caller).update(|gas| {
            *gas += &payment;
            gas.clone()
        });
        self.gas_budget_updated_event(&caller, &payment, &gas_budget);

        if payment > 0u64 {
            let controller = self.controller_address().get();
            self.send().direct_egld(&controller, &payment);
        }
    }

    // ========================================================
    // ENDPOINT: lock / unlock
    // One lock of LOCK_SIZE per (owner, fingerprint)
    // ========================================================

    #[endpoint(lock)]
    fn lock(&self, fingerprint: ManagedBuffer) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        require!(!fingerprint.is_empty(), ERR_FINGERPRINT_EMPTY);
        require!(
            fingerprint.len() <= MAX_FINGERPRINT_LENGTH,
            ERR_FINGERPRINT_TOO_LONG
        );
        require!(
            self.locks(&caller, &fingerprint).is_empty(),
            ERR_DUPLICATE_LOCK
        );

        let lock_size = self.lock_size().get();
        let shortfall = self.draw_from_available(&caller, &lock_size);
        self.locks(&caller, &fingerprint).set(&lock_size);
        self.locked_event(&caller, &fingerprint, &lock_size);

        self.pull_tokens(&caller, &shortfall);
    }

    #[endpoint(unlock)]
    fn unlock(&self, fingerprint: ManagedBuffer) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let amount = self.locks(&caller, &fingerprint).get();
        require!(amount > 0u64, ERR_NO_SUCH_LOCK);

        self.locks(&caller, &fingerprint).clear();
        self.enqueue_release(&caller, &amount, self.lock_duration().get());
        self.unlocked_event(&caller, &fingerprint, &amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Only `available` ever leaves the contract.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let available = self.available(&caller).get();
        require!(
            available >= amount,
            "Insufficient available balance: have {}, need {}",
            available,
            amount
        );
        self.available(&caller).set(&available - &amount);
        self.withdrawn_event(&caller, &amount);

        self.send_tokens(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: stake / unstake
    // ========================================================

    #[endpoint(stake)]
    fn stake(&self, delegate: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(amount >= self.min_stake_size().get(), ERR_STAKE_TOO_SMALL);

        let shortfall = self.draw_from_available(&caller, &amount);
        self.add_stake(&caller, &delegate, &amount);

        self.pull_tokens(&caller, &shortfall);
    }

    #[endpoint(unstake)]
    fn unstake(&self, delegate: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let staked = self.stakes(&caller, &delegate).get();
        require!(staked > 0u64, ERR_NO_SUCH_STAKE);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            staked >= amount,
            "Insufficient stake: have {}, need {}",
            staked,
            amount
        );

        let remaining = &staked - &amount;
        if remaining == 0u64 {
            self.stakes(&caller, &delegate).clear();
            self.stake_delegates(&caller).swap_remove(&delegate);
        } else {
            self.stakes(&caller, &delegate).set(&remaining);
        }

        let is_voter = self.is_voter(&caller).get();
        let duration = if is_voter {
            self.governance_duration().get()
        } else {
            self.stake_duration().get()
        };
        self.enqueue_release(&caller, &amount, duration);

        if is_voter {
            // stake votes track the voter's stakes exactly
            self.stake_votes(&caller).update(|votes| *votes -= &amount);
            self.removed_votes_event(&caller, &amount);
        }

        self.unstaked_event(&caller, &delegate, &amount);
    }

    // ========================================================
    // ENDPOINT: becomeVoter / addVotes / removeVotes
    // ========================================================

    /// Sticky: the flag is never cleared. Existing stakes count
    /// towards votes from here on.
    #[endpoint(becomeVoter)]
    fn become_voter(&self) {
        let caller = self.blockchain().get_caller();
        require!(!self.is_voter(&caller).get(), ERR_ALREADY_VOTER);
        self.is_voter(&caller).set(true);

        let mut staked_total = BigUint::zero();
        for delegate in self.stake_delegates(&caller).iter() {
            staked_total += self.stakes(&caller, &delegate).get();
        }

        if staked_total > 0u64 {
            self.stake_votes(&caller).update(|votes| *votes += &staked_total);
            self.added_votes_event(&caller, &staked_total);
        }
    }

    #[endpoint(addVotes)]
    fn add_votes(&self, amount: BigUint) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let shortfall = self.draw_from_available(&caller, &amount);
        self.direct_votes(&caller).update(|votes| *votes += &amount);
        self.added_votes_event(&caller, &amount);

        self.pull_tokens(&caller, &shortfall);
    }

    #[endpoint(removeVotes)]
    fn remove_votes(&self, amount: BigUint) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        // only directly bought votes; stake-backed ones leave through unstake
        let votes = self.direct_votes(&caller).get();
        require!(
            votes >= amount,
            "Insufficient votes: have {}, need {}",
            votes,
            amount
        );
        self.direct_votes(&caller).set(&votes - &amount);

        self.enqueue_release(&caller, &amount, self.stake_duration().get());
        self.removed_votes_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: reward
    // Controller spends the account's gas budget and pays out of
    // the rewards pool allowance.
    // ========================================================

    #[endpoint(reward)]
    fn reward(
        &self,
        account: ManagedAddress,
        token_amount: BigUint,
        staking_amount: BigUint,
        gas_estimate: BigUint,
        is_stake: bool,
    ) {
        self.require_role(Role::Controller);
        self.require_not_paused();

        let gas_budget = self.gas_budget(&account).get();
        require!(
            gas_budget >= gas_estimate,
            "Insufficient gas budget: have {}, need {}",
            gas_budget,
            gas_estimate
        );
        self.gas_budget(&account).set(&gas_budget - &gas_estimate);

        let total = &token_amount + &staking_amount;
        if is_stake && staking_amount > 0u64 {
            self.available(&account).update(|a| *a += &token_amount);
            self.add_stake(&account, &account, &staking_amount);
        } else {
            self.available(&account).update(|a| *a += &total);
        }
        self.rewarded_event(&account, &staking_amount, is_stake, &token_amount);

        if total > 0u64 {
            let rewards_pool = self.rewards_pool_address().get();
            self.pull_tokens(&rewards_pool, &total);
        }
    }

    // ========================================================
    // ENDPOINT: emergencyWithdraw
    // Drains the whole token balance to the admin. Paused only.
    // ========================================================

    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self) {
        self.require_role(Role::Admin);
        self.require_paused();
        let caller = self.blockchain().get_caller();

        let balance: BigUint = self
            .tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .balance_of(self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.emergency_withdrawal_event(&caller, &balance);
        if balance > 0u64 {
            self.send_tokens(&caller, &balance);
        }
    }

    // ========================================================
    // INTERNAL: funding and token movement
    // Ledger state is always written before the token is called.
    // ========================================================

    /// Debits `available` for as much of `amount` as it covers and
    /// returns the shortfall still owed by `owner`.
    fn draw_from_available(&self, owner: &ManagedAddress, amount: &BigUint) -> BigUint {
        let available = self.available(owner).get();
        if &available >= amount {
            self.available(owner).set(&available - amount);
            return BigUint::zero();
        }

        self.available(owner).clear();
        amount - &available
    }

    fn add_stake(&self, owner: &ManagedAddress, delegate: &ManagedAddress, amount: &BigUint) {
        self.stakes(owner, delegate).update(|s| *s += amount);
        self.stake_delegates(owner).insert(delegate.clone());

        if self.is_voter(owner).get() {
            self.stake_votes(owner).update(|votes| *votes += amount);
            self.added_votes_event(owner, amount);
        }

        self.staked_event(owner, delegate, amount);
    }

    fn pull_tokens(&self, from: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        let transferred: bool = self
            .tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .transfer_from(
                from.clone(),
                self.blockchain().get_sc_address(),
                amount.clone(),
            )
            .returns(ReturnsResult)
            .sync_call();
        require!(transferred, ERR_TOKEN_TRANSFER_FAILED);
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        let transferred: bool = self
            .tx()
            .to(&self.token_address().get())
            .typed(token_proxy::TokenProxy)
            .transfer(to.clone(), amount.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(transferred, ERR_TOKEN_TRANSFER_FAILED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (available, gas, votes, isVoter)
    #[view(getAccount)]
    fn get_account(&self, account: &ManagedAddress) -> MultiValue4<BigUint, BigUint, BigUint, bool> {
        (
            self.available(account).get(),
            self.gas_budget(account).get(),
            self.direct_votes(account).get() + self.stake_votes(account).get(),
            self.is_voter(account).get(),
        )
            .into()
    }

    #[view(votesOf)]
    fn votes_of(&self, account: &ManagedAddress) -> BigUint {
        if self.is_voter(account).get() {
            self.direct_votes(account).get() + self.stake_votes(account).get()
        } else {
            BigUint::zero()
        }
    }

    #[view(getStakes)]
    fn get_stakes(&self, owner: &ManagedAddress) -> MultiValueEncoded<MultiValue2<ManagedAddress, BigUint>> {
        let mut result = MultiValueEncoded::new();
        for delegate in self.stake_delegates(owner).iter() {
            let amount = self.stakes(owner, &delegate).get();
            result.push((delegate, amount).into());
        }
        result
    }
}
