#![no_std]

multiversx_sc::imports!();

pub mod token_mock_proxy;

/// Allowance-based token with the transfer interface the custody ledger
/// expects from its collaborator. Test scaffolding only.
#[multiversx_sc::contract]
pub trait TokenMock {
    /// Mints the whole supply to the deployer.
    #[init]
    fn init(&self, initial_supply: BigUint) {
        let caller = self.blockchain().get_caller();
        self.balances(&caller).set(&initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        if self.reject_transfers().get() {
            return false;
        }
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        if self.reject_transfers().get() {
            return false;
        }
        let spender = self.blockchain().get_caller();
        let allowed = self.allowances(&from, &spender).get();
        require!(allowed >= amount, "Insufficient allowance");
        self.allowances(&from, &spender).set(&allowed - &amount);
        self.move_balance(&from, &to, &amount);
        true
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
        true
    }

    /// Makes `transfer` and `transferFrom` report failure with `false`.
    #[endpoint(setRejectTransfers)]
    fn set_reject_transfers(&self, reject: bool) {
        self.reject_transfers().set(reject);
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(from).get();
        require!(&balance >= amount, "Insufficient balance");
        self.balances(from).set(&balance - amount);
        self.balances(to).update(|b| *b += amount);
    }

    #[view(balanceOf)]
    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("rejectTransfers")]
    fn reject_transfers(&self) -> SingleValueMapper<bool>;
}
