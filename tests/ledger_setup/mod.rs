// Shared blackbox fixture: a token, a funded user and rewards pool, and a
// deployed custody ledger with the owner as admin and a separate controller.

#![allow(dead_code)]

use custody_ledger::custody_ledger_proxy::CustodyLedgerProxy;
use multiversx_sc_scenario::imports::*;
use token_mock::token_mock_proxy::TokenMockProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const CONTROLLER: TestAddress = TestAddress::new("controller");
pub const USER: TestAddress = TestAddress::new("user");
pub const OTHER: TestAddress = TestAddress::new("other");
pub const REWARDS_POOL: TestAddress = TestAddress::new("rewards-pool");

pub const LEDGER: TestSCAddress = TestSCAddress::new("custody-ledger");
pub const TOKEN: TestSCAddress = TestSCAddress::new("token");

pub const LEDGER_CODE: MxscPath = MxscPath::new("output/custody-ledger.mxsc.json");
pub const TOKEN_CODE: MxscPath = MxscPath::new("token-mock/output/token-mock.mxsc.json");

pub const START: u64 = 1_000_000;
pub const LOCK_SIZE: u64 = 1_000;
pub const MIN_STAKE_SIZE: u64 = 100;
pub const LOCK_DURATION: u64 = 90_000;
pub const STAKE_DURATION: u64 = 200_000;
pub const GOVERNANCE_DURATION: u64 = 300_000;
pub const DEFAULT_REDEEM_COST: u64 = 10;

pub const USER_TOKENS: u64 = 10_000;
pub const POOL_TOKENS: u64 = 50_000;
pub const USER_EGLD: u64 = 5_000;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(LEDGER_CODE, custody_ledger::ContractBuilder);
    blockchain.register_contract(TOKEN_CODE, token_mock::ContractBuilder);
    blockchain
}

pub struct LedgerSetup {
    pub world: ScenarioWorld,
}

impl LedgerSetup {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world.account(CONTROLLER).nonce(1);
        world.account(USER).nonce(1).balance(USER_EGLD);
        world.account(OTHER).nonce(1).balance(USER_EGLD);
        world.account(REWARDS_POOL).nonce(1);
        world.current_block().block_timestamp(START);

        world
            .tx()
            .from(OWNER)
            .typed(TokenMockProxy)
            .init(1_000_000u64)
            .code(TOKEN_CODE)
            .new_address(TOKEN)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(CustodyLedgerProxy)
            .init(
                TOKEN.to_address(),
                CONTROLLER.to_address(),
                LOCK_SIZE,
                LOCK_DURATION,
                MIN_STAKE_SIZE,
                STAKE_DURATION,
                GOVERNANCE_DURATION,
                REWARDS_POOL.to_address(),
                DEFAULT_REDEEM_COST,
            )
            .code(LEDGER_CODE)
            .new_address(LEDGER)
            .run();

        let mut setup = LedgerSetup { world };
        setup.fund(USER, USER_TOKENS);
        setup.fund(OTHER, USER_TOKENS);
        setup.fund(REWARDS_POOL, POOL_TOKENS);
        setup.approve(USER, USER_TOKENS);
        setup.approve(OTHER, USER_TOKENS);
        setup.approve(REWARDS_POOL, POOL_TOKENS);
        setup
    }

    pub fn fund(&mut self, account: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(TokenMockProxy)
            .transfer(account.to_address(), amount)
            .run();
    }

    pub fn approve(&mut self, account: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(account)
            .to(TOKEN)
            .typed(TokenMockProxy)
            .approve(LEDGER.to_address(), amount)
            .run();
    }

    pub fn reject_transfers(&mut self, reject: bool) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(TokenMockProxy)
            .set_reject_transfers(reject)
            .run();
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ========================================================
    // Ledger calls
    // ========================================================

    pub fn lock(&mut self, from: TestAddress, fingerprint: &str) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .lock(fingerprint)
            .run();
    }

    pub fn lock_expect_err(&mut self, from: TestAddress, fingerprint: &str, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .lock(fingerprint)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn unlock(&mut self, from: TestAddress, fingerprint: &str) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .unlock(fingerprint)
            .run();
    }

    pub fn open_expired(&mut self, from: TestAddress, expected: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .open_expired()
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn withdraw(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .withdraw(amount)
            .run();
    }

    pub fn stake(&mut self, from: TestAddress, delegate: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .stake(delegate.to_address(), amount)
            .run();
    }

    pub fn unstake(&mut self, from: TestAddress, delegate: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .unstake(delegate.to_address(), amount)
            .run();
    }

    pub fn become_voter(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .become_voter()
            .run();
    }

    pub fn add_votes(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .add_votes(amount)
            .run();
    }

    pub fn remove_votes(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .remove_votes(amount)
            .run();
    }

    pub fn deposit_gas(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .deposit_gas()
            .egld(amount)
            .run();
    }

    pub fn reward(
        &mut self,
        account: TestAddress,
        token_amount: u64,
        staking_amount: u64,
        gas_estimate: u64,
        is_stake: bool,
    ) {
        self.world
            .tx()
            .from(CONTROLLER)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .reward(
                account.to_address(),
                token_amount,
                staking_amount,
                gas_estimate,
                is_stake,
            )
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .pause()
            .run();
    }

    // ========================================================
    // Checks
    // ========================================================

    pub fn check_available(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .available(account.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_gas_budget(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .gas_budget(account.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_votes(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .votes_of(account.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_lock(&mut self, owner: TestAddress, fingerprint: &str, expected: u64) {
        self.world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .locks(owner.to_address(), fingerprint)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_stake(&mut self, owner: TestAddress, delegate: TestAddress, expected: u64) {
        self.world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .stakes(owner.to_address(), delegate.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_token_balance(&mut self, account: Address, expected: u64) {
        self.world
            .query()
            .to(TOKEN)
            .typed(TokenMockProxy)
            .balances(account)
            .returns(ExpectValue(expected))
            .run();
    }

    /// (amount, available_at) of every queued release, head first.
    pub fn vault_entries(&mut self, owner: TestAddress) -> Vec<(u64, u64)> {
        let entries = self
            .world
            .query()
            .to(LEDGER)
            .typed(CustodyLedgerProxy)
            .get_vaults(owner.to_address())
            .returns(ReturnsResult)
            .run();

        entries
            .into_iter()
            .map(|entry| (entry.amount.to_u64().unwrap_or_default(), entry.available_at))
            .collect()
    }

    /// Everything the ledger holds for `owner`: available, the given locks,
    /// all stakes, direct votes and queued releases.
    pub fn custody_total(&mut self, owner: TestAddress, fingerprints: &[&str]) -> u64 {
        let mut total = 0u64;
        self.world
            .query()
            .to(LEDGER)
            .whitebox(custody_ledger::contract_obj, |sc| {
                use custody_ledger::storage::StorageModule;

                let owner = ManagedAddress::from(owner.to_address());
                let mut held = sc.available(&owner).get();
                for fingerprint in fingerprints {
                    held += sc.locks(&owner, &ManagedBuffer::from(*fingerprint)).get();
                }
                for delegate in sc.stake_delegates(&owner).iter() {
                    held += sc.stakes(&owner, &delegate).get();
                }
                held += sc.direct_votes(&owner).get();
                for entry in sc.vaults(&owner).iter() {
                    held += entry.amount;
                }
                total = held.to_u64().unwrap_or_default();
            });
        total
    }
}
