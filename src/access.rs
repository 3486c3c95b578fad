multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_PAUSED, ERR_NOT_PAUSED, ERR_PAUSED};
use crate::types::Role;

/// Role registry and pause switch.
///
/// Roles form a capability-to-address multimap. Every gated endpoint calls
/// `require_role` before touching anything else.
#[multiversx_sc::module]
pub trait AccessModule: crate::events::EventsModule {
    // ========================================================
    // Roles
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        let caller = self.blockchain().get_caller();
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, &account, &caller);
        }
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        let caller = self.blockchain().get_caller();
        if self.role_members(role).swap_remove(&account) {
            self.role_revoked_event(role, &account, &caller);
        }
    }

    /// Drops one of the caller's own capabilities.
    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        if self.role_members(role).swap_remove(&caller) {
            self.role_revoked_event(role, &caller, &caller);
        }
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        if !self.role_members(role).contains(&caller) {
            sc_panic!(role.missing_message());
        }
    }

    // ========================================================
    // Pause switch
    // ========================================================

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_role(Role::Pauser);
        require!(!self.paused().get(), ERR_ALREADY_PAUSED);
        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_role(Role::Pauser);
        require!(self.paused().get(), ERR_NOT_PAUSED);
        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn require_paused(&self) {
        require!(self.paused().get(), ERR_NOT_PAUSED);
    }

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
