multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Role: capabilities held by privileged addresses
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Role {
    /// Grants and revokes every role, drains the contract in an emergency.
    Admin,
    /// Flips the pause switch.
    Pauser,
    /// Authorizes in-place upgrades.
    Upgrader,
    /// Tunes parameters and distributes rewards.
    Controller,
}

impl Role {
    pub fn missing_message(self) -> &'static str {
        match self {
            Role::Admin => "Unauthorized: missing ADMIN role",
            Role::Pauser => "Unauthorized: missing PAUSER role",
            Role::Upgrader => "Unauthorized: missing UPGRADER role",
            Role::Controller => "Unauthorized: missing CONTROLLER role",
        }
    }
}

// ============================================================
// Vault Entry: a pending release back to `available`
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VaultEntry<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Block timestamp from which the entry may be opened
    pub available_at: u64,
}
