multiversx_sc::imports!();

use crate::types::VaultEntry;

/// Per-account queues of pending releases.
///
/// Entries are appended at the tail and drained from the head only. The
/// sweep stops at the first entry that has not matured yet, even when a
/// later entry has: maturity is assumed FIFO, so a short release queued
/// behind a long one waits for it.
#[multiversx_sc::module]
pub trait VaultModule:
    crate::storage::StorageModule + crate::access::AccessModule + crate::events::EventsModule
{
    /// Moves every matured entry at the head of the caller's queue back
    /// into `available`. Returns the released amount.
    #[endpoint(openExpired)]
    fn open_expired(&self) -> BigUint {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let released = self.release_matured(&caller);
        if released > 0u64 {
            self.available(&caller).update(|a| *a += &released);
            self.vaults_opened_event(&caller, &released);
        }
        released
    }

    #[view(getVaults)]
    fn get_vaults(&self, owner: &ManagedAddress) -> MultiValueEncoded<VaultEntry<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for entry in self.vaults(owner).iter() {
            result.push(entry);
        }
        result
    }

    fn enqueue_release(&self, owner: &ManagedAddress, amount: &BigUint, duration: u64) {
        let available_at = self.blockchain().get_block_timestamp() + duration;
        self.vaults(owner).push_back(VaultEntry {
            amount: amount.clone(),
            available_at,
        });
    }

    fn release_matured(&self, owner: &ManagedAddress) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut queue = self.vaults(owner);
        let mut released = BigUint::zero();

        while let Some(head) = queue.front() {
            if now < head.available_at {
                break;
            }
            released += &head.amount;
            queue.pop_front();
        }
        released
    }
}
