//! Per-owner enumeration of held token IDs
//!
//! A derived index over the token records: for every token, exactly the
//! current owner's set contains its ID. The engine keeps it in lockstep
//! with ownership changes; the errors raised here are internal
//! assertions, not user-facing failures.

use odra::prelude::*;
use odra::prelude::{Address, Mapping};

use crate::errors::Error;

/// Enumerable set of token IDs per owner address.
///
/// Dense slot layout with a position map: add, remove and membership
/// are O(1), removal swaps the last slot into the vacated one, so
/// enumeration order is stable until the next removal for that owner.
#[odra::module]
pub struct OwnershipIndex {
    /// Number of tokens held per owner
    held_count: Mapping<Address, u64>,
    /// Indexed slots: (owner, position) -> token ID
    held_at: Mapping<(Address, u64), u64>,
    /// Reverse lookup: (owner, token ID) -> position + 1; 0 marks absence
    slot_of: Mapping<(Address, u64), u64>,
}

impl OwnershipIndex {
    /// Append a token ID to the owner's set.
    pub fn add(&mut self, owner: &Address, token_id: u64) {
        if self.slot_of.get_or_default(&(*owner, token_id)) != 0 {
            self.env().revert(Error::DuplicateEntry);
        }

        let count = self.held_count.get_or_default(owner);
        self.held_at.set(&(*owner, count), token_id);
        self.slot_of.set(&(*owner, token_id), count + 1);
        self.held_count.set(owner, count + 1);
    }

    /// Remove a token ID from the owner's set, filling the hole with
    /// the last slot.
    pub fn remove(&mut self, owner: &Address, token_id: u64) {
        let slot = self.slot_of.get_or_default(&(*owner, token_id));
        if slot == 0 {
            self.env().revert(Error::MissingEntry);
        }

        let position = slot - 1;
        let last = self.held_count.get_or_default(owner) - 1;
        if position != last {
            let moved = self.held_at.get_or_default(&(*owner, last));
            self.held_at.set(&(*owner, position), moved);
            self.slot_of.set(&(*owner, moved), position + 1);
        }
        self.held_at.set(&(*owner, last), 0);
        self.slot_of.set(&(*owner, token_id), 0);
        self.held_count.set(owner, last);
    }

    /// Number of tokens currently held by `owner`.
    pub fn count(&self, owner: &Address) -> u64 {
        self.held_count.get_or_default(owner)
    }

    /// Token ID at `index` within the owner's set.
    pub fn id_at(&self, owner: &Address, index: u64) -> u64 {
        if index >= self.held_count.get_or_default(owner) {
            self.env().revert(Error::IndexOutOfRange);
        }
        self.held_at.get_or_default(&(*owner, index))
    }

    /// Whether the owner's set contains `token_id`.
    pub fn contains(&self, owner: &Address, token_id: u64) -> bool {
        self.slot_of.get_or_default(&(*owner, token_id)) != 0
    }
}
