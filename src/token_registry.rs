//! Token records and identity for the Artmarket ledger

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Mapping, Var};

use crate::errors::Error;
use crate::types::Token;

/// Owns every token record and the metadata-uniqueness index.
///
/// IDs are assigned sequentially starting at 1 and records are never
/// deleted. The field mutators are unchecked; the engine calls them
/// only after the enclosing operation passed all of its preconditions.
#[odra::module]
pub struct TokenRegistry {
    /// Mapping of token ID to token record
    tokens: Mapping<u64, Token>,
    /// Number of tokens minted so far (equals the highest assigned ID)
    token_count: Var<u64>,
    /// Metadata URI to token ID, one token per artwork forever
    metadata_index: Mapping<String, u64>,
}

impl TokenRegistry {
    /// Create and store a new token with `creator` as artist and owner.
    /// Returns the freshly assigned ID.
    pub fn mint(
        &mut self,
        metadata_uri: String,
        selling_price: U512,
        daily_license_price: U512,
        creator: Address,
    ) -> u64 {
        // Uniqueness comes first: a re-used URI reports DuplicateMetadata
        // regardless of the price arguments.
        if self.metadata_index.get(&metadata_uri).is_some() {
            self.env().revert(Error::DuplicateMetadata);
        }
        if selling_price == U512::zero() || daily_license_price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }

        // Allocate the next sequential ID
        let token_id = self.token_count.get_or_default() + 1;
        self.token_count.set(token_id);
        self.metadata_index.set(&metadata_uri, token_id);

        let token = Token {
            id: token_id,
            selling_price,
            daily_license_price,
            metadata_uri,
            artist: creator,
            owner: creator,
        };
        self.tokens.set(&token_id, token);

        token_id
    }

    /// Load a token record, reverting for IDs that were never assigned.
    pub fn get(&self, token_id: u64) -> Token {
        match self.tokens.get(&token_id) {
            // The ID-field comparison rejects a stored record that no
            // longer belongs to this key.
            Some(token) if token.id == token_id => token,
            _ => self.env().revert(Error::UnknownToken),
        }
    }

    /// Number of tokens minted so far.
    pub fn token_count(&self) -> u64 {
        self.token_count.get_or_default()
    }

    /// Rebind the owner field. Unchecked.
    pub fn set_owner(&mut self, token_id: u64, new_owner: Address) {
        let mut token = self.get(token_id);
        token.owner = new_owner;
        self.tokens.set(&token_id, token);
    }

    /// Overwrite the sale price. Unchecked.
    pub fn set_selling_price(&mut self, token_id: u64, price: U512) {
        let mut token = self.get(token_id);
        token.selling_price = price;
        self.tokens.set(&token_id, token);
    }

    /// Overwrite the per-day license price. Unchecked.
    pub fn set_daily_license_price(&mut self, token_id: u64, price: U512) {
        let mut token = self.get(token_id);
        token.daily_license_price = price;
        self.tokens.set(&token_id, token);
    }
}
