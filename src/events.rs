//! Event definitions for the Artmarket ledger
//!
//! Every successful mutating operation emits an audit event carrying
//! the fields of the record it touched, so off-chain indexers can
//! reconstruct the full history without reading contract storage.

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when a new token is minted
#[odra::event]
pub struct TokenMinted {
    /// Unique identifier of the token
    pub token_id: u64,
    /// Address of the artist (creator and first owner)
    pub artist: Address,
    /// URI of the artwork metadata
    pub metadata_uri: String,
    /// Initial sale price in motes
    pub selling_price: U512,
    /// Initial per-day license price in motes
    pub daily_license_price: U512,
    /// Timestamp of the mint
    pub timestamp: u64,
}

/// Emitted when a token changes owner through a sale
#[odra::event]
pub struct TokenPurchased {
    /// Unique identifier of the token
    pub token_id: u64,
    /// Address of the buyer (new owner)
    pub buyer: Address,
    /// Address of the seller (previous owner)
    pub seller: Address,
    /// Amount the buyer paid, in motes
    pub price: U512,
    /// Royalty paid to the artist
    pub artist_share: U512,
    /// Remainder paid to the seller
    pub owner_share: U512,
    /// Timestamp of the purchase
    pub timestamp: u64,
}

/// Emitted when an owner changes a token's sale price
#[odra::event]
pub struct SellingPriceUpdated {
    /// Unique identifier of the token
    pub token_id: u64,
    /// Previous sale price in motes
    pub old_price: U512,
    /// New sale price in motes; 0 delists the token
    pub new_price: U512,
    /// Timestamp of the update
    pub timestamp: u64,
}

/// Emitted when an owner changes a token's per-day license price
#[odra::event]
pub struct LicensePriceUpdated {
    /// Unique identifier of the token
    pub token_id: u64,
    /// Previous per-day license price in motes
    pub old_price: U512,
    /// New per-day license price in motes; 0 closes licensing
    pub new_price: U512,
    /// Timestamp of the update
    pub timestamp: u64,
}

/// Emitted when a usage license is issued on a token
#[odra::event]
pub struct LicensePurchased {
    /// Unique identifier of the licensed token
    pub token_id: u64,
    /// Address the usage rights were granted to
    pub recipient: Address,
    /// Start of the validity window (milliseconds)
    pub start: u64,
    /// End of the validity window (milliseconds)
    pub end: u64,
    /// Amount paid for the license, in motes
    pub price: U512,
    /// Timestamp of the purchase
    pub timestamp: u64,
}

/// Emitted for every royalty-split payout that was executed
#[odra::event]
pub struct PaymentExecuted {
    /// Address the value was transferred to
    pub recipient: Address,
    /// Amount transferred, in motes
    pub amount: U512,
    /// Timestamp of the transfer
    pub timestamp: u64,
}
