//! Data type definitions for the Artmarket ledger

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::Address;

/// A minted artwork token
#[odra::odra_type]
pub struct Token {
    /// Unique identifier, assigned sequentially starting at 1
    pub id: u64,
    /// Sale price in motes; 0 means the token is not for sale
    pub selling_price: U512,
    /// Price in motes for one day of usage rights; 0 means not licensable
    pub daily_license_price: U512,
    /// URI of the artwork metadata; bound to exactly one token forever
    pub metadata_uri: String,
    /// Original creator; receives a royalty on every payment, never changes
    pub artist: Address,
    /// Current owner; changes only through a successful purchase
    pub owner: Address,
}

/// A time-bounded usage grant sold on a token
#[odra::odra_type]
pub struct License {
    /// ID of the licensed token
    pub token_id: u64,
    /// Start of the validity window (block time, milliseconds)
    pub start: u64,
    /// End of the validity window (block time, milliseconds)
    pub end: u64,
    /// Amount paid for this license in motes
    pub price: U512,
    /// Address the usage rights were granted to
    pub recipient: Address,
}

/// Marketplace statistics
#[odra::odra_type]
#[derive(Default)]
pub struct MarketplaceStats {
    /// Total number of tokens minted
    pub token_count: u64,
    /// Total number of licenses issued
    pub license_count: u64,
    /// Sum of all payments processed, in motes
    pub total_volume: U512,
    /// Lifetime artist royalties, in motes
    pub royalties_collected: U512,
    /// Lifetime sum of executed payouts, in motes
    pub total_paid_out: U512,
}

/// Constants governing payments and license durations
pub mod constants {
    /// Artist royalty on a token sale (percent)
    pub const RESALE_ROYALTY_PERCENT: u64 = 7;
    /// Artist royalty on a license purchase (percent)
    pub const LICENSE_ROYALTY_PERCENT: u64 = 3;
    /// Denominator for percentage arithmetic
    pub const PERCENT_DENOMINATOR: u64 = 100;
    /// One license day in block-time units (milliseconds)
    pub const MILLIS_PER_DAY: u64 = 86_400_000;
}
