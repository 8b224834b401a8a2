//! Artmarket - Main Contract Module
//!
//! This module implements the marketplace engine for artwork tokens on
//! Casper Network: minting, sales with royalty payouts, price updates,
//! and time-bounded usage licenses. Every operation validates against
//! the token and license records first, pays second, and commits last,
//! so a failed call leaves no observable state behind.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Var};

use crate::errors::Error;
use crate::events::{
    LicensePriceUpdated, LicensePurchased, PaymentExecuted, SellingPriceUpdated, TokenMinted,
    TokenPurchased,
};
use crate::license_ledger::LicenseLedger;
use crate::ownership_index::OwnershipIndex;
use crate::royalty::{split, RoyaltyDistributor};
use crate::token_registry::TokenRegistry;
use crate::types::{constants::*, License, MarketplaceStats, Token};

/// Main marketplace contract module
#[odra::module(events = [
    TokenMinted,
    TokenPurchased,
    SellingPriceUpdated,
    LicensePriceUpdated,
    LicensePurchased,
    PaymentExecuted
])]
pub struct ArtMarketplace {
    // ============================================
    // Components
    // ============================================

    /// Token records, ID allocation, metadata uniqueness
    registry: SubModule<TokenRegistry>,
    /// Derived per-owner enumeration of held token IDs
    holdings: SubModule<OwnershipIndex>,
    /// Append-only license history and overlap guard
    licenses: SubModule<LicenseLedger>,
    /// Royalty payout execution
    royalties: SubModule<RoyaltyDistributor>,

    // ============================================
    // Statistics
    // ============================================

    /// Sum of all payments processed, in motes
    total_volume: Var<U512>,
    /// Lifetime artist royalties, in motes
    royalties_collected: Var<U512>,
}

#[odra::module]
impl ArtMarketplace {
    // ============================================
    // Initialization
    // ============================================

    /// Initialize the marketplace contract
    #[odra(init)]
    pub fn init(&mut self) {
        self.total_volume.set(U512::zero());
        self.royalties_collected.set(U512::zero());
    }

    // ============================================
    // Core Entry Points
    // ============================================

    /// Mint a new artwork token owned by the caller
    ///
    /// # Arguments
    /// * `metadata_uri` - URI of the artwork metadata, unique forever
    /// * `selling_price` - Initial sale price in motes, nonzero
    /// * `daily_license_price` - Initial per-day license price in motes, nonzero
    pub fn mint(
        &mut self,
        metadata_uri: String,
        selling_price: U512,
        daily_license_price: U512,
    ) -> u64 {
        let caller = self.env().caller();

        let token_id =
            self.registry
                .mint(metadata_uri.clone(), selling_price, daily_license_price, caller);
        self.holdings.add(&caller, token_id);

        self.env().emit_event(TokenMinted {
            token_id,
            artist: caller,
            metadata_uri,
            selling_price,
            daily_license_price,
            timestamp: self.env().get_block_time(),
        });

        token_id
    }

    /// Buy a listed token
    ///
    /// The attached value must cover the sale price. The full attached
    /// value is split 7% to the artist and the remainder to the seller;
    /// an overpayment flows through the split instead of being
    /// refunded. A sold token leaves both the sale and the license
    /// market until the new owner re-lists it.
    #[odra(payable)]
    pub fn purchase(&mut self, token_id: u64) {
        let caller = self.env().caller();
        let payment = self.env().attached_value();

        // Validate
        let token = self.registry.get(token_id);
        if caller == token.owner {
            self.env().revert(Error::AlreadyOwner);
        }
        if token.selling_price == U512::zero() {
            self.env().revert(Error::NotForSale);
        }
        if payment < token.selling_price {
            self.env().revert(Error::InsufficientPayment);
        }

        let (artist_share, owner_share) = split(payment, RESALE_ROYALTY_PERCENT);

        // Move the ID between the index sets. A missing seller entry
        // means the index disagrees with the token record.
        self.holdings.add(&caller, token_id);
        self.holdings.remove(&token.owner, token_id);

        // Pay the artist first, then the seller
        self.royalties.pay(&token.artist, artist_share);
        self.royalties.pay(&token.owner, owner_share);

        // Commit the transfer
        self.registry.set_owner(token_id, caller);
        self.registry.set_selling_price(token_id, U512::zero());
        self.registry.set_daily_license_price(token_id, U512::zero());

        self.total_volume.set(self.total_volume.get_or_default() + payment);
        self.royalties_collected
            .set(self.royalties_collected.get_or_default() + artist_share);

        self.env().emit_event(TokenPurchased {
            token_id,
            buyer: caller,
            seller: token.owner,
            price: payment,
            artist_share,
            owner_share,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Update the sale price of a token
    ///
    /// Only the owner may call this. Zero delists the token, any other
    /// value lists or reprices it. No payment is involved.
    pub fn update_selling_price(&mut self, token_id: u64, new_price: U512) {
        let caller = self.env().caller();

        let token = self.registry.get(token_id);
        if token.owner != caller {
            self.env().revert(Error::NotOwner);
        }

        self.registry.set_selling_price(token_id, new_price);

        self.env().emit_event(SellingPriceUpdated {
            token_id,
            old_price: token.selling_price,
            new_price,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Update the per-day license price of a token
    ///
    /// Only the owner may call this. Zero closes the token for new
    /// licenses, any other value opens or reprices licensing.
    pub fn update_daily_license_price(&mut self, token_id: u64, new_price: U512) {
        let caller = self.env().caller();

        let token = self.registry.get(token_id);
        if token.owner != caller {
            self.env().revert(Error::NotOwner);
        }

        self.registry.set_daily_license_price(token_id, new_price);

        self.env().emit_event(LicensePriceUpdated {
            token_id,
            old_price: token.daily_license_price,
            new_price,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Buy a usage license on a token for a number of days
    ///
    /// The attached value must cover `daily_license_price * days`. The
    /// full attached value is split 3% to the artist and the remainder
    /// to the current owner. One recipient can hold at most one
    /// running license per token; a new grant is rejected until the
    /// previous one has passed its end instant.
    #[odra(payable)]
    pub fn purchase_license(&mut self, token_id: u64, days: u64) {
        let caller = self.env().caller();
        let payment = self.env().attached_value();
        let now = self.env().get_block_time();

        // Validate
        let token = self.registry.get(token_id);
        if caller == token.owner {
            self.env().revert(Error::AlreadyOwner);
        }
        if token.daily_license_price == U512::zero() {
            self.env().revert(Error::NotLicensable);
        }
        if days == 0 {
            self.env().revert(Error::InvalidDuration);
        }
        // The end instant must stay representable in u64 milliseconds.
        let end = match days.checked_mul(MILLIS_PER_DAY).and_then(|ms| now.checked_add(ms)) {
            Some(end) => end,
            None => self.env().revert(Error::InvalidDuration),
        };
        if payment < token.daily_license_price * days {
            self.env().revert(Error::InsufficientPayment);
        }
        if self.licenses.has_active_license(&caller, token_id, now) {
            self.env().revert(Error::AlreadyLicensed);
        }

        let (artist_share, owner_share) = split(payment, LICENSE_ROYALTY_PERCENT);

        // Pay the artist first, then the owner
        self.royalties.pay(&token.artist, artist_share);
        self.royalties.pay(&token.owner, owner_share);

        // Record the grant
        self.licenses.record(token_id, caller, now, end, payment);

        self.total_volume.set(self.total_volume.get_or_default() + payment);
        self.royalties_collected
            .set(self.royalties_collected.get_or_default() + artist_share);

        self.env().emit_event(LicensePurchased {
            token_id,
            recipient: caller,
            start: now,
            end,
            price: payment,
            timestamp: now,
        });
    }

    // ============================================
    // View Functions
    // ============================================

    /// Get a token by ID
    pub fn get_token(&self, token_id: u64) -> Token {
        self.registry.get(token_id)
    }

    /// Get all token IDs currently held by an owner
    pub fn tokens_for_owner(&self, owner: Address) -> Vec<u64> {
        let count = self.holdings.count(&owner);
        let mut result = Vec::new();
        for index in 0..count {
            result.push(self.holdings.id_at(&owner, index));
        }
        result
    }

    /// Number of tokens currently held by an owner
    pub fn owned_count(&self, owner: Address) -> u64 {
        self.holdings.count(&owner)
    }

    /// Token ID at `index` within an owner's holdings
    pub fn owned_token_at(&self, owner: Address, index: u64) -> u64 {
        self.holdings.id_at(&owner, index)
    }

    /// Whether `owner` currently holds `token_id`
    pub fn owns(&self, owner: Address, token_id: u64) -> bool {
        self.holdings.contains(&owner, token_id)
    }

    /// Get all licenses ever issued on a token, in issuance order
    pub fn licenses_for_token(&self, token_id: u64) -> Vec<License> {
        self.licenses.licenses_for_token(token_id)
    }

    /// Get all licenses ever granted to a recipient, in issuance order
    pub fn licenses_for_recipient(&self, recipient: Address) -> Vec<License> {
        self.licenses.licenses_for_recipient(&recipient)
    }

    /// Whether a recipient holds an unexpired license on a token
    pub fn has_active_license(&self, recipient: Address, token_id: u64) -> bool {
        self.licenses
            .has_active_license(&recipient, token_id, self.env().get_block_time())
    }

    /// Get marketplace statistics
    pub fn get_marketplace_stats(&self) -> MarketplaceStats {
        MarketplaceStats {
            token_count: self.registry.token_count(),
            license_count: self.licenses.license_count(),
            total_volume: self.total_volume.get_or_default(),
            royalties_collected: self.royalties_collected.get_or_default(),
            total_paid_out: self.royalties.total_paid_out(),
        }
    }
}

// ============================================
// Tests
// ============================================
