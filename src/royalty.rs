//! Royalty arithmetic and payout execution

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Var};

use crate::errors::Error;
use crate::events::PaymentExecuted;
use crate::types::constants::PERCENT_DENOMINATOR;

/// Split `total_amount` between artist and owner at `royalty_percent`.
///
/// The base is divided by 100 before the percentage is applied, so the
/// artist share of anything below 100 motes truncates to zero. The
/// owner share is the exact remainder; the two always sum to
/// `total_amount`.
pub fn split(total_amount: U512, royalty_percent: u64) -> (U512, U512) {
    let artist_share = total_amount / PERCENT_DENOMINATOR * royalty_percent;
    let owner_share = total_amount - artist_share;
    (artist_share, owner_share)
}

/// Executes the value transfers of a royalty split.
#[odra::module]
pub struct RoyaltyDistributor {
    /// Lifetime sum of executed payouts, in motes
    total_paid_out: Var<U512>,
}

impl RoyaltyDistributor {
    /// Transfer `amount` motes to `recipient`.
    ///
    /// Reverting here rolls back the whole enclosing operation, so a
    /// rejected payout never leaves partial marketplace state behind.
    /// Zero amounts skip the transfer; plain purse transfers cannot
    /// target contract packages, so those recipients are rejected.
    pub fn pay(&mut self, recipient: &Address, amount: U512) {
        if amount == U512::zero() {
            return;
        }
        if recipient.is_contract() {
            self.env().revert(Error::PaymentFailed);
        }

        self.env().transfer_tokens(recipient, &amount);

        let paid = self.total_paid_out.get_or_default() + amount;
        self.total_paid_out.set(paid);

        self.env().emit_event(PaymentExecuted {
            recipient: *recipient,
            amount,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Lifetime sum of executed payouts.
    pub fn total_paid_out(&self) -> U512 {
        self.total_paid_out.get_or_default()
    }
}

// ============================================
// Tests
// ============================================
