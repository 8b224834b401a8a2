//! License history for the Artmarket ledger
//!
//! Append-only record of every usage license ever issued, kept in two
//! insertion-ordered views (by token and by recipient) for audit and
//! queries. Licenses are never edited or deleted after issuance.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Mapping, Var};

use crate::types::License;

/// Stores issued licenses and answers the overlap guard.
#[odra::module]
pub struct LicenseLedger {
    /// Total number of licenses issued
    license_count: Var<u64>,
    /// Count of licenses per token
    token_license_count: Mapping<u64, u64>,
    /// Indexed licenses: (token ID, index) -> License
    token_license_at: Mapping<(u64, u64), License>,
    /// Count of licenses per recipient
    recipient_license_count: Mapping<Address, u64>,
    /// Indexed licenses: (recipient, index) -> License
    recipient_license_at: Mapping<(Address, u64), License>,
}

impl LicenseLedger {
    /// Append a license to both views.
    pub fn record(
        &mut self,
        token_id: u64,
        recipient: Address,
        start: u64,
        end: u64,
        price: U512,
    ) {
        let license = License {
            token_id,
            start,
            end,
            price,
            recipient,
        };

        let token_count = self.token_license_count.get_or_default(&token_id);
        self.token_license_at.set(&(token_id, token_count), license.clone());
        self.token_license_count.set(&token_id, token_count + 1);

        let recipient_count = self.recipient_license_count.get_or_default(&recipient);
        self.recipient_license_at.set(&(recipient, recipient_count), license);
        self.recipient_license_count.set(&recipient, recipient_count + 1);

        self.license_count.set(self.license_count.get_or_default() + 1);
    }

    /// Whether `recipient` holds a license on `token_id` that is still
    /// running at `now`. A license blocks re-issuance up to and
    /// including its `end` instant.
    pub fn has_active_license(&self, recipient: &Address, token_id: u64, now: u64) -> bool {
        let count = self.recipient_license_count.get_or_default(recipient);
        for i in 0..count {
            if let Some(license) = self.recipient_license_at.get(&(*recipient, i)) {
                if license.token_id == token_id && license.end >= now {
                    return true;
                }
            }
        }
        false
    }

    /// All licenses ever issued on a token, in issuance order.
    pub fn licenses_for_token(&self, token_id: u64) -> Vec<License> {
        let count = self.token_license_count.get_or_default(&token_id);
        let mut result = Vec::new();
        for i in 0..count {
            if let Some(license) = self.token_license_at.get(&(token_id, i)) {
                result.push(license);
            }
        }
        result
    }

    /// All licenses ever granted to a recipient, in issuance order.
    pub fn licenses_for_recipient(&self, recipient: &Address) -> Vec<License> {
        let count = self.recipient_license_count.get_or_default(recipient);
        let mut result = Vec::new();
        for i in 0..count {
            if let Some(license) = self.recipient_license_at.get(&(*recipient, i)) {
                result.push(license);
            }
        }
        result
    }

    /// Total number of licenses issued.
    pub fn license_count(&self) -> u64 {
        self.license_count.get_or_default()
    }
}
