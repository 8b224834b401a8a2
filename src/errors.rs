//! Error definitions for the Artmarket ledger

use odra::prelude::*;

/// Custom errors for the Artmarket contract
#[odra::odra_error]
pub enum Error {
    // ============================================
    // Validation Errors (1-19)
    //
    // Deterministic, caller-correctable, and always
    // detected before any state mutation.
    // ============================================

    /// Token with given ID was never minted
    UnknownToken = 1,
    /// Metadata URI is already bound to another token
    DuplicateMetadata = 2,
    /// Price must be greater than 0 at mint time
    InvalidPrice = 3,
    /// Caller is not the owner of this token
    NotOwner = 4,
    /// Caller already owns this token
    AlreadyOwner = 5,
    /// Token is not listed for sale
    NotForSale = 6,
    /// Token is not open for licensing
    NotLicensable = 7,
    /// License duration must be at least one day
    InvalidDuration = 8,
    /// Attached value does not cover the price
    InsufficientPayment = 9,
    /// Caller already holds an unexpired license for this token
    AlreadyLicensed = 10,

    // ============================================
    // Execution Errors (20-29)
    //
    // Raised after validation passed; the revert
    // discards everything the operation did.
    // ============================================

    /// Value transfer to a payout recipient cannot be performed
    PaymentFailed = 20,

    // ============================================
    // Invariant Errors (30-39)
    //
    // Internal assertions. Reaching one of these means
    // the ownership index disagrees with the token
    // records; they are not user-facing failures.
    // ============================================

    /// Token ID already present in the owner's index set
    DuplicateEntry = 30,
    /// Token ID missing from the owner's index set
    MissingEntry = 31,
    /// Enumeration index is past the end of the owner's set
    IndexOutOfRange = 32,
}
