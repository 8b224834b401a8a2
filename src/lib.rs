//! Artmarket - Digital Artwork Marketplace on Casper Network
//!
//! This contract allows artists and collectors to:
//! - Mint unique artwork tokens with IPFS metadata
//! - Purchase tokens, with a 7% royalty paid to the original artist
//! - Grant time-bounded usage licenses, with a 3% artist royalty
//!
//! Built with Odra framework for Casper Network.

#![cfg_attr(target_arch = "wasm32", no_std)]
#![cfg_attr(target_arch = "wasm32", no_main)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod types;

pub mod license_ledger;
pub mod ownership_index;
pub mod royalty;
pub mod token_registry;

pub mod art_marketplace;

pub use art_marketplace::ArtMarketplace;
