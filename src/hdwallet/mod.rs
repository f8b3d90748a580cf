/*
    This module implements private key derivation for hierarchical
    deterministic wallets under the BIP 32 standard.

    Only the private side is needed here: a seed becomes a master
    extended private key which is walked down a derivation path,
    the resulting key is then handed to the address module.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

pub mod ckd;
pub mod extended_keys;
pub mod path;

pub use ckd::ChildOptions as ChildOptions;
pub use extended_keys::Xprv as Xprv;
pub use path::Path as Path;

use thiserror::Error;

/// First hardened child index, 2^31.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HDWError {
    #[error("invalid derivation path {0:?}")]
    BadPath(String),

    #[error("derivation path must have exactly {expected} segments: m / purpose' / coin_type' / account' / change / index, found {found}")]
    BadSegmentCount { expected: usize, found: usize },

    #[error("derivation path must start with 'm', found {0:?}")]
    MissingMaster(String),

    #[error("invalid {name} segment: {segment:?}")]
    BadSegment { name: &'static str, segment: String },

    #[error("child index {0} is too large, indexes must be below 2^31")]
    IndexTooLarge(u32),

    #[error("derived key is invalid, use the next index")]
    BadKey,

    #[error("extended keys cannot be deeper than 255 levels")]
    TooDeep
}
