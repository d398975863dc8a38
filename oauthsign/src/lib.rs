#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use oauthsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_client};

#[cfg(feature = "oauth1")]
pub mod oauth1 {
    pub use oauthsign_oauth1::*;
}
