//! Top-level facade crate for deckbridge.
//!
//! Re-exports the codec and the plugin runtime so plugins can depend on a single crate.

pub mod core {
    pub use deckbridge_core::*;
}

pub mod plugin {
    pub use deckbridge_plugin::*;
}
