//! Asset identity and registry resolution.
//!
//! Every underlying token of a pool is classified exactly once per run as
//! either a registry-resolved [`KnownToken`] or an ad-hoc [`UnknownToken`].
//! The classification is a closed enum so every consumer pattern-matches;
//! there is no runtime type test anywhere downstream.

mod identity;
mod registry;

pub use identity::{AssetIdentity, KnownToken, UnknownToken};
pub use registry::{default_mainnet_registry, AssetRegistry, RegistryEntry};
