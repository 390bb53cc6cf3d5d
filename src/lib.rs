//! SafeSpace: student community and wellbeing toolkit.
//!
//! ARCHITECTURE
//! ============
//! Every feature area owns one typed [`store::PersistedSlot`] on a shared,
//! injected [`store::KeyValueStore`]. Crisis screening is a pure predicate in
//! [`screening`] that any entry point can call. Account management is delegated
//! to an [`identity::IdentityProvider`] so the concrete provider can be swapped
//! or faked in tests.

pub mod config;
pub mod identity;
pub mod screening;
pub mod services;
pub mod store;
pub mod views;
