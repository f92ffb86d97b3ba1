//! Core components of the `watchlist-proxy` crate.
//!
//! This module contains the foundational building blocks:
//! - The [`ProviderClient`] and its builder.
//! - The primary [`ProxyError`] type.
//! - The [`SentimentService`] seam between the handler and the network.

/// The provider client (`ProviderClient`) and its builder.
pub mod client;
/// The primary error type (`ProxyError`) for the crate.
pub mod error;
/// Service traits for abstracting the outbound call.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ProviderClient`
pub use client::{ProviderClient, ProviderClientBuilder};
pub use error::ProxyError;
pub use services::SentimentService;
