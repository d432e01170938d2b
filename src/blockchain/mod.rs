// src/blockchain/mod.rs

// The Etherscan HTTP client and its transport helper.
pub mod client;
// Error kinds shared by every operation.
pub mod error;
// Account, transaction and container domain objects.
pub mod ethereum;
// Envelope and typed response models.
pub mod models;

pub mod services;
pub mod validation;
