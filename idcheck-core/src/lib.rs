// idcheck-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the external OCR and entity-extraction services.
pub mod ports;

// 2. Domain (business core)
// Record model, normalizers, verification rules.
// Depends on NOTHING else (no infra, no app), performs no I/O and never logs.
pub mod domain;

// 3. Infrastructure (Adapters)
// Config files, dataset discovery, external commands, JSON persistence.
pub mod infrastructure;

// 4. Application (Use Cases)
// Person pipeline and batch run.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::normalization::normalize;
pub use domain::verification::verify;
pub use error::IdcheckError;
