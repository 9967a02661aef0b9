// idcheck-core/src/application/mod.rs

pub mod batch;
pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use idcheck_core::application::{run_batch, process_single};`

pub use batch::{BatchResult, run_batch};
pub use pipeline::{PersonReport, prepare_submission, process_person, process_single};
