// idcheck-core/src/domain/normalization/mod.rs

pub mod address;
pub mod date;
pub mod phone;
pub mod record;

pub use address::normalize_address;
pub use date::normalize_date;
pub use phone::normalize_phone;
pub use record::normalize;
