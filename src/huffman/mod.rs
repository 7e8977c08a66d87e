pub mod builder;
pub mod encoder;

pub use builder::{canonical_codes, compute_code_lengths};
pub use encoder::{encode_block, FrequencyCounter};
