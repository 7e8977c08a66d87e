pub mod matcher;
pub mod tables;
pub mod tokens;

pub use matcher::Lz77Matcher;
pub use tokens::Token;
