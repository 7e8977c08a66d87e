//! Raw DEFLATE (RFC 1951) compressor.
//!
//! Reduces the input to a stream of literals and back-references over a
//! 32 KiB window, derives canonical Huffman codes from the symbol
//! frequencies, run-length encodes the code-length tables, and emits a
//! single dynamic-Huffman block in the exact bit order the format mandates.
//!
//! The output carries no zlib/gzip framing; any RFC 1951 inflater
//! reconstructs the original bytes:
//!
//! ```
//! use std::io::Read;
//!
//! let input = b"Oneone oneone twotwo twotwo";
//! let compressed = rawdeflate::compress(input).unwrap();
//!
//! let mut inflater = flate2::read::DeflateDecoder::new(&compressed[..]);
//! let mut output = Vec::new();
//! inflater.read_to_end(&mut output).unwrap();
//! assert_eq!(output, input);
//! ```

pub mod bits;
pub mod deflate;
pub mod error;
pub mod huffman;

pub use deflate::tokens::Token;
pub use error::{Error, Result};

use deflate::matcher::Lz77Matcher;
use huffman::encoder::encode_block;

/// Maximum accepted input size (1 GiB)
///
/// Keeps match-chain positions well inside `i32` and bounds peak memory at a
/// small multiple of the input.
pub const MAX_INPUT_SIZE: usize = 1 << 30;

/// Compress `input` into a raw DEFLATE stream of one dynamic-Huffman block.
///
/// Deterministic: identical input yields identical output.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(Error::InputTooLarge { size: input.len(), max: MAX_INPUT_SIZE });
    }

    let tokens = Lz77Matcher::new().tokenize(input);
    encode_block(&tokens)
}
