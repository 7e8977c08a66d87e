use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input too large: {size} bytes exceeds maximum {max}")]
    InputTooLarge { size: usize, max: usize },

    #[error("Huffman code length {length} exceeds maximum {max} after limiting")]
    CodeLengthOverflow { length: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
