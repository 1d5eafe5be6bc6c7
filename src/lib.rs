//! Lossless compression with Huffman coding.
//!
//! Builds a prefix-free variable-length code from the symbol frequencies of
//! the input, encodes each character into its code word, and reverses the
//! process exactly. Code words are strings of '0'/'1' characters; the
//! [`bits`] module packs them into bytes as a separate, documented step.
//!
//! ```rust
//! use huffcode::{compress, decompress};
//!
//! let (compressed, table) = compress("abracadabra")?;
//! let restored = decompress(&compressed, &table)?;
//! assert_eq!(restored, "abracadabra");
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod tree;

pub use code::CodeTable;
pub use codec::{compress, decompress, encode};
pub use error::HuffmanError;
