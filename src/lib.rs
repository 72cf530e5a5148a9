//! Frequency-based Huffman coding for text.
//!
//! Builds a prefix-free binary code from a text's own symbol frequencies,
//! then encodes the text to a bitstring and losslessly decodes it back.
//! The code table is the only artifact shared between the two sides; it
//! travels out of band, there is no container format.

pub mod codec;
pub mod huffman;

pub use codec::{Decoded, decode, encode};
pub use huffman::{CodeTable, Node, SymbolFreq, build_tree, code_table, sorted_frequencies};
