use tracing::debug;

use crate::code::CodeTable;
use crate::error::HuffmanError;
use crate::freq::count_frequencies;
use crate::tree::Tree;

/// Compress `raw` into one code word per input character, plus the table
/// needed to reverse the mapping.
///
/// Fails with [`HuffmanError::EmptyInput`] on an empty input; every
/// non-empty input round-trips through [`decompress`]. Repeated calls on
/// the same input produce identical output.
pub fn compress(raw: &str) -> Result<(Vec<String>, CodeTable), HuffmanError> {
    let frequencies = count_frequencies(raw);
    let tree = Tree::build(&frequencies).ok_or(HuffmanError::EmptyInput)?;
    let table = CodeTable::from_tree(&tree);
    debug!("built code table with {} symbols", table.len());

    let compressed = encode(raw, &table)?;
    Ok((compressed, table))
}

/// Encode `raw` against an existing code table.
///
/// Fails with [`HuffmanError::UnknownSymbol`] when a character of `raw` has
/// no entry in `table` — impossible for the table returned by [`compress`]
/// on the same input, but a real case for caller-supplied tables.
pub fn encode(raw: &str, table: &CodeTable) -> Result<Vec<String>, HuffmanError> {
    let mut compressed = Vec::new();
    for symbol in raw.chars() {
        let code = table
            .encode
            .get(&symbol)
            .ok_or(HuffmanError::UnknownSymbol(symbol))?;
        compressed.push(code.clone());
    }
    Ok(compressed)
}

/// Reverse [`compress`]: look each code word up in `table` and concatenate
/// the symbols. Only the flat reverse mapping is consulted, never the tree.
pub fn decompress(compressed: &[String], table: &CodeTable) -> Result<String, HuffmanError> {
    let mut raw = String::with_capacity(compressed.len());
    for code in compressed {
        let symbol = table
            .decode
            .get(code)
            .ok_or_else(|| HuffmanError::UnknownCodeWord(code.clone()))?;
        raw.push(*symbol);
    }
    Ok(raw)
}
