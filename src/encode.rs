use crate::error::HuffmanError;
use crate::table::CodeTable;

/// encodes `text` against a prepared code table by concatenating the code
/// of every symbol in input order
///
/// Every symbol must have an entry. Encoding text other than what the tree
/// was built from is allowed, but a symbol without a code is a hard error,
/// it is never skipped or substituted.
pub fn encode_with_table(codes: &CodeTable, text: &str) -> Result<String, HuffmanError> {
    let mut bits = String::new();
    for symbol in text.chars() {
        let code = codes
            .get(&symbol)
            .ok_or(HuffmanError::UnknownSymbol(symbol))?;
        bits.push_str(code);
    }
    Ok(bits)
}
