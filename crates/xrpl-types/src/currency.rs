//! currency code helpers
//!
//! ledger currency fields are either 3-character ASCII codes or 160-bit hex
//! strings; AMM LP share codes start with 0x03 and have no ASCII form

const HEX_CODE_LEN: usize = 40;
const LP_CODE_PREFIX: &str = "03";

/// human-readable form of a currency code
///
/// 3-char codes pass through, hex codes decode to trimmed ASCII, LP share
/// codes render as "LP-" plus a code prefix
pub fn display_currency(code: &str) -> String {
    if code.len() != HEX_CODE_LEN {
        return code.to_string();
    }
    if code.starts_with(LP_CODE_PREFIX) {
        return format!("LP-{}", &code[..10]);
    }
    decode_hex_code(code).unwrap_or_else(|| code.to_string())
}

/// decode a 40-char hex currency code into its ASCII form
pub fn decode_hex_code(code: &str) -> Option<String> {
    let bytes = hex::decode(code).ok()?;
    let trimmed: Vec<u8> = bytes.into_iter().take_while(|b| *b != 0).collect();
    let text = String::from_utf8(trimmed).ok()?;
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_graphic()) {
        return None;
    }
    Some(text)
}
