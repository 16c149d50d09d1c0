//! Token estimation for LLM context budgeting
//!
//! zipprompt does not run a real BPE tokenizer. The estimate is a fixed
//! ratio of 3.5 bytes per token, so it depends only on the byte length of
//! the text and is stable across runs and platforms.
//!
//! Usage:
//! ```rust
//! use zipprompt::core::tokenizer::estimate_tokens;
//!
//! assert_eq!(estimate_tokens(""), 0);
//! assert_eq!(estimate_tokens("hello world"), 4);
//! ```

/// Bytes per token, expressed as a fraction (7 / 2 = 3.5)
const BYTES_PER_TOKEN_NUM: usize = 7;
const BYTES_PER_TOKEN_DEN: usize = 2;

/// Estimate the token count of a text: `ceil(len / 3.5)`
pub fn estimate_tokens(text: &str) -> usize {
    estimate_tokens_for_len(text.len())
}

/// Estimate the token count for a byte length
///
/// Computed as `ceil(len * 2 / 7)` in integer arithmetic, which equals
/// `ceil(len / 3.5)` without floating point rounding.
pub fn estimate_tokens_for_len(len: usize) -> usize {
    (len * BYTES_PER_TOKEN_DEN).div_ceil(BYTES_PER_TOKEN_NUM)
}
