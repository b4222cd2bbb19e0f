//! Run-length decoder
//!
//! Single left-to-right pass, no backtracking.

use crate::error::{GeneError, Result};

/// Expand a run-length encoded formula into its literal sequence
///
/// A digit `d` appends `d - 1` copies of the character after it; that
/// character is then appended once more when the scan reaches it, giving
/// `d` copies in total.
///
/// # Errors
/// Returns [`GeneError::Decode`] when the formula ends with a digit.
pub fn decode(formula: &str) -> Result<String> {
    let chars: Vec<char> = formula.chars().collect();
    let mut decoded = String::with_capacity(formula.len());

    for (position, &ch) in chars.iter().enumerate() {
        // to_digit only accepts ASCII digits
        let Some(count) = ch.to_digit(10) else {
            decoded.push(ch);
            continue;
        };

        let next = chars.get(position + 1).copied().ok_or_else(|| GeneError::Decode {
            formula: formula.to_string(),
            position,
        })?;

        decoded.extend(std::iter::repeat(next).take(count.saturating_sub(1) as usize));
    }

    Ok(decoded)
}
