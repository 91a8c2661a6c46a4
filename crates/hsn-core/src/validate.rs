//! The two-stage HSN code check: structural format, then existence lookup.

use crate::master::MasterTable;
use crate::types::ValidationResult;

/// Reason reported when the code contains anything but decimal digits.
pub const REASON_NOT_NUMERIC: &str = "HSN code must be numeric";
/// Reason reported when a numeric code is shorter than 2 or longer than 8 digits.
pub const REASON_BAD_LENGTH: &str = "HSN code length must be between 2 and 8 digits";
/// Reason reported when a well-formed code is absent from the master table.
pub const REASON_NOT_FOUND: &str = "HSN code not found in master data";

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 8;

/// Validates a single candidate HSN code against the master table.
///
/// Checks run in a fixed order and the first failure short-circuits:
/// surrounding whitespace is trimmed, every character must be a decimal
/// digit (an empty code fails here too), the length must be 2 to 8 digits
/// inclusive, and finally the code must exist in the table as an exact
/// string match. Every outcome is a [`ValidationResult`]; this function
/// never fails.
pub fn validate(code: &str, table: &MasterTable) -> ValidationResult {
    let code = code.trim();

    // Format: digits only. Checked before length so that a non-numeric code
    // of the wrong length still reports the numeric reason.
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::invalid(code, REASON_NOT_NUMERIC);
    }

    // Format: length bounds, inclusive.
    if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
        return ValidationResult::invalid(code, REASON_BAD_LENGTH);
    }

    // Existence: exact match, no leading-zero normalization.
    match table.description(code) {
        Some(description) => ValidationResult::valid(code, description),
        None => ValidationResult::invalid(code, REASON_NOT_FOUND),
    }
}
