//! Primary Account Number (PAN) rules: range validation and masking.

use super::transaction_type::TransactionType;

/// Number of digits in a well-formed PAN.
pub const PAN_LENGTH: usize = 16;

const MASK: &str = "******";
const VISIBLE_PREFIX: usize = 6;
const VISIBLE_SUFFIX: usize = 4;

/// Checks that a PAN is exactly 16 ASCII digits and falls inside the
/// range assigned to `transaction_type`.
///
/// A PAN from another type's range is rejected even though it is
/// well-formed.
pub fn is_valid_pan_for_type(pan: Option<&str>, transaction_type: TransactionType) -> bool {
    let Some(pan) = pan else {
        return false;
    };
    if pan.len() != PAN_LENGTH || !pan.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match pan.parse::<u64>() {
        Ok(value) => transaction_type.pan_range().contains(&value),
        Err(_) => false,
    }
}

/// Masks the middle six characters of a 16-character PAN, keeping the
/// first six and the last four.
///
/// Masking looks at length only: any 16-character string is masked,
/// anything else (or no PAN at all) is returned as is.
pub fn mask_pan(pan: Option<&str>) -> Option<String> {
    let pan = pan?;
    let chars: Vec<char> = pan.chars().collect();
    if chars.len() != PAN_LENGTH {
        return Some(pan.to_string());
    }

    let mut masked = String::with_capacity(pan.len());
    masked.extend(&chars[..VISIBLE_PREFIX]);
    masked.push_str(MASK);
    masked.extend(&chars[PAN_LENGTH - VISIBLE_SUFFIX..]);
    Some(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pan_for_app_type() {
        assert!(is_valid_pan_for_type(Some("1000000000000000"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some("2000000000000000"), TransactionType::APP));
    }

    #[test]
    fn test_valid_pan_for_brw_type() {
        assert!(is_valid_pan_for_type(Some("2000000000000000"), TransactionType::BRW));
        assert!(is_valid_pan_for_type(Some("2000001234567890"), TransactionType::BRW));
        assert!(!is_valid_pan_for_type(Some("2000001234567891"), TransactionType::BRW));
        assert!(!is_valid_pan_for_type(Some("3000000000000000"), TransactionType::BRW));
    }

    #[test]
    fn test_valid_pan_for_tri_type() {
        assert!(is_valid_pan_for_type(Some("3000000000000000"), TransactionType::TRI));
        assert!(is_valid_pan_for_type(Some("3000000000000100"), TransactionType::TRI));
        assert!(!is_valid_pan_for_type(Some("3000000000000101"), TransactionType::TRI));
        assert!(!is_valid_pan_for_type(Some("4000000000000000"), TransactionType::TRI));
    }

    #[test]
    fn test_app_range_boundaries_are_inclusive() {
        assert!(is_valid_pan_for_type(Some("1000000000000000"), TransactionType::APP));
        assert!(is_valid_pan_for_type(Some("1000005999999999"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some("1000006000000000"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some("0999999999999999"), TransactionType::APP));
    }

    #[test]
    fn test_invalid_pan_length() {
        assert!(!is_valid_pan_for_type(Some("100000"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some("1000000000000000000"), TransactionType::APP));
    }

    #[test]
    fn test_missing_or_empty_pan() {
        assert!(!is_valid_pan_for_type(None, TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some(""), TransactionType::APP));
    }

    #[test]
    fn test_non_digit_characters_rejected() {
        assert!(!is_valid_pan_for_type(Some("10000000000000a0"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some(" 100000000000000"), TransactionType::APP));
        assert!(!is_valid_pan_for_type(Some("+100000000000000"), TransactionType::APP));
    }

    #[test]
    fn test_mask_sixteen_characters() {
        assert_eq!(
            mask_pan(Some("1000000000000000")).as_deref(),
            Some("100000******0000")
        );
        assert_eq!(
            mask_pan(Some("1234567890123456")).as_deref(),
            Some("123456******3456")
        );
    }

    #[test]
    fn test_mask_ignores_format() {
        assert_eq!(
            mask_pan(Some("abcdefghijklmnop")).as_deref(),
            Some("abcdef******mnop")
        );
    }

    #[test]
    fn test_mask_passes_other_lengths_through() {
        assert_eq!(mask_pan(Some("100000")).as_deref(), Some("100000"));
        assert_eq!(
            mask_pan(Some("10000000000000000")).as_deref(),
            Some("10000000000000000")
        );
        assert_eq!(mask_pan(Some("")).as_deref(), Some(""));
        assert_eq!(mask_pan(None), None);
    }
}
