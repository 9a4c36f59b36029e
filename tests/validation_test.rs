// Unit tests for the prompt well-formedness heuristic.

use casegen::validate::validate;

#[test]
fn test_empty_prompt_is_invalid() {
    assert!(!validate(""));
}

#[test]
fn test_whitespace_only_prompt_is_invalid() {
    assert!(!validate("   "));
    assert!(!validate("\n\t  \n"));
}

#[test]
fn test_short_prompt_is_invalid() {
    assert!(!validate("short"));
    assert!(!validate("hi"));
}

#[test]
fn test_length_is_measured_after_trimming() {
    // 6 characters once the padding is gone.
    assert!(!validate("   padded   "));
}

#[test]
fn test_ten_character_boundary() {
    assert!(!validate("123456789"));
    assert!(validate("1234567890"));
}

#[test]
fn test_detailed_prompt_is_valid() {
    assert!(validate("a fully detailed prompt describing feature X"));
}
