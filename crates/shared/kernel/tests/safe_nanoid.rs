use shub_kernel::SAFE_ALPHABET;
use shub_kernel::safe_nanoid;
use std::collections::HashSet;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn ids_do_not_repeat() {
    let ids: HashSet<String> = (0..500).map(|_| safe_nanoid!()).collect();
    assert_eq!(ids.len(), 500);
}
