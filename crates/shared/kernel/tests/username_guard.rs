use shub_kernel::prelude::{GuardError, UsernameGuard};

#[test]
fn username_guard_strips_and_validates() {
    assert_eq!(UsernameGuard::normalize("@nasa").unwrap(), "nasa");
    assert_eq!(UsernameGuard::normalize("fifteen_chars_x").unwrap(), "fifteen_chars_x");

    let err = UsernameGuard::normalize("").unwrap_err();
    assert!(matches!(err, GuardError::Validation { .. }));
    assert!(err.to_string().contains("Please enter a username"));

    let err = UsernameGuard::normalize("bad/name").unwrap_err();
    assert!(err.to_string().contains("(Username)"));
}
