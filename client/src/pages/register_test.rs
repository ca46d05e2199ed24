use super::*;

#[test]
fn validate_registration_trims_name_and_email() {
    assert_eq!(
        validate_registration(" Jane ", " jane@example.com ", "secret1"),
        Ok(Registration {
            name: "Jane".to_owned(),
            email: "jane@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_requires_all_fields() {
    assert_eq!(validate_registration("", "a@b.com", "secret1"), Err(MISSING_FIELDS_MESSAGE.to_owned()));
    assert_eq!(validate_registration("Jane", "  ", "secret1"), Err(MISSING_FIELDS_MESSAGE.to_owned()));
    assert_eq!(validate_registration("Jane", "a@b.com", ""), Err(MISSING_FIELDS_MESSAGE.to_owned()));
}

#[test]
fn validate_registration_rejects_short_password() {
    assert_eq!(
        validate_registration("Jane", "a@b.com", "12345"),
        Err("Password must be at least 6 characters.".to_owned())
    );
}

#[test]
fn validate_registration_accepts_minimum_length_password() {
    let password = "x".repeat(MIN_PASSWORD_LEN);
    assert!(validate_registration("Jane", "a@b.com", &password).is_ok());

    let short = "x".repeat(MIN_PASSWORD_LEN - 1);
    let message = validate_registration("Jane", "a@b.com", &short).unwrap_err();
    assert!(message.contains(&MIN_PASSWORD_LEN.to_string()), "{message}");
}
