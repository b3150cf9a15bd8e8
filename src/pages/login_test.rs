use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "secret"),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Email is required"));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Password is required"));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let req = validate_login_input("a@b.com", " pass ").unwrap();
    assert_eq!(req.password, " pass ");
}
