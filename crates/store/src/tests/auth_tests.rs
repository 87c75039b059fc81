use crate::Credentials;

#[test]
fn verify_plain() {
    let creds = Credentials::new("username", "password");
    assert!(creds.verify("username", "password"));
    assert!(!creds.verify("username", "Password"));
    assert!(!creds.verify("", ""));
}

#[test]
fn verify_basic_header() {
    let creds = Credentials::new("username", "password");
    // base64("username:password")
    assert!(creds.verify_basic("Basic dXNlcm5hbWU6cGFzc3dvcmQ="));
    assert!(creds.verify_basic(&creds.to_basic()));
}

#[test]
fn verify_basic_rejects_malformed() {
    let creds = Credentials::new("username", "password");
    assert!(!creds.verify_basic(""));
    assert!(!creds.verify_basic("Bearer dXNlcm5hbWU6cGFzc3dvcmQ="));
    assert!(!creds.verify_basic("Basic !!!not-base64!!!"));
    // base64("username") with no colon
    assert!(!creds.verify_basic("Basic dXNlcm5hbWU="));
}

#[test]
fn debug_hides_password() {
    let creds = Credentials::new("username", "hunter2");
    let dbg = format!("{creds:?}");
    assert!(dbg.contains("username"));
    assert!(!dbg.contains("hunter2"));
}
