use super::*;

#[test]
fn normalized_username_trims_whitespace() {
    assert_eq!(normalized_username("  alice \n"), Some("alice".to_owned()));
}

#[test]
fn normalized_username_rejects_blank_input() {
    assert_eq!(normalized_username(""), None);
    assert_eq!(normalized_username("   "), None);
}
