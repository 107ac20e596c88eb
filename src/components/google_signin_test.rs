use super::*;

#[test]
fn authorize_url_carries_client_id_and_scope() {
    let url = authorize_url("client-123");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert!(url.contains("client_id=client-123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("scope=openid%20email"));
}

#[test]
fn authorize_url_percent_encodes_the_client_id() {
    let url = authorize_url("a b+c");
    assert!(url.contains("client_id=a%20b%2Bc"));
}

#[test]
fn authorize_url_with_empty_client_id_still_forms() {
    assert!(authorize_url("").contains("client_id=&"));
}
