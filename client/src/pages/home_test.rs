use super::*;
use crate::net::types::User;

fn signed_in(role: &str) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "a@luth.ng".to_owned(),
            role: role.to_owned(),
            name: None,
        }),
        token: Some("t".to_owned()),
        loading: false,
    }
}

#[test]
fn no_dashboard_link_when_signed_out() {
    assert_eq!(dashboard_link(&AuthState::default()), None);
}

#[test]
fn dashboard_link_follows_role() {
    assert_eq!(dashboard_link(&signed_in("researcher")), Some("/dashboard/researcher"));
    assert_eq!(dashboard_link(&signed_in("ethicsofficer")), Some("/dashboard/ethicsofficer"));
}

#[test]
fn unknown_role_gets_no_dashboard_link() {
    assert_eq!(dashboard_link(&signed_in("zzz")), None);
}
