use super::*;

#[test]
fn every_role_has_exactly_one_route() {
    for role in Role::ALL {
        let entries = ROLE_ROUTES.iter().filter(|(r, _)| *r == role).count();
        assert_eq!(entries, 1, "role {role} must appear once in ROLE_ROUTES");
    }
    assert_eq!(ROLE_ROUTES.len(), Role::ALL.len());
}

#[test]
fn route_table_matches_canonical_paths() {
    assert_eq!(route_for_role("super-admin"), "/dashboard/superadmin");
    assert_eq!(route_for_role("contributor"), "/dashboard/contributor");
    assert_eq!(route_for_role("annotator"), "/dashboard/annotator");
    assert_eq!(route_for_role("researcher"), "/dashboard/researcher");
    assert_eq!(route_for_role("ethics-officer"), "/dashboard/ethicsofficer");
}

#[test]
fn unknown_role_routes_home() {
    assert_eq!(route_for_role("zzz"), HOME_ROUTE);
    assert_eq!(route_for_role(""), HOME_ROUTE);
    assert_eq!(route_for_role("Researcher"), HOME_ROUTE);
}

#[test]
fn legacy_ethics_officer_spelling_is_accepted() {
    assert_eq!(Role::parse("ethicsofficer"), Some(Role::EthicsOfficer));
    assert_eq!(route_for_role("ethicsofficer"), "/dashboard/ethicsofficer");
}

#[test]
fn as_str_round_trips_through_parse() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn serde_uses_canonical_spelling() {
    let json = serde_json::to_string(&Role::EthicsOfficer).unwrap();
    assert_eq!(json, "\"ethics-officer\"");
    let legacy: Role = serde_json::from_str("\"ethicsofficer\"").unwrap();
    assert_eq!(legacy, Role::EthicsOfficer);
    assert!(serde_json::from_str::<Role>("\"zzz\"").is_err());
}

#[test]
fn display_name_falls_back_to_user() {
    assert_eq!(display_name_for("annotator"), "Annotator");
    assert_eq!(display_name_for("zzz"), "User");
}

#[test]
fn nav_items_are_rooted_at_role_route() {
    for role in Role::ALL {
        let items = role.nav_items();
        assert_eq!(items[0].title, "Overview");
        assert_eq!(items[0].href, role.route());
        assert!(items.iter().all(|item| item.href.starts_with(role.route())));
    }
}
