use std::cell::RefCell;
use std::rc::Rc;

use any_spawner::Executor;
use leptos::reactive::owner::Owner;

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
fn pending_when_no_user() {
    assert_eq!(evaluate_guard(&AuthState::default(), Role::Annotator), GuardDecision::Pending);
}

#[test]
fn pending_while_login_in_flight() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert_eq!(evaluate_guard(&state, Role::Researcher), GuardDecision::Pending);
}

#[test]
fn allow_when_role_matches() {
    for role in Role::ALL {
        assert_eq!(evaluate_guard(&signed_in(role.as_str()), role), GuardDecision::Allow);
    }
}

#[test]
fn mismatch_redirects_to_users_own_route() {
    assert_eq!(
        evaluate_guard(&signed_in("researcher"), Role::Annotator),
        GuardDecision::Redirect("/dashboard/researcher")
    );
}

#[test]
fn unknown_role_redirects_home() {
    for required in Role::ALL {
        assert_eq!(evaluate_guard(&signed_in("zzz"), required), GuardDecision::Redirect("/"));
    }
}

#[test]
fn legacy_ethics_officer_role_is_allowed_on_its_dashboard() {
    assert_eq!(evaluate_guard(&signed_in("ethicsofficer"), Role::EthicsOfficer), GuardDecision::Allow);
}

#[test]
fn redirect_target_is_a_fixed_point() {
    // After redirecting, the destination's guard must allow the same session.
    for user_role in Role::ALL {
        for required in Role::ALL {
            let state = signed_in(user_role.as_str());
            if let GuardDecision::Redirect(target) = evaluate_guard(&state, required) {
                assert_eq!(target, user_role.route());
                assert_eq!(evaluate_guard(&state, user_role), GuardDecision::Allow);
            }
        }
    }
}

#[test]
fn latch_issues_mismatch_redirect_exactly_once() {
    let latch = RedirectLatch::default();
    let state = signed_in("researcher");
    let issued: Vec<_> = (0..3)
        .filter_map(|_| latch.next(evaluate_guard(&state, Role::Annotator)))
        .collect();
    assert_eq!(issued, vec!["/dashboard/researcher"]);
}

#[test]
fn latch_never_navigates_for_matching_role() {
    let latch = RedirectLatch::default();
    let state = signed_in("annotator");
    for _ in 0..3 {
        assert_eq!(latch.next(evaluate_guard(&state, Role::Annotator)), None);
    }
}

#[test]
fn latch_ignores_pending() {
    let latch = RedirectLatch::default();
    assert_eq!(latch.next(GuardDecision::Pending), None);
    assert_eq!(latch.next(GuardDecision::Allow), None);
}

#[test]
fn latch_issues_new_target_when_session_role_changes() {
    let latch = RedirectLatch::default();
    assert_eq!(
        latch.next(evaluate_guard(&signed_in("researcher"), Role::Annotator)),
        Some("/dashboard/researcher")
    );
    assert_eq!(
        latch.next(evaluate_guard(&signed_in("contributor"), Role::Annotator)),
        Some("/dashboard/contributor")
    );
}

// Effect wiring: needs a reactive owner and a local executor to run effects.
#[cfg(not(feature = "hydrate"))]
#[test]
fn guard_effect_navigates_once_across_repeated_updates() {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();

    let (auth, set_auth) = signal(AuthState::default());
    let visits = Rc::new(RefCell::new(Vec::<(String, bool)>::new()));
    let recorded = Rc::clone(&visits);
    install_role_guard(auth, Role::Annotator, move |path: &str, options: NavigateOptions| {
        recorded.borrow_mut().push((path.to_owned(), options.replace));
    });

    Executor::poll_local();
    assert!(visits.borrow().is_empty());

    for _ in 0..3 {
        set_auth.set(signed_in("researcher"));
        Executor::poll_local();
    }
    assert_eq!(*visits.borrow(), vec![("/dashboard/researcher".to_owned(), true)]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn guard_effect_stays_put_for_matching_role() {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();

    let (auth, set_auth) = signal(signed_in("annotator"));
    let visits = Rc::new(RefCell::new(Vec::<String>::new()));
    let recorded = Rc::clone(&visits);
    install_role_guard(auth, Role::Annotator, move |path: &str, _: NavigateOptions| {
        recorded.borrow_mut().push(path.to_owned());
    });

    for _ in 0..3 {
        Executor::poll_local();
        set_auth.set(signed_in("annotator"));
    }
    Executor::poll_local();
    assert!(visits.borrow().is_empty());
}
