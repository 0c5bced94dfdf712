//! Property-based tests for showcase-core using proptest
//!
//! These tests verify invariants that should hold for all inputs.

use proptest::prelude::*;
use showcase_core::{
    AuthDecision, Credential, DenyReason, DetailTable, NavError, Navigator, RouteParams,
    SessionGate, ACCEPTED_EMAIL, ACCEPTED_PASSWORD,
};

// ============================================
// Strategies
// ============================================

/// Strings with at least one non-whitespace character
fn arb_non_blank() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9@._-]{0,8}[a-zA-Z0-9@._-][ a-zA-Z0-9@._-]{0,24}"
}

#[derive(Debug, Clone)]
enum NavOp {
    Push(&'static str, Option<String>),
    Replace(&'static str, Option<String>),
    Back,
}

fn arb_route_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("login"), Just("dashboard"), Just("detail")]
}

fn arb_nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        (arb_route_id(), proptest::option::of("[0-9]{1,3}")).prop_map(|(r, p)| NavOp::Push(r, p)),
        (arb_route_id(), proptest::option::of("[0-9]{1,3}"))
            .prop_map(|(r, p)| NavOp::Replace(r, p)),
        Just(NavOp::Back),
    ]
}

fn apply(nav: &mut Navigator, op: &NavOp) {
    match op {
        NavOp::Push(route, param) => nav
            .push(route, param.clone().map(RouteParams::id))
            .unwrap(),
        NavOp::Replace(route, param) => nav
            .replace(route, param.clone().map(RouteParams::id))
            .unwrap(),
        NavOp::Back => {
            nav.back();
        }
    }
}

// ============================================
// Session gate
// ============================================

proptest! {
    #[test]
    fn prop_only_the_accepted_pair_is_admitted(
        email in arb_non_blank(),
        password in arb_non_blank(),
    ) {
        let decision = SessionGate::default().authenticate(&Credential::new(&email, &password));
        if email == ACCEPTED_EMAIL && password == ACCEPTED_PASSWORD {
            prop_assert_eq!(decision, AuthDecision::Admit);
        } else {
            prop_assert_eq!(decision, AuthDecision::Deny(DenyReason::InvalidCredentials));
        }
    }

    #[test]
    fn prop_blank_field_is_missing(
        blank in "[ \t]{0,6}",
        other in arb_non_blank(),
        blank_email in any::<bool>(),
    ) {
        let credential = if blank_email {
            Credential::new(&blank, &other)
        } else {
            Credential::new(&other, &blank)
        };
        prop_assert_eq!(
            SessionGate::default().authenticate(&credential),
            AuthDecision::Deny(DenyReason::MissingCredentials)
        );
    }
}

// ============================================
// Navigator
// ============================================

proptest! {
    #[test]
    fn prop_stack_is_never_empty(ops in proptest::collection::vec(arb_nav_op(), 0..40)) {
        let mut nav = Navigator::default();
        for op in &ops {
            apply(&mut nav, op);
            prop_assert!(nav.len() >= 1);
        }
    }

    #[test]
    fn prop_push_then_back_restores(
        ops in proptest::collection::vec(arb_nav_op(), 0..20),
        id in "[0-9]{1,3}",
    ) {
        let mut nav = Navigator::default();
        for op in &ops {
            apply(&mut nav, op);
        }

        let before = nav.stack().clone();
        nav.push("detail", Some(RouteParams::id(id))).unwrap();
        prop_assert_eq!(nav.len(), before.len() + 1);
        prop_assert!(nav.back());
        prop_assert_eq!(nav.stack(), &before);
    }

    #[test]
    fn prop_replace_keeps_length(
        ops in proptest::collection::vec(arb_nav_op(), 0..20),
        route in arb_route_id(),
    ) {
        let mut nav = Navigator::default();
        for op in &ops {
            apply(&mut nav, op);
        }

        let len = nav.len();
        nav.replace(route, None).unwrap();
        prop_assert_eq!(nav.len(), len);
    }

    #[test]
    fn prop_unknown_route_never_mutates(
        ops in proptest::collection::vec(arb_nav_op(), 0..20),
        route in "[a-z]{1,12}",
    ) {
        prop_assume!(!["login", "dashboard", "detail"].contains(&route.as_str()));

        let mut nav = Navigator::default();
        for op in &ops {
            apply(&mut nav, op);
        }

        let before = nav.stack().clone();
        prop_assert_eq!(nav.push(&route, None), Err(NavError::RouteNotFound(route.clone())));
        prop_assert_eq!(nav.replace(&route, None), Err(NavError::RouteNotFound(route.clone())));
        prop_assert_eq!(nav.stack(), &before);
    }
}

// ============================================
// Detail lookup
// ============================================

proptest! {
    #[test]
    fn prop_detail_resolve_is_total(id in ".{0,16}") {
        let table = DetailTable::builtin();
        let detail = table.resolve(&id);
        if table.contains(&id) {
            prop_assert_eq!(detail.id, id.as_str());
        } else {
            prop_assert_eq!(detail, table.resolve("1"));
        }
    }
}
