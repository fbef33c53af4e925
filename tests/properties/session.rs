//! Property tests for the intake session state machine.

use std::sync::Arc;

use proptest::prelude::*;

use xdetex::domain::entities::{IntakeSession, OfferedFile, SessionState};
use xdetex::domain::value_objects::RequiredManifest;

const NAMES: &[&str] = &[
    "time_spent_on_facebook.json",
    "your_comment_active_days.json",
    "facebook_reels_usage_information.json",
    "your_notifications_tab_activity.json",
    "your_facebook_watch_activity_in_the_last_28_days.json",
    "inbox.json",
];

#[derive(Debug, Clone)]
enum Op {
    Offer(Vec<&'static str>),
    Remove(&'static str),
    Submit { succeeds: bool },
}

fn op() -> impl Strategy<Value = Op> {
    let name = proptest::sample::select(NAMES);
    prop_oneof![
        4 => proptest::collection::vec(name.clone(), 0..4).prop_map(Op::Offer),
        2 => name.prop_map(Op::Remove),
        1 => any::<bool>().prop_map(|succeeds| Op::Submit { succeeds }),
    ]
}

fn apply(session: &mut IntakeSession, op: &Op) {
    match op {
        Op::Offer(names) => {
            let files = names
                .iter()
                .map(|n| OfferedFile::json(*n, b"{}".to_vec()))
                .collect();
            let _ = session.offer(files, Vec::new());
        }
        Op::Remove(name) => {
            let _ = session.remove(name);
        }
        Op::Submit { succeeds } => {
            if session.begin_submit().is_ok() {
                session.finish_submit(*succeeds);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ready_to_submit holds exactly when nothing is missing.
    #[test]
    fn property_ready_iff_nothing_missing(
        ops in proptest::collection::vec(op(), 0..16)
    ) {
        let manifest = Arc::new(RequiredManifest::facebook_export());
        let mut session = IntakeSession::new("p@example.com", manifest);

        for op in &ops {
            apply(&mut session, op);
            if session.is_locked() {
                continue;
            }
            prop_assert_eq!(session.ready_to_submit(), session.missing().is_empty());
            let expected_state = if session.accepted().is_empty() {
                SessionState::Empty
            } else if session.missing().is_empty() {
                SessionState::Ready
            } else {
                SessionState::PartiallyStaged
            };
            prop_assert_eq!(session.state(), expected_state);
        }
    }

    /// PROPERTY: once submitted, no operation changes the accepted set.
    #[test]
    fn property_submitted_is_terminal(
        ops in proptest::collection::vec(op(), 0..12)
    ) {
        let manifest = Arc::new(RequiredManifest::facebook_export());
        let mut session = IntakeSession::new("p@example.com", manifest);
        let all: Vec<OfferedFile> = NAMES[..5]
            .iter()
            .map(|n| OfferedFile::json(*n, b"{}".to_vec()))
            .collect();
        session.offer(all, Vec::new()).unwrap();
        session.begin_submit().unwrap();
        session.finish_submit(true);
        prop_assert_eq!(session.state(), SessionState::Submitted);

        let before = session.accepted().to_vec();
        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(session.state(), SessionState::Submitted);
            prop_assert_eq!(session.accepted(), before.as_slice());
        }
    }
}
