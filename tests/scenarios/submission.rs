//! Submitting a staged set and what happens afterwards.

use crate::common::*;

use std::cell::RefCell;

use xdetex::application::{IntakeStatus, IntakeUseCase, Offer};
use xdetex::domain::entities::SessionState;
use xdetex::domain::ports::{IntakeEvent, IntakeEventSink};
use xdetex::infrastructure::ZipArchiveReader;
use xdetex::XdetexError;

#[derive(Default)]
struct EventLog {
    events: RefCell<Vec<IntakeEvent>>,
}

impl IntakeEventSink for &EventLog {
    fn on_event(&self, event: IntakeEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn staged<'a>(
    gateway: &RecordingGateway,
    log: &'a EventLog,
    names: &[&str],
) -> IntakeUseCase<ZipArchiveReader, &'a EventLog> {
    let mut intake =
        IntakeUseCase::start(ZipArchiveReader::new(), log, gateway, PARTICIPANT, manifest());
    let mut offer = Offer::new();
    for name in names {
        offer.add(*name, payload(name));
    }
    if !offer.is_empty() {
        intake.offer(offer).unwrap();
    }
    intake
}

/// Submitting with files missing fails without touching the network.
#[test]
fn scenario_incomplete_submit_makes_no_call() {
    let gateway = RecordingGateway::new();
    let log = EventLog::default();
    let mut intake = staged(&gateway, &log, &REQUIRED[..3]);
    let before: Vec<String> = intake
        .session()
        .accepted()
        .iter()
        .map(|f| f.name().to_string())
        .collect();

    let err = intake.submit(&gateway).unwrap_err();

    match err {
        XdetexError::IncompleteSubmission {
            found,
            total,
            missing,
        } => {
            assert_eq!((found, total), (3, 5));
            assert_eq!(missing, REQUIRED[3..]);
        }
        other => panic!("expected IncompleteSubmission, got {other:?}"),
    }
    assert_eq!(gateway.upload_count(), 0);
    let after: Vec<String> = intake
        .session()
        .accepted()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(before, after);
    assert_eq!(
        *intake.status(),
        IntakeStatus::CannotSubmit { found: 3, total: 5 }
    );
    assert!(!log
        .events
        .borrow()
        .iter()
        .any(|e| matches!(e, IntakeEvent::SubmitStarted { .. })));
}

/// A successful submit locks the session against further offers.
#[test]
fn scenario_submitted_session_is_locked() {
    let gateway = RecordingGateway::new();
    let log = EventLog::default();
    let mut intake = staged(&gateway, &log, &REQUIRED);

    intake.submit(&gateway).unwrap();
    assert_eq!(intake.session().state(), SessionState::Submitted);
    assert_eq!(*intake.status(), IntakeStatus::UploadSucceeded);
    assert_eq!(*gateway.uploads.borrow(), vec![REQUIRED.map(String::from).to_vec()]);

    let accepted_before = intake.session().accepted().len();
    let err = intake
        .offer(Offer::new().with("extra.json", b"{}".to_vec()))
        .unwrap_err();
    assert!(matches!(err, XdetexError::SessionLocked));
    assert_eq!(intake.session().accepted().len(), accepted_before);

    let err = intake.remove(REQUIRED[0]).unwrap_err();
    assert!(matches!(err, XdetexError::SessionLocked));

    let err = intake.submit(&gateway).unwrap_err();
    assert!(matches!(err, XdetexError::SessionLocked));
    assert_eq!(gateway.upload_count(), 1);
}

/// A failed upload keeps every staged file so the participant can retry.
#[test]
fn scenario_failed_upload_can_be_retried() {
    let gateway = RecordingGateway::new();
    gateway.fail_upload.set(true);
    let log = EventLog::default();
    let mut intake = staged(&gateway, &log, &REQUIRED);

    let err = intake.submit(&gateway).unwrap_err();
    assert!(matches!(err, XdetexError::UploadFailed { status: Some(500), .. }));
    assert_eq!(intake.session().state(), SessionState::Ready);
    assert_eq!(intake.session().accepted().len(), 5);
    assert_eq!(*intake.status(), IntakeStatus::UploadFailed);

    gateway.fail_upload.set(false);
    intake.submit(&gateway).unwrap();
    assert_eq!(intake.session().state(), SessionState::Submitted);
    assert_eq!(gateway.upload_count(), 2);

    let events = log.events.borrow();
    assert!(events
        .iter()
        .any(|e| matches!(e, IntakeEvent::SubmitFailed { .. })));
    assert!(matches!(
        events.last(),
        Some(IntakeEvent::SubmitCompleted { file_count: 5 })
    ));
}

/// A participant who already uploaded starts locked and cannot stage.
#[test]
fn scenario_returning_participant_is_locked_from_the_start() {
    let gateway = RecordingGateway {
        already_uploaded: Some("2025-02-01T20:00:00".to_string()),
        ..RecordingGateway::default()
    };
    let log = EventLog::default();
    let mut intake =
        IntakeUseCase::start(ZipArchiveReader::new(), &log, &gateway, PARTICIPANT, manifest());

    assert_eq!(intake.session().state(), SessionState::Submitted);
    assert!(matches!(
        intake.status(),
        IntakeStatus::AlreadySubmitted { date: Some(_) }
    ));
    assert!(matches!(
        log.events.borrow().first(),
        Some(IntakeEvent::SessionStarted {
            already_submitted: true,
            ..
        })
    ));

    let err = intake
        .offer(Offer::new().with(REQUIRED[0], payload(REQUIRED[0])))
        .unwrap_err();
    assert!(matches!(err, XdetexError::SessionLocked));
}
