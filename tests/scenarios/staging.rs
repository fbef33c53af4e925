//! Staging files one by one and from an export archive.

use crate::common::*;

use xdetex::application::{IntakeStatus, IntakeUseCase, Offer};
use xdetex::domain::entities::SessionState;
use xdetex::domain::ports::NoopEventSink;
use xdetex::infrastructure::ZipArchiveReader;

type Intake = IntakeUseCase<ZipArchiveReader, NoopEventSink>;

fn start(gateway: &RecordingGateway) -> Intake {
    IntakeUseCase::start(
        ZipArchiveReader::new(),
        NoopEventSink,
        gateway,
        PARTICIPANT,
        manifest(),
    )
}

/// Empty session, three of five files offered one at a time.
#[test]
fn scenario_three_individual_files_leave_two_missing() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);
    assert_eq!(intake.session().state(), SessionState::Empty);

    for name in &REQUIRED[..3] {
        intake
            .offer(Offer::new().with(*name, payload(name)))
            .unwrap();
    }

    let session = intake.session();
    assert_eq!(session.found_count(), 3);
    assert_eq!(session.missing(), &REQUIRED[3..]);
    assert!(!session.ready_to_submit());
    assert_eq!(session.state(), SessionState::PartiallyStaged);
    assert_eq!(
        *intake.status(),
        IntakeStatus::FilesMissing {
            found: 3,
            total: 5,
            from_archive: false
        }
    );
    assert_eq!(intake.progress(), "3/5 files uploaded");
}

/// A nested export with two unrelated files stages exactly the five names.
#[test]
fn scenario_archive_with_everything_is_ready() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    let archive = export_zip(&[
        "facebook-export/profile_information/profile_information.json",
        "facebook-export\\messages\\inbox.json",
    ]);
    let report = intake
        .offer(Offer::new().with("facebook-export.zip", archive))
        .unwrap();

    let session = intake.session();
    let names: Vec<&str> = session.accepted().iter().map(|f| f.name()).collect();
    assert_eq!(names, REQUIRED);
    assert!(session.missing().is_empty());
    assert_eq!(session.extra(), ["profile_information.json", "inbox.json"]);
    assert!(session.ready_to_submit());
    assert_eq!(report.archives_read, 1);
    assert_eq!(
        *intake.status(),
        IntakeStatus::ReadyToSubmit { from_archive: true }
    );

    // Payloads come from the archive entries, not placeholders
    assert_eq!(session.accepted()[0].payload(), payload(REQUIRED[0]).as_slice());
}

/// Removing one of four staged files grows `missing` and keeps it not ready.
#[test]
fn scenario_remove_from_four_staged() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    let mut offer = Offer::new();
    for name in &REQUIRED[..4] {
        offer.add(*name, payload(name));
    }
    intake.offer(offer).unwrap();
    assert_eq!(intake.session().missing().len(), 1);

    assert!(intake.remove(REQUIRED[1]).unwrap());

    let session = intake.session();
    assert_eq!(session.missing(), [REQUIRED[1], REQUIRED[4]]);
    assert!(!session.ready_to_submit());
    assert_eq!(session.found_count(), 3);
}

/// Completing a partial set with the last file flips to ready.
#[test]
fn scenario_last_file_completes_the_set() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    let mut offer = Offer::new();
    for name in &REQUIRED[..4] {
        offer.add(*name, payload(name));
    }
    intake.offer(offer).unwrap();
    assert!(!intake.session().ready_to_submit());

    intake
        .offer(Offer::new().with(REQUIRED[4], payload(REQUIRED[4])))
        .unwrap();
    assert!(intake.session().ready_to_submit());
    assert_eq!(intake.session().state(), SessionState::Ready);
}

/// Re-offering an already staged file changes nothing and says so.
#[test]
fn scenario_reoffer_reports_nothing_new() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    intake
        .offer(Offer::new().with(REQUIRED[0], payload(REQUIRED[0])))
        .unwrap();
    let report = intake
        .offer(Offer::new().with(REQUIRED[0], b"{\"other\":true}".to_vec()))
        .unwrap();

    assert!(report.summary.added.is_empty());
    assert_eq!(*intake.status(), IntakeStatus::NothingNew);
    assert_eq!(intake.session().accepted().len(), 1);
    assert_eq!(
        intake.session().accepted()[0].payload(),
        payload(REQUIRED[0]).as_slice()
    );
}

/// An unreadable archive in a mixed selection leaves the session untouched.
#[test]
fn scenario_corrupt_archive_rejects_whole_offer() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    let offer = Offer::new()
        .with(REQUIRED[0], payload(REQUIRED[0]))
        .with("broken.zip", b"definitely not a zip".to_vec());
    let err = intake.offer(offer).unwrap_err();

    assert!(matches!(err, xdetex::XdetexError::CorruptArchive { .. }));
    assert!(intake.session().accepted().is_empty());
    assert_eq!(intake.session().state(), SessionState::Empty);
    assert_eq!(*intake.status(), IntakeStatus::ArchiveUnreadable);
}

/// Files of other types are reported but never staged.
#[test]
fn scenario_unsupported_files_are_skipped() {
    let gateway = RecordingGateway::new();
    let mut intake = start(&gateway);

    let report = intake
        .offer(
            Offer::new()
                .with("photo.png", vec![0x89, b'P', b'N', b'G'])
                .with(REQUIRED[2], payload(REQUIRED[2])),
        )
        .unwrap();

    assert_eq!(report.unsupported, vec!["photo.png"]);
    assert_eq!(intake.session().found_count(), 1);
    assert!(intake.session().extra().is_empty());
}

/// A failing "already uploaded" check still yields a usable empty session.
#[test]
fn scenario_failed_upload_check_starts_empty() {
    let gateway = RecordingGateway {
        fail_check: true,
        ..RecordingGateway::default()
    };
    let intake = start(&gateway);

    assert_eq!(gateway.checks.get(), 1);
    assert_eq!(intake.session().state(), SessionState::Empty);
    assert!(!intake.session().is_locked());
}
