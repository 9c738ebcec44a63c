#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use photo_importer_core::{ImportError, ImportRunner, SUCCESS_MESSAGE};
use photo_importer_models::ProgressEvent;

#[path = "../common/mod.rs"]
mod common;

use common::{create_test_file, jpeg_with_capture_time, list_files, set_modified_date};

fn run(runner: &ImportRunner) -> (Result<photo_importer_models::RunSummary, ImportError>, Vec<ProgressEvent>) {
    let mut events = Vec::new();
    let result = runner.execute(|event| events.push(event));
    (result, events)
}

#[test]
fn test_card_layout_is_organized_by_day() {
    let temp_dir = TempDir::new().unwrap();
    let card = temp_dir.path().join("card");
    let library = temp_dir.path().join("library");

    create_test_file(&card.join("DCIM/100CANON/IMG_0001.JPG"), &jpeg_with_capture_time("2023:05:10 14:22:01"));
    create_test_file(&card.join("DCIM/100CANON/IMG_0002.jpeg"), &jpeg_with_capture_time("2023:05:10 18:00:00"));
    create_test_file(&card.join("DCIM/100CANON/IMG_0003.JPG"), &jpeg_with_capture_time("2023:05:11 07:30:00"));
    let raw = card.join("DCIM/100CANON/IMG_0004.CR2");
    create_test_file(&raw, b"raw sensor data");
    set_modified_date(&raw, 2023, 5, 11);
    let screenshot = card.join("Screenshot.PNG");
    create_test_file(&screenshot, b"png bytes");
    set_modified_date(&screenshot, 2019, 2, 28);
    create_test_file(&card.join("MISC/AUTPRINT.MRK"), b"print order");
    create_test_file(&card.join("notes.txt"), b"hello");

    let (result, events) = run(&ImportRunner::new(&card, &library));

    let summary = result.unwrap();
    assert_eq!(summary.copied, 5);
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        list_files(&library),
        [
            "2019/2019-02-28/Screenshot.PNG",
            "2023/2023-05-10/IMG_0001.JPG",
            "2023/2023-05-10/IMG_0002.jpeg",
            "2023/2023-05-11/IMG_0003.JPG",
            "2023/2023-05-11/IMG_0004.CR2",
        ]
    );
    assert_eq!(events.first(), Some(&ProgressEvent::Total { total: 5 }));
    assert_eq!(events.last(), Some(&ProgressEvent::Completed(SUCCESS_MESSAGE.to_string())));
}

#[test]
fn test_progress_is_monotonic_and_reaches_total() {
    let temp_dir = TempDir::new().unwrap();
    let card = temp_dir.path().join("card");
    for i in 0..6 {
        let photo = card.join(format!("IMG_{i:04}.png"));
        create_test_file(&photo, b"png");
        set_modified_date(&photo, 2024, 3, 1);
    }

    let (result, events) = run(&ImportRunner::new(&card, temp_dir.path().join("library")));
    result.unwrap();

    let progress: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Progress { current, total } => {
                assert_eq!(*total, 6);
                Some(*current)
            }
            _ => None,
        })
        .collect();
    assert_eq!(progress, (0..=6).collect::<Vec<_>>());
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
}

#[test]
fn test_second_run_copies_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let card = temp_dir.path().join("card");
    let library = temp_dir.path().join("library");
    create_test_file(&card.join("IMG_0001.JPG"), &jpeg_with_capture_time("2023:05:10 14:22:01"));
    create_test_file(&card.join("IMG_0002.JPG"), &jpeg_with_capture_time("2023:05:12 09:00:00"));

    let first = run(&ImportRunner::new(&card, &library)).0.unwrap();
    let before = list_files(&library);
    let second = run(&ImportRunner::new(&card, &library)).0.unwrap();

    assert_eq!(first.copied, 2);
    assert_eq!((second.copied, second.skipped, second.bytes_copied), (0, 2, 0));
    assert_eq!(list_files(&library), before);
}

#[test]
fn test_name_clash_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let card = temp_dir.path().join("card");
    let library = temp_dir.path().join("library");
    create_test_file(&card.join("a/IMG_0001.JPG"), &jpeg_with_capture_time("2023:05:10 10:00:00"));
    create_test_file(&card.join("b/IMG_0001.JPG"), &jpeg_with_capture_time("2023:05:10 11:00:00"));

    let summary = run(&ImportRunner::new(&card, &library)).0.unwrap();

    assert_eq!((summary.copied, summary.skipped), (1, 1));
    assert_eq!(
        fs::read(library.join("2023/2023-05-10/IMG_0001.JPG")).unwrap(),
        jpeg_with_capture_time("2023:05:10 10:00:00")
    );
}

#[test]
fn test_blocked_day_folder_aborts_with_error_message() {
    let temp_dir = TempDir::new().unwrap();
    let card = temp_dir.path().join("card");
    let library = temp_dir.path().join("library");
    create_test_file(&card.join("IMG_0001.JPG"), &jpeg_with_capture_time("2023:05:10 14:22:01"));
    create_test_file(&card.join("IMG_0002.JPG"), &jpeg_with_capture_time("2023:05:11 14:22:01"));
    // The second photo's day folder is occupied by a file.
    create_test_file(&library.join("2023/2023-05-11"), b"in the way");

    let (result, events) = run(&ImportRunner::new(&card, &library));

    assert!(matches!(result, Err(ImportError::Io { .. })));
    assert!(library.join("2023/2023-05-10/IMG_0001.JPG").is_file());
    assert!(events.contains(&ProgressEvent::Progress { current: 1, total: 2 }));
    assert!(!events.contains(&ProgressEvent::Progress { current: 2, total: 2 }));
    match events.last() {
        Some(ProgressEvent::Failed(message)) => {
            assert!(message.starts_with("Error: "));
            assert!(message.contains("2023-05-11"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
