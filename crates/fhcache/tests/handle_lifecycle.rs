//! End-to-end behaviour of the caching handler as a protocol engine sees it.

use std::sync::Arc;

use fhcache::CachingHandler;
use fhcache_core::{Filesystem, NfsError, NfsHandler, NfsStatus};
use fhcache_test::{RecordingHandler, init_test_logging, test_fs, test_limit, test_path};

fn handler(limit: usize) -> (CachingHandler<RecordingHandler>, Arc<dyn Filesystem>) {
    init_test_logging();
    let fs = test_fs();
    let handler = CachingHandler::new(RecordingHandler::new(Arc::clone(&fs)), test_limit(limit));
    (handler, fs)
}

#[test]
fn test_walk_down_and_back_up_keeps_directories_live() {
    let (handler, fs) = handler(3);

    let docs = handler.to_handle(&fs, &test_path("docs"));
    let file = handler.to_handle(&fs, &test_path("docs/a.txt"));
    let tmp = handler.to_handle(&fs, &test_path("tmp"));

    // Reading the file refreshes /docs along with it.
    let (_, path) = handler.from_handle(&file).unwrap();
    assert_eq!(path, test_path("docs/a.txt"));

    // /tmp is now the least recently used entry and gets evicted.
    let reports = handler.to_handle(&fs, &test_path("docs/reports"));
    assert!(matches!(handler.from_handle(&tmp), Err(NfsError::StaleHandle)));

    assert_eq!(handler.from_handle(&docs).unwrap().1, test_path("docs"));
    assert_eq!(handler.from_handle(&file).unwrap().1, test_path("docs/a.txt"));
    assert_eq!(handler.from_handle(&reports).unwrap().1, test_path("docs/reports"));

    // One more mint pushes out one of the originals.
    handler.to_handle(&fs, &test_path("elsewhere"));
    let live = [&docs, &file, &reports]
        .iter()
        .filter(|h| handler.handles().contains(h))
        .count();
    assert_eq!(live, 2);
}

#[test]
fn test_overflow_by_one_makes_first_handle_stale() {
    let (handler, fs) = handler(4);
    let minted: Vec<_> = (0..5)
        .map(|i| handler.to_handle(&fs, &test_path(&format!("f{i}"))))
        .collect();

    let err = handler.from_handle(&minted[0]).unwrap_err();
    assert_eq!(err.status(), NfsStatus::Stale);
    assert_eq!(handler.handles().len(), 4);
}

#[tokio::test]
async fn test_paginated_listing_uses_one_snapshot() {
    let (handler, fs) = handler(8);
    let dir = test_path("docs");
    let dir_handle = handler.to_handle(&fs, &dir);

    let (resolved_fs, resolved_path) = handler.from_handle(&dir_handle).unwrap();
    let listing = resolved_fs.read_dir(&resolved_path).await.unwrap();
    let verifier = handler.verifier_for(&dir_handle, listing.clone());

    // A follow-up page with the same verifier sees the same snapshot.
    let snapshot = handler.data_for_verifier(&dir_handle, verifier).unwrap();
    assert_eq!(&*snapshot, listing.as_slice());

    // The verifier is bound to this directory's handle only.
    let other_handle = handler.to_handle(&fs, &test_path("tmp"));
    assert!(handler.data_for_verifier(&other_handle, verifier).is_none());
}

#[test]
fn test_verifier_outlives_evicted_directory_handle() {
    init_test_logging();
    let fs = test_fs();
    let handler = CachingHandler::with_verifier_limit(
        RecordingHandler::new(Arc::clone(&fs)),
        test_limit(1),
        test_limit(4),
    );

    let dir_handle = handler.to_handle(&fs, &test_path("docs"));
    let verifier = handler.verifier_for(&dir_handle, Vec::new());
    handler.to_handle(&fs, &test_path("tmp"));

    assert!(matches!(handler.from_handle(&dir_handle), Err(NfsError::StaleHandle)));
    assert!(handler.data_for_verifier(&dir_handle, verifier).is_some());
}

#[test]
fn test_concurrent_minting_respects_limit() {
    let (handler, fs) = handler(64);
    let handler = Arc::new(handler);

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let handler = Arc::clone(&handler);
            let fs = Arc::clone(&fs);
            scope.spawn(move || {
                for i in 0..200 {
                    let path = test_path(&format!("w{worker}/f{i}"));
                    let handle = handler.to_handle(&fs, &path);
                    // Other workers may evict it at any point; either outcome is fine.
                    match handler.from_handle(&handle) {
                        Ok((_, resolved)) => assert_eq!(resolved, path),
                        Err(err) => assert_eq!(err.status(), NfsStatus::Stale),
                    }
                    assert!(handler.handles().len() <= 64);
                }
            });
        }
    });

    assert_eq!(handler.handles().len(), 64);
}
