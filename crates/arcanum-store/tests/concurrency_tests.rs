// Integration tests for concurrent callers sharing one backend

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use arcanum_core::model::House;
use arcanum_store::{BackendConfig, ConnectionFactory, CrudRepository};
use common::*;
use std::thread;

const THREADS: usize = 4;
const ROUNDS: usize = 50;

/// Create and list houses from several threads; return the error messages
fn hammer(factory: &ConnectionFactory) -> Vec<String> {
    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let houses = repo::<House>(factory);
            thread::spawn(move || {
                let mut errors = Vec::new();
                for i in 0..ROUNDS {
                    let mut house = House::new(format!("House {t}-{i}"), "Motto", i as i64);
                    if let Err(e) = houses.create(&mut house) {
                        errors.push(e.to_string());
                    }
                    if let Err(e) = houses.get_all() {
                        errors.push(e.to_string());
                    }
                }
                errors
            })
        })
        .collect();

    workers
        .into_iter()
        .flat_map(|w| w.join().expect("worker panicked"))
        .collect()
}

#[test]
fn test_concurrent_callers_on_in_memory_backend_all_succeed() {
    // Given: One in-memory backend shared by four threads
    let factory = setup_factory();

    // When: Each thread creates and lists houses fifty times
    let errors = hammer(&factory);

    // Then: No call fails and every house is stored
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(repo::<House>(&factory).count().unwrap(), (THREADS * ROUNDS) as i64);
}

#[test]
fn test_concurrent_callers_on_file_backend_all_succeed() {
    // Given: A file backend shared by four threads
    let dir = tempfile::tempdir().unwrap();
    let factory =
        ConnectionFactory::connect(&BackendConfig::file(dir.path().join("arcanum.db"))).unwrap();

    // When
    let errors = hammer(&factory);

    // Then
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(repo::<House>(&factory).count().unwrap(), (THREADS * ROUNDS) as i64);
    factory.shutdown();
}
