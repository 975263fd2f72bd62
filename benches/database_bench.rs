// ABOUTME: Criterion benchmarks for store operations using the SQLite backend
// ABOUTME: Measures guarded inserts, name lookups, and aggregation over seeded rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Criterion benchmarks for store operations.
//!
//! Measures the guarded insert path, lookups by user name, and count
//! aggregation using an in-memory `SQLite` database.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;
use vitalog::database::Database;
use vitalog::models::NewUser;

/// Counter for unique user generation across benchmark iterations
static USER_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Generate a unique test user for benchmarking
fn generate_test_user() -> NewUser {
    let counter = USER_COUNTER.fetch_add(1, Ordering::SeqCst);
    NewUser::new(format!("bench_user_{counter}"), 30)
        .with_gender("Female")
        .with_body(150.0, 5.5)
        .with_contact(format!("bench_user_{counter}@example.com"))
}

/// Create an in-memory database with the full schema
async fn create_test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.create_schema().await.unwrap();
    db
}

/// Benchmark the guarded insert path
fn bench_guarded_insert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("database_guarded_insert");

    let db = rt.block_on(create_test_db());

    group.bench_function("single_user", |b| {
        b.iter(|| {
            let user = generate_test_user();
            rt.block_on(async { db.insert_user_guarded(black_box(&user)).await })
        });
    });

    group.throughput(Throughput::Elements(10));
    group.bench_function("batch_10_users", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..10 {
                    let user = generate_test_user();
                    let _ = db.insert_user_guarded(&user).await;
                }
            });
        });
    });

    group.finish();
}

/// Benchmark user lookup operations
fn bench_user_lookup(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("database_user_lookup");

    let db = rt.block_on(create_test_db());

    // Pre-populate with users for lookup tests
    let mut user_names = Vec::new();
    rt.block_on(async {
        for _ in 0..100 {
            let user = generate_test_user();
            user_names.push(user.user_name.clone());
            let _ = db.insert_user_guarded(&user).await;
        }
    });

    group.bench_function("by_name", |b| {
        let mut index = 0;
        b.iter(|| {
            let name = &user_names[index % user_names.len()];
            index += 1;
            rt.block_on(async { db.get_user_by_name(black_box(name)).await })
        });
    });

    group.bench_function("by_name_miss", |b| {
        b.iter(|| rt.block_on(async { db.get_user_by_name(black_box("nonexistent")).await }));
    });

    group.finish();
}

/// Benchmark count aggregation at different table sizes
fn bench_aggregation(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("database_aggregation");

    for user_count in [100, 500, 1000] {
        let db = rt.block_on(create_test_db());
        rt.block_on(async {
            for _ in 0..user_count {
                let user = generate_test_user();
                let _ = db.insert_user_guarded(&user).await;
            }
        });

        group.bench_with_input(BenchmarkId::new("user_count", user_count), &db, |b, db| {
            b.iter(|| rt.block_on(async { db.user_count().await }));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_guarded_insert,
    bench_user_lookup,
    bench_aggregation,
);
criterion_main!(benches);
