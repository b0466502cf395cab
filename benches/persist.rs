use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use address_book::prelude::{AddressBook, Contact, ContactStore, CsvFileStorage};
use tempfile::TempDir;

// Every mutation rewrites the whole file, so the cost grows with the book
fn make_contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| {
            Contact::new(
                "User".to_string(),
                format!("0888{i:07}"),
                format!("user{i}@yahoo.com"),
                if i % 2 == 0 { "Engineer" } else { "Teacher" }.to_string(),
            )
        })
        .collect()
}

fn seeded_storage(n: usize) -> (TempDir, CsvFileStorage) {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = CsvFileStorage::new(dir.path().join("address_book.csv"));
    storage.save(&make_contacts(n)).expect("seed file");
    (dir, storage)
}

fn bench_persist(c: &mut Criterion) {
    for n in [100usize, 1_000] {
        let contacts = make_contacts(n);
        let (_dir, storage) = seeded_storage(0);

        c.bench_function(&format!("save_{n}"), |b| {
            b.iter(|| storage.save(black_box(&contacts)).expect("save"))
        });

        let (_dir, storage) = seeded_storage(n);
        c.bench_function(&format!("load_{n}"), |b| {
            b.iter(|| black_box(storage.load().expect("load")))
        });

        c.bench_function(&format!("add_{n}"), |b| {
            b.iter_batched(
                || {
                    let (dir, storage) = seeded_storage(n);
                    (dir, AddressBook::open(Box::new(storage)))
                },
                |(_dir, mut book)| {
                    book.add(
                        "Alice".to_string(),
                        "12345".to_string(),
                        "a@x.com".to_string(),
                        "Engineer".to_string(),
                    )
                    .expect("add")
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_persist);
criterion_main!(benches);
