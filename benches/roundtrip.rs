// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks for every key strength

use magiccrypt_rs::{KeyStrength, MagicCrypt};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let sizes = [KB, 64 * KB, MB];

    for strength in [
        KeyStrength::Bits64,
        KeyStrength::Bits128,
        KeyStrength::Bits192,
        KeyStrength::Bits256,
    ] {
        let mc = MagicCrypt::new("benchmark-password", strength, Some("benchmark-iv")).unwrap();

        for &size in &sizes {
            let input = vec![0x41u8; size]; // repeating 'A'

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(strength.to_string(), format_size(size)),
                &size,
                |b, _| {
                    b.iter(|| {
                        // ----- encrypt -------------------------------------------------
                        let mut encrypted = Vec::with_capacity(size + 16);
                        mc.encrypt_reader_to_writer(
                            &mut Cursor::new(black_box(&input)),
                            &mut encrypted,
                        )
                        .unwrap();

                        // ----- decrypt -------------------------------------------------
                        let mut decrypted = Vec::with_capacity(size);
                        mc.decrypt_reader_to_writer(
                            &mut Cursor::new(black_box(&encrypted)),
                            &mut decrypted,
                        )
                        .unwrap();

                        black_box(decrypted);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
