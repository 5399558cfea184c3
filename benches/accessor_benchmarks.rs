//! Frame access benchmarks
//!
//! Random-access get/set throughput against an in-memory store

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;
use wavio_lib::format::{Frame, WaveFile, WaveSpec};
use wavio_lib::util::SampleFormat;

const FRAMES: u64 = 48_000;

/// Create a silent file held in memory
fn create_test_file(channels: u16, format: SampleFormat) -> WaveFile<Cursor<Vec<u8>>> {
    let spec = WaveSpec::new(channels, 48_000, format);
    WaveFile::create(Cursor::new(Vec::new()), spec, FRAMES).expect("Failed to create WAV")
}

/// Benchmark sequential frame reads for each supported layout
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_get");
    group.throughput(Throughput::Elements(FRAMES));

    for &(channels, format) in &[
        (1, SampleFormat::U8),
        (1, SampleFormat::I16),
        (2, SampleFormat::U8),
        (2, SampleFormat::I16),
    ] {
        let mut wav = create_test_file(channels, format);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}ch_{}", channels, format)),
            &channels,
            |b, _| {
                b.iter(|| {
                    for index in 0..FRAMES as i64 {
                        black_box(wav.get(index).unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark strided frame writes on a stereo 16-bit file
fn bench_set(c: &mut Criterion) {
    let mut wav = create_test_file(2, SampleFormat::I16);

    c.bench_function("frame_set_stereo_s16", |b| {
        b.iter(|| {
            for index in (0..FRAMES as i64).step_by(7) {
                let v = (index % 32768) as i32;
                wav.set(black_box(index), Frame::Stereo(v, -v)).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_get, bench_set);
criterion_main!(benches);
