// In benches/decode_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arrow::array::{Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::StreamWriter;
use arrow::record_batch::RecordBatch;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use std::sync::Arc;

use rowcast::bridge::{decode_stream, inspect_stream};

// --- Mock Data Generation ---

/// Builds a Base64-encoded two-column stream of `rows_per_batch * num_batches`
/// random rows, the same shape the conversion endpoint receives.
fn generate_encoded_stream(rows_per_batch: usize, num_batches: usize) -> String {
    let mut rng = rand::rng();
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("value", DataType::Float64, false),
    ]));

    let mut buf = Vec::new();
    let mut writer = StreamWriter::try_new(&mut buf, &schema).unwrap();
    for _ in 0..num_batches {
        let ids: Vec<i64> = (0..rows_per_batch)
            .map(|_| rng.random_range(0..1_000_000))
            .collect();
        let values: Vec<f64> = (0..rows_per_batch).map(|_| rng.random()).collect();
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(ids)),
                Arc::new(Float64Array::from(values)),
            ],
        )
        .unwrap();
        writer.write(&batch).unwrap();
    }
    writer.finish().unwrap();
    drop(writer);
    STANDARD.encode(buf)
}

// --- Benchmark Suite ---

const ROWS_PER_BATCH: usize = 8192;

fn bench_decode(c: &mut Criterion) {
    // --- Setup Data ---
    let single_batch = generate_encoded_stream(ROWS_PER_BATCH, 1);
    let multi_batch = generate_encoded_stream(ROWS_PER_BATCH, 8);

    let mut group = c.benchmark_group("Stream Decoding");
    group.throughput(criterion::Throughput::Bytes(multi_batch.len() as u64));

    group.bench_function("Decode (1 batch, 8k rows)", |b| {
        b.iter(|| black_box(decode_stream(black_box(&single_batch))))
    });

    group.bench_function("Decode (8 batches, 64k rows)", |b| {
        b.iter(|| black_box(decode_stream(black_box(&multi_batch))))
    });

    group.bench_function("Inspect (8 batches, 64k rows)", |b| {
        b.iter(|| black_box(inspect_stream(black_box(&multi_batch))))
    });

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
