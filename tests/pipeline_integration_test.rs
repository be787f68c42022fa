use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::TempDir;

use saxsample::{run_to_status, SamplePlan, SamplerConfig, ShapeSampler};

const SERIES_LEN: usize = 32;
const SEGMENTS: usize = 8;
const CARDINALITY: u8 = 4;

fn config() -> SamplerConfig {
    SamplerConfig::new(SERIES_LEN, SEGMENTS, CARDINALITY)
}

/// Write `count` synthetic z-scaled series as flat LE f32 records.
fn write_database(path: &Path, count: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut f = File::create(path).unwrap();
    for _ in 0..count {
        // Mix of shapes: ramps, sines, and noise at random scales.
        let kind: u8 = rng.gen_range(0..3);
        let scale: f32 = rng.gen_range(0.2..2.0);
        let phase: f32 = rng.gen_range(0.0..6.28);
        for j in 0..SERIES_LEN {
            let t = j as f32 / SERIES_LEN as f32;
            let v = match kind {
                0 => (t * 4.0 - 2.0) * scale,
                1 => (t * 6.28 + phase).sin() * scale,
                _ => rng.gen_range(-1.5..1.5),
            };
            f.write_f32::<LittleEndian>(v).unwrap();
        }
    }
    f.flush().unwrap();
}

fn read_indices(path: &Path) -> Vec<i64> {
    let mut bytes = Vec::new();
    File::open(path).unwrap().read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes.len() % 8, 0, "index file not a whole number of i64s");
    let mut out = vec![0i64; bytes.len() / 8];
    bytes
        .as_slice()
        .read_i64_into::<LittleEndian>(&mut out)
        .unwrap();
    out
}

struct RunPaths {
    sorted: PathBuf,
    train: PathBuf,
    val: PathBuf,
}

fn run_full(
    dir: &TempDir,
    db: &Path,
    n: u64,
    train_count: usize,
    val_count: usize,
    tag: &str,
) -> RunPaths {
    let paths = RunPaths {
        sorted: dir.path().join(format!("sorted_{tag}.bin")),
        train: dir.path().join(format!("train_{tag}.bin")),
        val: dir.path().join(format!("val_{tag}.bin")),
    };
    let plan = SamplePlan::new(db, n)
        .with_sorted(&paths.sorted)
        .with_train(&paths.train, train_count)
        .with_validation(&paths.val, val_count);
    let summary = ShapeSampler::new(config()).unwrap().run(&plan).unwrap();
    assert_eq!(summary.records, n);
    assert_eq!(summary.sorted_written, Some(n as usize));
    assert_eq!(summary.train_written, Some(train_count));
    assert_eq!(summary.val_written, Some(val_count));
    paths
}

#[test]
fn sorted_output_is_permutation_of_all_records() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 100, 1);

    let paths = run_full(&dir, &db, 100, 20, 10, "perm");
    let sorted = read_indices(&paths.sorted);
    assert_eq!(sorted.len(), 100);

    let mut seen = sorted.clone();
    seen.sort();
    assert_eq!(seen, (0..100).collect::<Vec<i64>>());
}

#[test]
fn train_and_val_are_strided_picks_from_sorted_order() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    let n = 97usize;
    let train_count = 13;
    let val_count = 7;
    write_database(&db, n, 2);

    let paths = run_full(&dir, &db, n as u64, train_count, val_count, "stride");
    let sorted = read_indices(&paths.sorted);
    let train = read_indices(&paths.train);
    let val = read_indices(&paths.val);

    let step = n / train_count;
    let expected_train: Vec<i64> = (0..train_count).map(|i| sorted[i * step]).collect();
    assert_eq!(train, expected_train);

    let offset = (n / train_count) / 3;
    let step2 = n / val_count;
    let expected_val: Vec<i64> = (0..val_count).map(|i| sorted[offset + i * step2]).collect();
    assert_eq!(val, expected_val);

    for &idx in train.iter().chain(&val) {
        assert!((0..n as i64).contains(&idx));
    }
}

#[test]
fn degenerate_offset_makes_train_and_val_identical() {
    // N = 10, both counts 5: offset (10/5)/3 = 0, so both walks pick the
    // same sorted positions. Overlap is documented behavior.
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 10, 3);

    let paths = run_full(&dir, &db, 10, 5, 5, "degen");
    assert_eq!(read_indices(&paths.train), read_indices(&paths.val));
    assert_eq!(read_indices(&paths.train).len(), 5);
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 64, 4);

    let a = run_full(&dir, &db, 64, 16, 8, "a");
    let b = run_full(&dir, &db, 64, 16, 8, "b");
    assert_eq!(std::fs::read(&a.sorted).unwrap(), std::fs::read(&b.sorted).unwrap());
    assert_eq!(std::fs::read(&a.train).unwrap(), std::fs::read(&b.train).unwrap());
    assert_eq!(std::fs::read(&a.val).unwrap(), std::fs::read(&b.val).unwrap());
}

#[test]
fn outputs_are_individually_optional() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 20, 5);

    let train = dir.path().join("train_only.bin");
    let plan = SamplePlan::new(&db, 20).with_train(&train, 4);
    let summary = ShapeSampler::new(config()).unwrap().run(&plan).unwrap();

    assert_eq!(summary.train_written, Some(4));
    assert_eq!(summary.sorted_written, None);
    assert_eq!(summary.val_written, None);
    assert!(train.exists());
    assert!(!dir.path().join("sorted.bin").exists());
    assert_eq!(read_indices(&train).len(), 4);
}

#[test]
fn identical_series_share_keys_and_cluster_adjacently() {
    // Three copies of shape A and three of shape B, interleaved in the file.
    // After sorting, each trio must be contiguous.
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    let shape_a: Vec<f32> = (0..SERIES_LEN).map(|j| (j as f32 * 0.3).sin()).collect();
    let shape_b: Vec<f32> = (0..SERIES_LEN)
        .map(|j| 2.0 - j as f32 * 0.12)
        .collect();
    let mut f = File::create(&db).unwrap();
    for rec in [&shape_a, &shape_b, &shape_a, &shape_b, &shape_a, &shape_b] {
        for &v in rec.iter() {
            f.write_f32::<LittleEndian>(v).unwrap();
        }
    }
    f.flush().unwrap();

    let paths = run_full(&dir, &db, 6, 2, 2, "cluster");
    let sorted = read_indices(&paths.sorted);
    // Shape A landed at even file positions, shape B at odd ones.
    let parities: Vec<i64> = sorted.iter().map(|i| i % 2).collect();
    assert!(
        parities == [0, 0, 0, 1, 1, 1] || parities == [1, 1, 1, 0, 0, 0],
        "equal shapes not contiguous after sort: {sorted:?}"
    );
}

#[test]
fn status_codes_cover_failure_classes() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 10, 6);

    let ok_plan = SamplePlan::new(&db, 10).with_train(dir.path().join("t.bin"), 2);
    assert_eq!(run_to_status(config(), &ok_plan), 0);

    // Configuration error: segments do not divide the series length.
    let bad_config = SamplerConfig::new(SERIES_LEN, 7, CARDINALITY);
    assert_eq!(run_to_status(bad_config, &ok_plan), 1);

    // Configuration error: oversized train count.
    let bad_count = SamplePlan::new(&db, 10).with_train(dir.path().join("t2.bin"), 11);
    assert_eq!(run_to_status(config(), &bad_count), 1);

    // Open failure.
    let absent = SamplePlan::new(dir.path().join("absent.bin"), 10)
        .with_train(dir.path().join("t3.bin"), 2);
    assert_eq!(run_to_status(config(), &absent), 2);

    // Insufficient data: more records requested than the file holds.
    let short = SamplePlan::new(&db, 11).with_train(dir.path().join("t4.bin"), 2);
    assert_eq!(run_to_status(config(), &short), 3);
}

#[test]
fn failed_run_writes_no_partial_train_output() {
    // Validation stride overrun is caught before the series file is opened,
    // so no output file gets created at all.
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("db.bin");
    write_database(&db, 10, 7);

    let train = dir.path().join("train.bin");
    let val = dir.path().join("val.bin");
    // train_count 1 → offset 3; val_count 10 → step 1 → last pick 12 ≥ 10.
    let plan = SamplePlan::new(&db, 10)
        .with_train(&train, 1)
        .with_validation(&val, 10);
    assert_eq!(run_to_status(config(), &plan), 1);
    assert!(!train.exists());
    assert!(!val.exists());
}
