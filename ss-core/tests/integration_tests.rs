use std::io::Write;

use rand::{rngs::StdRng, Rng, SeedableRng};
use ss_core::{
    compute_index, decode, decode_with_stats, read_capture, DecodeDiagnostic, RawTlvHeader,
    SampleFilter, ScanResultExt, DEFAULT_MAX_CAPTURE_SIZE, IDEAL_SIGNAL_POWER, TLV_HEADER_SIZE,
};
use ss_types::{Ath10kSample, Ath11kSample, Ht20Sample, ScanResult, SsError};
use tempfile::NamedTempFile;

// ===========================================================================
// Helpers: детерминированные тест-данные
// ===========================================================================

fn ht20(
    freq: u16,
    tsf: u64,
) -> ScanResult {
    let mut data = [0u8; 56];
    for (i, b) in data.iter_mut().enumerate() {
        *b = (i % 16) as u8 + 1;
    }

    ScanResult::Ht20(Ht20Sample {
        max_exp: 2,
        freq,
        rssi: 18,
        noise: -96,
        max_magnitude: 120,
        max_index: 15,
        bitmap_weight: 3,
        tsf,
        data,
    })
}

fn ath10k(
    freq1: u16,
    rssi: u8,
    noise: i16,
    bins: usize,
) -> ScanResult {
    ScanResult::Ath10k(Ath10kSample {
        chan_width_mhz: 20,
        freq1,
        freq2: 0,
        noise,
        max_magnitude: 500,
        total_gain_db: 62,
        base_pwr_db: 15,
        tsf: 1_000_000,
        max_index: 10,
        rssi,
        relpwr_db: 3,
        avgpwr_db: 4,
        max_exp: 0,
        data: (0..bins).map(|i| (i % 4) as u8 + 1).collect(),
    })
}

fn encode_all(records: &[ScanResult]) -> Vec<u8> {
    records
        .iter()
        .flat_map(|r| r.encode().unwrap())
        .collect()
}

fn write_capture(bytes: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(bytes).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ===========================================================================
// Файл захвата -> декодер -> индекс
// ===========================================================================

#[test]
fn test_ht20_capture_end_to_end() {
    let records: Vec<ScanResult> = (0..10).map(|i| ht20(2412, i * 100)).collect();
    let tmp = write_capture(&encode_all(&records));

    let buf = read_capture(tmp.path(), DEFAULT_MAX_CAPTURE_SIZE).unwrap();
    let (decoded, diagnostics) = decode(&buf);

    assert_eq!(decoded, records);
    assert!(diagnostics.is_empty());

    let index = compute_index(&decoded, &SampleFilter::by_freq(0)).unwrap();
    assert!(index.index.is_finite());
    assert!(index.index > IDEAL_SIGNAL_POWER);
    assert_eq!(index.rssi, 0);
}

#[test]
fn test_ath10k_capture_end_to_end() {
    let records = vec![
        ath10k(5180, 30, -100, 64),
        ath10k(5180, 30, 0, 64), // нулевой шум, отбрасывается
        ath10k(5200, 45, -101, 128),
        ath10k(5180, 31, -99, 256),
    ];
    let tmp = write_capture(&encode_all(&records));

    let buf = read_capture(tmp.path(), DEFAULT_MAX_CAPTURE_SIZE).unwrap();
    let output = decode_with_stats(&buf);

    assert_eq!(output.records.len(), 3);
    assert_eq!(output.stats.records_discarded, 1);
    assert!(output.records.iter().all(|r| match r {
        ScanResult::Ath10k(s) => s.noise != 0,
        _ => false,
    }));

    let index = compute_index(&output.records, &SampleFilter::by_freq(5180)).unwrap();

    // Бины 1,2,3,4 повторяются: среднее 2.5, дисперсия 1.25
    assert_eq!(index.rssi, 30);
    assert!((index.mean - 2.5).abs() < 1e-12);
    assert!((index.variance - 1.25).abs() < 1e-12);
    assert!((index.index - (15.0 + 0.75 + 0.25)).abs() < 1e-12);
}

#[test]
fn test_filtered_out_capture_reports_failure() {
    let tmp = write_capture(&encode_all(&[ath10k(5180, 30, -100, 64)]));

    let buf = read_capture(tmp.path(), DEFAULT_MAX_CAPTURE_SIZE).unwrap();
    let (records, _) = decode(&buf);

    let result = compute_index(&records, &SampleFilter::by_freq(5745));
    assert!(matches!(result, Err(SsError::NoUsableSamples { .. })));
}

#[test]
fn test_malformed_record_between_valid_ones() {
    let mut bytes = encode_all(&[ht20(2412, 1)]);

    // HT20 с полезной нагрузкой на 5 байт короче
    let bad = RawTlvHeader {
        sample_type: 1,
        length: 68,
    };
    bytes.extend_from_slice(&bad.serialize());
    bytes.extend_from_slice(&[0u8; 68]);

    bytes.extend(encode_all(&[ht20(2417, 2)]));

    let (records, diagnostics) = decode(&bytes);

    assert_eq!(records, vec![ht20(2412, 1), ht20(2417, 2)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].offset(), 76);
}

#[test]
fn test_mixed_chip_generations() {
    let ath11k = ScanResult::Ath11k(Ath11kSample {
        chan_width_mhz: 20,
        max_exp: 1,
        freq1: 5955,
        rssi: 40,
        tsf: 77,
        noise: -97,
        data: vec![2; 64],
        ..Default::default()
    });
    let bytes = encode_all(&[ath10k(5180, 30, -100, 64), ath11k.clone()]);

    let (records, diagnostics) = decode(&bytes);
    assert!(diagnostics.is_empty());
    assert_eq!(records[1], ath11k);

    let index = compute_index(&records, &SampleFilter::by_freq(5955)).unwrap();
    assert_eq!(index.rssi, 40);
    assert!((index.mean - 4.0).abs() < 1e-12);
}

// ===========================================================================
// Устойчивость к повреждённым данным
// ===========================================================================

#[test]
fn test_truncated_capture_keeps_complete_records() {
    let bytes = encode_all(&[ht20(2412, 1), ht20(2412, 2), ht20(2412, 3)]);

    for cut in [bytes.len() - 1, bytes.len() - 74, 2 * 76 + 1] {
        let output = decode_with_stats(&bytes[..cut]);

        assert_eq!(output.records.len(), cut / 76);
        assert_eq!(output.diagnostics.len(), 1);
        assert!(output.diagnostics[0].is_truncation());
        assert_eq!(
            output.stats.bytes_consumed + output.stats.trailing_bytes,
            cut as u64
        );
    }
}

#[test]
fn test_random_bytes_never_panic() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let len = rng.gen_range(0..4096);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let output = decode_with_stats(&bytes);

        assert_eq!(
            output.stats.bytes_consumed + output.stats.trailing_bytes,
            bytes.len() as u64
        );
        assert!(output.diagnostics.iter().filter(|d| d.is_truncation()).count() <= 1);
    }
}

#[test]
fn test_random_valid_stream_consumed_completely() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut records = Vec::new();

    for i in 0..50u64 {
        let record = match rng.gen_range(0..3) {
            0 => ht20(rng.gen_range(2412..2484), i),
            1 => ath10k(5180, rng.gen_range(0..60), -100, [64, 128, 256][rng.gen_range(0..3)]),
            _ => ScanResult::Ath11k(Ath11kSample {
                freq1: 5955,
                noise: -90,
                data: vec![rng.gen(); [16, 32, 512][rng.gen_range(0..3)]],
                ..Default::default()
            }),
        };
        records.push(record);
    }

    let bytes = encode_all(&records);
    let output = decode_with_stats(&bytes);

    assert_eq!(output.records, records);
    assert_eq!(output.stats.bytes_consumed, bytes.len() as u64);
    assert_eq!(output.stats.trailing_bytes, 0);
}

#[test]
fn test_unknown_type_header_only() {
    let mut bytes = vec![0x07, 0x00, 0x00];
    bytes.extend(encode_all(&[ht20(2412, 1)]));

    let (records, diagnostics) = decode(&bytes);

    assert_eq!(records.len(), 1);
    assert_eq!(
        diagnostics,
        vec![DecodeDiagnostic::UnknownSampleType {
            offset: 0,
            sample_type: 7,
        }]
    );
    assert_eq!(TLV_HEADER_SIZE, 3);
}
