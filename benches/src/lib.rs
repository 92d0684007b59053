//! Синтетические захваты для бенчмарков.

use ss_core::ScanResultExt;
use ss_types::{Ath10kSample, Ath11kSample, Ht20Sample, Ht40Sample, ScanResult, SsResult};

/// Детерминированная запись заданного типа (1..=4) с пилообразными бинами.
pub fn synthetic_record(
    sample_type: u8,
    seq: u64,
) -> ScanResult {
    let fill = |i: usize| ((i as u64 + seq) % 64) as u8;

    match sample_type {
        1 => {
            let mut s = Ht20Sample {
                freq: 2412,
                rssi: 20,
                noise: -95,
                max_exp: 2,
                tsf: seq,
                ..Default::default()
            };
            s.data.iter_mut().enumerate().for_each(|(i, b)| *b = fill(i));
            ScanResult::Ht20(s)
        }
        2 => {
            let mut s = Ht40Sample {
                freq: 2422,
                lower_rssi: 15,
                upper_rssi: 12,
                lower_noise: -96,
                upper_noise: -94,
                max_exp: 1,
                tsf: seq,
                ..Default::default()
            };
            s.data.iter_mut().enumerate().for_each(|(i, b)| *b = fill(i));
            ScanResult::Ht40(s)
        }
        3 => ScanResult::Ath10k(Ath10kSample {
            freq1: 5180,
            noise: -100,
            rssi: (seq % 40) as u8,
            tsf: seq,
            data: (0..256).map(fill).collect(),
            ..Default::default()
        }),
        _ => ScanResult::Ath11k(Ath11kSample {
            freq1: 5955,
            noise: -97,
            rssi: (seq % 40) as u16,
            tsf: seq as u32,
            data: (0..512).map(fill).collect(),
            ..Default::default()
        }),
    }
}

/// Захват из `count` записей одного типа.
pub fn synthetic_capture(
    sample_type: u8,
    count: usize,
) -> SsResult<Vec<u8>> {
    let mut buf = Vec::new();
    for seq in 0..count as u64 {
        buf.extend(synthetic_record(sample_type, seq).encode()?);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_capture_decodes() {
        for sample_type in 1..=4 {
            let buf = synthetic_capture(sample_type, 8).unwrap();
            let (records, diagnostics) = ss_core::decode(&buf);

            assert_eq!(records.len(), 8);
            assert!(diagnostics.is_empty());
        }
    }
}
