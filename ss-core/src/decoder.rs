use log::{debug, warn};
use ss_types::{SampleType, ScanResult};

use crate::{
    diagnostic::DecodeDiagnostic,
    format::{
        parse_ath10k, parse_ath11k, parse_ht20, parse_ht40, RawTlvHeader, ATH10K_HEADER_SIZE,
        ATH11K_HEADER_SIZE, HT20_PAYLOAD_SIZE, HT40_PAYLOAD_SIZE, MAX_SAMPLE_SIZE,
        TLV_HEADER_SIZE,
    },
};

/// Статистика, накопленная [`ScanDecoder`] в процессе разбора.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeStats {
    /// Успешно декодированных записей.
    pub records_ok: u64,
    /// Записей, пропущенных из-за неверной длины или неизвестного типа.
    pub records_skipped: u64,
    /// Записей ath10k/ath11k, отброшенных из-за нулевого шума.
    pub records_discarded: u64,
    /// Байт, пройденных сканированием (целые TLV записи).
    pub bytes_consumed: u64,
    /// Байт усечённого хвоста, оставшихся после остановки разбора.
    pub trailing_bytes: u64,
}

/// Результат полного разбора буфера.
#[derive(Debug, Default, Clone)]
pub struct DecodeOutput {
    pub records: Vec<ScanResult>,
    pub diagnostics: Vec<DecodeDiagnostic>,
    pub stats: DecodeStats,
}

/// Потоковый декодер TLV записей поверх буфера в памяти.
///
/// Позиция всегда сдвигается на полный размер записи, поэтому одна
/// повреждённая запись не сбивает разбор следующих.
pub struct ScanDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
    stats: DecodeStats,
    diagnostics: Vec<DecodeDiagnostic>,
    done: bool,
}

enum SampleOutcome {
    Accepted(ScanResult),
    ZeroNoise,
    Rejected(DecodeDiagnostic),
}

impl<'a> ScanDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            stats: DecodeStats::default(),
            diagnostics: Vec::new(),
            done: false,
        }
    }

    /// Возвращает следующую принятую запись или `None`, когда разбор окончен.
    pub fn next_record(&mut self) -> Option<ScanResult> {
        let buf = self.buf;

        while !self.done {
            let offset = self.pos;
            let remaining = &buf[offset..];

            if remaining.is_empty() {
                self.finish();
                break;
            }

            let Some(header) = RawTlvHeader::parse(remaining) else {
                self.report(DecodeDiagnostic::IncompleteHeader { offset });
                self.finish();
                break;
            };

            let sample_len = header.sample_len();

            if remaining.len() < sample_len {
                self.report(DecodeDiagnostic::IncompleteTlv {
                    offset,
                    sample_len,
                    remaining: remaining.len(),
                });
                self.finish();
                break;
            }

            self.pos += sample_len;
            self.stats.bytes_consumed += sample_len as u64;

            if sample_len > MAX_SAMPLE_SIZE {
                self.stats.records_skipped += 1;
                self.report(DecodeDiagnostic::SampleTooLong { offset, sample_len });
                continue;
            }

            let payload = &remaining[TLV_HEADER_SIZE..sample_len];

            match decode_sample(offset, header.sample_type, payload) {
                SampleOutcome::Accepted(record) => {
                    self.stats.records_ok += 1;
                    return Some(record);
                }
                SampleOutcome::ZeroNoise => {
                    self.stats.records_discarded += 1;
                    debug!("Discarding zero-noise sample at position 0x{offset:x}");
                }
                SampleOutcome::Rejected(diag) => {
                    self.stats.records_skipped += 1;
                    self.report(diag);
                }
            }
        }

        None
    }

    /// Накопленная статистика разбора.
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Диагностики, собранные к текущему моменту.
    pub fn diagnostics(&self) -> &[DecodeDiagnostic] {
        &self.diagnostics
    }

    /// Текущая позиция в буфере.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn into_parts(self) -> (Vec<DecodeDiagnostic>, DecodeStats) {
        (self.diagnostics, self.stats)
    }

    fn report(
        &mut self,
        diag: DecodeDiagnostic,
    ) {
        warn!("{diag}");
        self.diagnostics.push(diag);
    }

    fn finish(&mut self) {
        self.done = true;
        self.stats.trailing_bytes = (self.buf.len() - self.pos) as u64;
    }
}

impl Iterator for ScanDecoder<'_> {
    type Item = ScanResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Разбирает весь буфер и возвращает записи в порядке следования в файле
/// вместе с диагностиками.
pub fn decode(buf: &[u8]) -> (Vec<ScanResult>, Vec<DecodeDiagnostic>) {
    let output = decode_with_stats(buf);
    (output.records, output.diagnostics)
}

/// Как [`decode`], но дополнительно возвращает [`DecodeStats`].
pub fn decode_with_stats(buf: &[u8]) -> DecodeOutput {
    let mut decoder = ScanDecoder::new(buf);
    let records: Vec<ScanResult> = decoder.by_ref().collect();
    debug!(
        "Decoder stopped at position {} of {} bytes",
        decoder.position(),
        buf.len()
    );
    let (diagnostics, stats) = decoder.into_parts();

    DecodeOutput {
        records,
        diagnostics,
        stats,
    }
}

fn decode_sample(
    offset: usize,
    raw_type: u8,
    payload: &[u8],
) -> SampleOutcome {
    let Ok(sample_type) = SampleType::from_u8(raw_type) else {
        return SampleOutcome::Rejected(DecodeDiagnostic::UnknownSampleType {
            offset,
            sample_type: raw_type,
        });
    };

    let have = payload.len();

    match sample_type {
        SampleType::Ht20 => {
            if have != HT20_PAYLOAD_SIZE {
                return wrong_length(offset, sample_type, have, HT20_PAYLOAD_SIZE);
            }
            SampleOutcome::Accepted(ScanResult::Ht20(parse_ht20(payload)))
        }
        SampleType::Ht20_40 => {
            if have != HT40_PAYLOAD_SIZE {
                return wrong_length(offset, sample_type, have, HT40_PAYLOAD_SIZE);
            }
            SampleOutcome::Accepted(ScanResult::Ht40(parse_ht40(payload)))
        }
        SampleType::Ath10k => {
            if let Err(diag) = check_bins(offset, sample_type, have, ATH10K_HEADER_SIZE) {
                return SampleOutcome::Rejected(diag);
            }

            let sample = parse_ath10k(payload);
            // Нулевой шум встречается в реальных дампах и портит статистику
            if sample.noise == 0 {
                return SampleOutcome::ZeroNoise;
            }
            SampleOutcome::Accepted(ScanResult::Ath10k(sample))
        }
        SampleType::Ath11k => {
            if let Err(diag) = check_bins(offset, sample_type, have, ATH11K_HEADER_SIZE) {
                return SampleOutcome::Rejected(diag);
            }

            let sample = parse_ath11k(payload);
            if sample.noise == 0 {
                return SampleOutcome::ZeroNoise;
            }
            SampleOutcome::Accepted(ScanResult::Ath11k(sample))
        }
    }
}

fn wrong_length(
    offset: usize,
    sample_type: SampleType,
    have: usize,
    expected: usize,
) -> SampleOutcome {
    SampleOutcome::Rejected(DecodeDiagnostic::WrongSampleLength {
        offset,
        sample_type,
        have,
        expected,
    })
}

fn check_bins(
    offset: usize,
    sample_type: SampleType,
    have: usize,
    header_size: usize,
) -> Result<(), DecodeDiagnostic> {
    if have < header_size {
        return Err(DecodeDiagnostic::TruncatedSampleHeader {
            offset,
            sample_type,
            have,
            min: header_size,
        });
    }

    let bins = have - header_size;

    if !sample_type.valid_bin_counts().contains(&bins) {
        return Err(DecodeDiagnostic::InvalidBinLength {
            offset,
            sample_type,
            bins,
        });
    }

    Ok(())
}
