//! Формат файла спектрального сканирования ath9k/ath10k/ath11k.
//!
//! Файл представляет собой последовательность TLV записей:
//!
//! ```text
//! [0]     TYPE    u8   : тип выборки (1=HT20, 2=HT20/40, 3=ATH10K, 4=ATH11K)
//! [1..3]  LENGTH  u16  : длина полезной нагрузки (без заголовка TLV)
//! [3..]   PAYLOAD      : структура, зависящая от TYPE
//! ```
//!
//! Все многобайтовые числа хранятся в порядке big-endian.

use ss_types::{
    Ath10kSample, Ath11kSample, Ht20Sample, Ht40Sample, ScanResult, SsError, SsResult,
    SPECTRAL_ATH11K_MAX_NUM_BINS, SPECTRAL_HT20_40_NUM_BINS, SPECTRAL_HT20_NUM_BINS,
};

use crate::binary::{read::*, write::*};

/// Размер заголовка TLV: 1 байт типа + 2 байта длины
pub const TLV_HEADER_SIZE: usize = 3;

/// Размер полезной нагрузки HT20 (заголовок выборки + 56 бинов)
pub const HT20_PAYLOAD_SIZE: usize = 17 + SPECTRAL_HT20_NUM_BINS;

/// Размер полезной нагрузки HT20/40 (заголовок выборки + 128 бинов)
pub const HT40_PAYLOAD_SIZE: usize = 24 + SPECTRAL_HT20_40_NUM_BINS;

/// Размер заголовка выборки ath10k (без бинов)
pub const ATH10K_HEADER_SIZE: usize = 26;

/// Размер заголовка выборки ath11k (без бинов)
pub const ATH11K_HEADER_SIZE: usize = 19;

/// Максимальный размер записи вместе с TLV заголовком.
///
/// Самый большой вариант: ath11k с 512 бинами.
pub const MAX_SAMPLE_SIZE: usize =
    TLV_HEADER_SIZE + ATH11K_HEADER_SIZE + SPECTRAL_ATH11K_MAX_NUM_BINS;

/// Заголовок TLV записи в порядке байт хоста.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTlvHeader {
    /// Сырое значение типа (может быть неизвестным)
    pub sample_type: u8,
    /// Длина полезной нагрузки
    pub length: u16,
}

/// Сериализация записей в TLV представление.
pub trait ScanResultExt {
    /// Размер полезной нагрузки без заголовка TLV.
    fn payload_len(&self) -> usize;

    /// Кодирует запись вместе с заголовком TLV.
    fn encode(&self) -> SsResult<Vec<u8>>;
}

impl RawTlvHeader {
    /// Читает заголовок из начала `buf`. `None`, если байт меньше трёх.
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < TLV_HEADER_SIZE {
            return None;
        }

        let mut off = 0;
        let sample_type = read_u8(buf, &mut off);
        let length = read_u16_be(buf, &mut off);

        Some(Self {
            sample_type,
            length,
        })
    }

    pub fn serialize(&self) -> [u8; TLV_HEADER_SIZE] {
        let [hi, lo] = self.length.to_be_bytes();
        [self.sample_type, hi, lo]
    }

    /// Полный размер записи: заголовок + полезная нагрузка.
    pub fn sample_len(&self) -> usize {
        TLV_HEADER_SIZE + self.length as usize
    }
}

/// Разбирает полезную нагрузку HT20. Длина должна быть
/// [`HT20_PAYLOAD_SIZE`].
pub fn parse_ht20(payload: &[u8]) -> Ht20Sample {
    debug_assert_eq!(payload.len(), HT20_PAYLOAD_SIZE);
    let mut off = 0;

    Ht20Sample {
        max_exp: read_u8(payload, &mut off),
        freq: read_u16_be(payload, &mut off),
        rssi: read_i8(payload, &mut off),
        noise: read_i8(payload, &mut off),
        max_magnitude: read_u16_be(payload, &mut off),
        max_index: read_u8(payload, &mut off),
        bitmap_weight: read_u8(payload, &mut off),
        tsf: read_u64_be(payload, &mut off),
        data: read_array(payload, &mut off),
    }
}

/// Разбирает полезную нагрузку HT20/40. Длина должна быть
/// [`HT40_PAYLOAD_SIZE`].
pub fn parse_ht40(payload: &[u8]) -> Ht40Sample {
    debug_assert_eq!(payload.len(), HT40_PAYLOAD_SIZE);
    let mut off = 0;

    Ht40Sample {
        channel_type: read_u8(payload, &mut off),
        freq: read_u16_be(payload, &mut off),
        lower_rssi: read_i8(payload, &mut off),
        upper_rssi: read_i8(payload, &mut off),
        tsf: read_u64_be(payload, &mut off),
        lower_noise: read_i8(payload, &mut off),
        upper_noise: read_i8(payload, &mut off),
        lower_max_magnitude: read_u16_be(payload, &mut off),
        upper_max_magnitude: read_u16_be(payload, &mut off),
        lower_max_index: read_u8(payload, &mut off),
        upper_max_index: read_u8(payload, &mut off),
        lower_bitmap_weight: read_u8(payload, &mut off),
        upper_bitmap_weight: read_u8(payload, &mut off),
        max_exp: read_u8(payload, &mut off),
        data: read_array(payload, &mut off),
    }
}

/// Разбирает полезную нагрузку ath10k: заголовок и все оставшиеся байты как
/// бины. Длина должна быть не меньше [`ATH10K_HEADER_SIZE`].
pub fn parse_ath10k(payload: &[u8]) -> Ath10kSample {
    debug_assert!(payload.len() >= ATH10K_HEADER_SIZE);
    let mut off = 0;

    Ath10kSample {
        chan_width_mhz: read_u8(payload, &mut off),
        freq1: read_u16_be(payload, &mut off),
        freq2: read_u16_be(payload, &mut off),
        noise: read_i16_be(payload, &mut off),
        max_magnitude: read_u16_be(payload, &mut off),
        total_gain_db: read_u16_be(payload, &mut off),
        base_pwr_db: read_u16_be(payload, &mut off),
        tsf: read_u64_be(payload, &mut off),
        max_index: read_i8(payload, &mut off),
        rssi: read_u8(payload, &mut off),
        relpwr_db: read_u8(payload, &mut off),
        avgpwr_db: read_u8(payload, &mut off),
        max_exp: read_u8(payload, &mut off),
        data: payload[ATH10K_HEADER_SIZE..].to_vec(),
    }
}

/// Разбирает полезную нагрузку ath11k. Длина должна быть не меньше
/// [`ATH11K_HEADER_SIZE`].
pub fn parse_ath11k(payload: &[u8]) -> Ath11kSample {
    debug_assert!(payload.len() >= ATH11K_HEADER_SIZE);
    let mut off = 0;

    Ath11kSample {
        chan_width_mhz: read_u8(payload, &mut off),
        max_index: read_i8(payload, &mut off),
        max_exp: read_u8(payload, &mut off),
        freq1: read_u16_be(payload, &mut off),
        freq2: read_u16_be(payload, &mut off),
        max_magnitude: read_u16_be(payload, &mut off),
        rssi: read_u16_be(payload, &mut off),
        tsf: read_u32_be(payload, &mut off),
        noise: read_i32_be(payload, &mut off),
        data: payload[ATH11K_HEADER_SIZE..].to_vec(),
    }
}

impl ScanResultExt for ScanResult {
    fn payload_len(&self) -> usize {
        match self {
            ScanResult::Ht20(_) => HT20_PAYLOAD_SIZE,
            ScanResult::Ht40(_) => HT40_PAYLOAD_SIZE,
            ScanResult::Ath10k(s) => ATH10K_HEADER_SIZE + s.data.len(),
            ScanResult::Ath11k(s) => ATH11K_HEADER_SIZE + s.data.len(),
        }
    }

    fn encode(&self) -> SsResult<Vec<u8>> {
        let payload_len = self.payload_len();
        let length = u16::try_from(payload_len).map_err(|_| SsError::RecordTooLarge(payload_len))?;

        let header = RawTlvHeader {
            sample_type: self.sample_type().as_u8(),
            length,
        };

        let mut buf = Vec::with_capacity(header.sample_len());
        buf.extend_from_slice(&header.serialize());

        match self {
            ScanResult::Ht20(s) => {
                write_u8(&mut buf, s.max_exp);
                write_u16_be(&mut buf, s.freq);
                write_i8(&mut buf, s.rssi);
                write_i8(&mut buf, s.noise);
                write_u16_be(&mut buf, s.max_magnitude);
                write_u8(&mut buf, s.max_index);
                write_u8(&mut buf, s.bitmap_weight);
                write_u64_be(&mut buf, s.tsf);
                buf.extend_from_slice(&s.data);
            }
            ScanResult::Ht40(s) => {
                write_u8(&mut buf, s.channel_type);
                write_u16_be(&mut buf, s.freq);
                write_i8(&mut buf, s.lower_rssi);
                write_i8(&mut buf, s.upper_rssi);
                write_u64_be(&mut buf, s.tsf);
                write_i8(&mut buf, s.lower_noise);
                write_i8(&mut buf, s.upper_noise);
                write_u16_be(&mut buf, s.lower_max_magnitude);
                write_u16_be(&mut buf, s.upper_max_magnitude);
                write_u8(&mut buf, s.lower_max_index);
                write_u8(&mut buf, s.upper_max_index);
                write_u8(&mut buf, s.lower_bitmap_weight);
                write_u8(&mut buf, s.upper_bitmap_weight);
                write_u8(&mut buf, s.max_exp);
                buf.extend_from_slice(&s.data);
            }
            ScanResult::Ath10k(s) => {
                write_u8(&mut buf, s.chan_width_mhz);
                write_u16_be(&mut buf, s.freq1);
                write_u16_be(&mut buf, s.freq2);
                write_i16_be(&mut buf, s.noise);
                write_u16_be(&mut buf, s.max_magnitude);
                write_u16_be(&mut buf, s.total_gain_db);
                write_u16_be(&mut buf, s.base_pwr_db);
                write_u64_be(&mut buf, s.tsf);
                write_i8(&mut buf, s.max_index);
                write_u8(&mut buf, s.rssi);
                write_u8(&mut buf, s.relpwr_db);
                write_u8(&mut buf, s.avgpwr_db);
                write_u8(&mut buf, s.max_exp);
                buf.extend_from_slice(&s.data);
            }
            ScanResult::Ath11k(s) => {
                write_u8(&mut buf, s.chan_width_mhz);
                write_i8(&mut buf, s.max_index);
                write_u8(&mut buf, s.max_exp);
                write_u16_be(&mut buf, s.freq1);
                write_u16_be(&mut buf, s.freq2);
                write_u16_be(&mut buf, s.max_magnitude);
                write_u16_be(&mut buf, s.rssi);
                write_u32_be(&mut buf, s.tsf);
                write_i32_be(&mut buf, s.noise);
                buf.extend_from_slice(&s.data);
            }
        }

        Ok(buf)
    }
}
