//! Индекс качества частоты по спектральным выборкам.
//!
//! Для семейства ath9k (HT20, HT20/40) индекс строится по средней мощности
//! сигнала в дБ относительно идеальной мощности [`IDEAL_SIGNAL_POWER`].
//! Для ath10k/ath11k используется взвешенная сумма доминирующего RSSI,
//! среднего и дисперсии бинов первой подходящей выборки.

use log::debug;
use serde::Serialize;
use ss_types::{Ht20Sample, Ht40Sample, SampleFamily, ScanResult, SsError, SsResult};

/// Идеальная мощность сигнала (дБм)
pub const IDEAL_SIGNAL_POWER: f64 = -118.0;

/// Количество корзин гистограммы RSSI
pub const MAX_RSSI_SUPPORT: usize = 256;

/// Верхняя граница индекса качества
pub const MAX_QUALITY_INDEX: f64 = 100.0;

const RSSI_WEIGHT: f64 = 0.5;
const MEAN_WEIGHT: f64 = 0.3;
const VARIANCE_WEIGHT: f64 = 0.2;

/// Фильтр выборок, участвующих в расчёте.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleFilter {
    /// Частота канала (МГц); `None` = все частоты
    pub freq: Option<u16>,
    /// Корзина RSSI; `None` = все значения
    pub rssi: Option<u8>,
}

/// Результат расчёта индекса.
///
/// Для семейства ath9k `rssi`, `mean` и `variance` всегда равны нулю.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityIndex {
    pub rssi: i32,
    #[serde(rename = "data_mean")]
    pub mean: f64,
    #[serde(rename = "data_vari")]
    pub variance: f64,
    pub index: f64,
}

impl SampleFilter {
    pub fn new(
        freq: Option<u16>,
        rssi: Option<u8>,
    ) -> Self {
        Self { freq, rssi }
    }

    /// Фильтр по частоте; `0` означает отсутствие фильтра.
    pub fn by_freq(freq: u16) -> Self {
        Self {
            freq: (freq != 0).then_some(freq),
            rssi: None,
        }
    }

    pub fn matches(
        &self,
        record: &ScanResult,
    ) -> bool {
        if let Some(freq) = self.freq {
            if record.freq() != freq {
                return false;
            }
        }

        match self.rssi {
            Some(rssi) => record.rssi_bucket() == Some(rssi),
            None => true,
        }
    }
}

impl std::fmt::Display for QualityIndex {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "[{{\"rssi\":{}}},{{\"data_mean\":{:.2}}},{{\"data_vari\":{:2.0}}},{{\"index\":{:.2}}}]",
            self.rssi, self.mean, self.variance, self.index
        )
    }
}

/// Считает индекс по семейству последней декодированной выборки.
pub fn compute_index(
    records: &[ScanResult],
    filter: &SampleFilter,
) -> SsResult<QualityIndex> {
    let last = records.last().ok_or(SsError::EmptyCapture)?;

    match last.family() {
        SampleFamily::Ht9k => ht9k_index(records, filter),
        SampleFamily::ChipGeneration => chip_index(records, filter),
    }
}

/// Индекс для выборок HT20 и HT20/40.
///
/// Выборки других семейств пропускаются.
pub fn ht9k_index(
    records: &[ScanResult],
    filter: &SampleFilter,
) -> SsResult<QualityIndex> {
    let mut total_pow = 0.0;
    let mut contributed = 0usize;

    for record in records.iter().filter(|r| filter.matches(r)) {
        let avg = match record {
            ScanResult::Ht20(s) => ht20_signal(s),
            ScanResult::Ht40(s) => ht40_signal(s),
            _ => continue,
        };

        if !avg.is_finite() {
            debug!(
                "Skipping {} sample at {} MHz: non-finite signal power",
                record.sample_type(),
                record.freq()
            );
            continue;
        }

        total_pow += avg;
        contributed += 1;
    }

    if contributed == 0 || total_pow == 0.0 {
        return Err(SsError::no_usable_samples(SampleFamily::Ht9k));
    }

    let index = (total_pow / contributed as f64 - IDEAL_SIGNAL_POWER).min(MAX_QUALITY_INDEX);

    Ok(QualityIndex {
        rssi: 0,
        mean: 0.0,
        variance: 0.0,
        index,
    })
}

/// Индекс для выборок ath10k и ath11k.
///
/// RSSI берётся как самое частое значение среди всех подходящих выборок,
/// среднее и дисперсия считаются только по первой подходящей выборке.
pub fn chip_index(
    records: &[ScanResult],
    filter: &SampleFilter,
) -> SsResult<QualityIndex> {
    let family = SampleFamily::ChipGeneration;
    let mut histogram = [0u32; MAX_RSSI_SUPPORT];
    let mut first: Option<&ScanResult> = None;

    for record in records
        .iter()
        .filter(|r| r.family() == family && filter.matches(r))
    {
        let Some(bucket) = record.rssi_bucket() else {
            continue;
        };
        histogram[usize::from(bucket)] += 1;
        if first.is_none() {
            first = Some(record);
        }
    }

    let (Some(dominant), Some(first)) = (dominant_rssi(&histogram), first) else {
        return Err(SsError::no_usable_samples(family));
    };

    let bins = first.bins();
    let max_exp = first.max_exp();
    let (sum, sum_sq) = bins.iter().fold((0.0, 0.0), |(sum, sum_sq), &bin| {
        let value = linearize(bin, max_exp).max(1.0);
        (sum + value, sum_sq + value * value)
    });

    if sum <= 0.0 {
        return Err(SsError::no_usable_samples(family));
    }

    let count = bins.len() as f64;
    let mean = sum / count;
    let variance = sum_sq / count - mean * mean;
    // В формуле корзина читается как знаковый байт, в отчёт идёт как есть
    let signed_rssi = f64::from(dominant as i8);
    let index = (RSSI_WEIGHT * signed_rssi + MEAN_WEIGHT * mean + VARIANCE_WEIGHT * variance)
        .min(MAX_QUALITY_INDEX);

    Ok(QualityIndex {
        rssi: i32::from(dominant),
        mean,
        variance,
        index,
    })
}

/// Самая частая корзина RSSI. При равенстве побеждает меньшее значение.
pub fn dominant_rssi(histogram: &[u32; MAX_RSSI_SUPPORT]) -> Option<u8> {
    let mut max_samples = 0;
    let mut rssi = None;

    for (bucket, &count) in histogram.iter().enumerate() {
        if count > max_samples {
            max_samples = count;
            rssi = Some(bucket as u8);
        }
    }

    rssi
}

/// Линейная амплитуда бина: `bin << max_exp`.
fn linearize(
    bin: u8,
    max_exp: u8,
) -> f64 {
    f64::from(bin) * f64::from(max_exp).exp2()
}

fn square_sum(
    bins: &[u8],
    max_exp: u8,
) -> f64 {
    bins.iter()
        .map(|&b| {
            let v = linearize(b, max_exp);
            v * v
        })
        .sum()
}

/// Сумма оценок сигнала (дБ) по бинам одной полосы 20 МГц.
fn band_signal_sum(
    bins: &[u8],
    max_exp: u8,
    noise: i8,
    rssi: i8,
) -> f64 {
    let base = f64::from(noise) + f64::from(rssi);
    let power_db = 10.0 * square_sum(bins, max_exp).log10();

    bins.iter()
        .map(|&b| base + 20.0 * linearize(b, max_exp).max(1.0).log10() - power_db)
        .sum()
}

fn ht20_signal(s: &Ht20Sample) -> f64 {
    band_signal_sum(&s.data, s.max_exp, s.noise, s.rssi) / s.data.len() as f64
}

fn ht40_signal(s: &Ht40Sample) -> f64 {
    let lower = band_signal_sum(s.lower_bins(), s.max_exp, s.lower_noise, s.lower_rssi);
    let upper = band_signal_sum(s.upper_bins(), s.max_exp, s.upper_noise, s.upper_rssi);

    (lower + upper) / s.data.len() as f64
}
