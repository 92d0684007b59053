use std::path::PathBuf;

use ss_core::{SampleFilter, DEFAULT_MAX_CAPTURE_SIZE};

/// Формат вывода результата.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Одна строка `[{"rssi":..},{"data_mean":..},{"data_vari":..},{"index":..}]`
    Legacy,
    /// JSON объект с результатом и сводкой декодирования
    Json,
}

/// Полная конфигурация одного прогона анализа.
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    /// Путь к файлу захвата
    pub input_path: PathBuf,
    /// Фильтр по частоте канала (МГц); None = все частоты
    pub freq_mhz: Option<u16>,
    /// Фильтр по корзине RSSI
    pub rssi: Option<u8>,
    /// Формат вывода
    pub output_format: OutputFormat,
    /// Максимальный размер файла захвата (байт)
    pub max_capture_bytes: u64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl AnalyserConfig {
    /// Фильтр выборок для калькулятора индекса.
    pub fn filter(&self) -> SampleFilter {
        SampleFilter::new(self.freq_mhz, self.rssi)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для OutputFormat, AnalyserConfig
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for OutputFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            OutputFormat::Legacy => write!(f, "legacy"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "line" => Ok(OutputFormat::Legacy),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{s}'. Use: legacy, json")),
        }
    }
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("scan.bin"),
            freq_mhz: None,
            rssi: None,
            output_format: OutputFormat::Legacy,
            max_capture_bytes: DEFAULT_MAX_CAPTURE_SIZE,
        }
    }
}

/// Парсит частоту канала в мегагерцы.
///
/// Число без суффикса трактуется как МГц. Поддерживает суффиксы `GHz`,
/// `MHz`, `kHz`, `Hz` (регистронезависимо). `0` означает отсутствие фильтра.
///
/// # Примеры
/// ```
/// use ss_analyser::config::parse_freq_mhz;
/// assert_eq!(parse_freq_mhz("2412").unwrap(), 2412);
/// assert_eq!(parse_freq_mhz("2.412GHz").unwrap(), 2412);
/// assert_eq!(parse_freq_mhz("5180MHz").unwrap(), 5180);
/// ```
pub fn parse_freq_mhz(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let lower = s.to_lowercase();

    let (num_str, mult) = if let Some(v) = lower.strip_suffix("ghz") {
        (v.trim(), 1_000_f64)
    } else if let Some(v) = lower.strip_suffix("mhz") {
        (v.trim(), 1_f64)
    } else if let Some(v) = lower.strip_suffix("khz") {
        (v.trim(), 1e-3)
    } else if let Some(v) = lower.strip_suffix("hz") {
        (v.trim(), 1e-6)
    } else {
        // Без суффикса число в мегагерцах
        return s
            .parse::<u16>()
            .map_err(|e| format!("Invalid frequency '{s}': {e}"));
    };

    let n: f64 = num_str
        .parse()
        .map_err(|e| format!("Invalid frequency value '{num_str}': {e}"))?;

    let mhz = (n * mult).round();

    if !(0.0..=f64::from(u16::MAX)).contains(&mhz) {
        return Err(format!("Frequency '{s}' out of range (0..={} MHz)", u16::MAX));
    }

    Ok(mhz as u16)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
