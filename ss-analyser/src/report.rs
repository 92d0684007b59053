use std::path::PathBuf;

use serde::Serialize;
use ss_core::{DecodeOutput, QualityIndex};

use crate::{AnalyserResult, OutputFormat};

/// Итог одного прогона анализа.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Файл захвата
    pub input: PathBuf,
    /// Семейство выборок, по которому считался индекс
    pub family: String,
    pub freq_mhz: Option<u16>,
    pub rssi_filter: Option<u8>,
    pub summary: DecodeSummary,
    #[serde(flatten)]
    pub result: QualityIndex,
}

/// Сводка декодирования для отчёта.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    pub records: u64,
    pub skipped: u64,
    pub discarded: u64,
    pub diagnostics: usize,
    pub trailing_bytes: u64,
    /// Разбор остановлен на обрезанной записи
    pub truncated: bool,
    /// Минимальный и максимальный TSF среди декодированных записей
    pub tsf_range: Option<(u64, u64)>,
}

impl DecodeSummary {
    pub fn new(output: &DecodeOutput) -> Self {
        let stats = &output.stats;
        let tsf_range = output
            .records
            .iter()
            .map(|r| r.tsf())
            .fold(None::<(u64, u64)>, |range, tsf| match range {
                Some((lo, hi)) => Some((lo.min(tsf), hi.max(tsf))),
                None => Some((tsf, tsf)),
            });

        Self {
            records: stats.records_ok,
            skipped: stats.records_skipped,
            discarded: stats.records_discarded,
            diagnostics: output.diagnostics.len(),
            trailing_bytes: stats.trailing_bytes,
            truncated: output.diagnostics.iter().any(|d| d.is_truncation()),
            tsf_range,
        }
    }
}

impl AnalysisReport {
    /// Строка для вывода в stdout.
    pub fn render(
        &self,
        format: OutputFormat,
    ) -> AnalyserResult<String> {
        match format {
            OutputFormat::Legacy => Ok(self.result.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl std::fmt::Display for DecodeSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "records={} skipped={} discarded={} diagnostics={} trailing_bytes={} truncated={}",
            self.records,
            self.skipped,
            self.discarded,
            self.diagnostics,
            self.trailing_bytes,
            self.truncated
        )?;

        if let Some((first, last)) = self.tsf_range {
            write!(f, " tsf={first}..{last}")?;
        }

        Ok(())
    }
}
