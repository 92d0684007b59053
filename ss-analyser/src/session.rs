use log::{debug, info, warn};
use ss_core::{compute_index, decode_with_stats, read_capture, DecodeOutput};
use ss_types::SsError;

use crate::{AnalyserConfig, AnalyserError, AnalyserResult, AnalysisReport, DecodeSummary};

/// Один прогон анализа: чтение файла, декодирование, расчёт индекса.
///
/// Декодированные записи живут только в пределах [`AnalysisSession::run`].
pub struct AnalysisSession {
    config: AnalyserConfig,
}

impl AnalysisSession {
    /// Создаёт сессию, проверяя конфигурацию.
    pub fn new(config: AnalyserConfig) -> AnalyserResult<Self> {
        if config.max_capture_bytes == 0 {
            return Err(AnalyserError::Config(
                "max capture size must be > 0".to_string(),
            ));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Читает и декодирует файл захвата.
    ///
    /// Ошибка возвращается только если файл недоступен; повреждённые записи
    /// попадают в диагностики.
    pub fn load(&self) -> AnalyserResult<DecodeOutput> {
        let cfg = &self.config;

        let buf = read_capture(&cfg.input_path, cfg.max_capture_bytes).map_err(|source| {
            AnalyserError::Read {
                path: cfg.input_path.clone(),
                source,
            }
        })?;

        let output = decode_with_stats(&buf);

        info!(
            "Decoded {} records from {:?} ({} bytes)",
            output.records.len(),
            cfg.input_path,
            buf.len()
        );

        if !output.diagnostics.is_empty() {
            warn!(
                "{} records skipped or truncated while decoding",
                output.diagnostics.len()
            );
        }

        Ok(output)
    }

    /// Считает индекс по уже декодированным записям.
    pub fn analyse(
        &self,
        output: &DecodeOutput,
    ) -> AnalyserResult<AnalysisReport> {
        let cfg = &self.config;
        let filter = cfg.filter();

        debug!("Sample filter: {:?}", filter);

        let family = output
            .records
            .last()
            .map(|r| r.family())
            .ok_or(AnalyserError::Index(SsError::EmptyCapture))?;

        let result = compute_index(&output.records, &filter).map_err(AnalyserError::Index)?;

        info!("Computed {family} index {:.2}", result.index);

        Ok(AnalysisReport {
            input: cfg.input_path.clone(),
            family: family.to_string(),
            freq_mhz: cfg.freq_mhz,
            rssi_filter: cfg.rssi,
            summary: DecodeSummary::new(output),
            result,
        })
    }

    /// Полный прогон: [`load`](Self::load) + [`analyse`](Self::analyse).
    pub fn run(&self) -> AnalyserResult<AnalysisReport> {
        let output = self.load()?;
        self.analyse(&output)
    }
}
