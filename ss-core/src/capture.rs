use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::debug;
use ss_types::{SsError, SsResult};

/// Ограничение размера файла захвата по умолчанию (256 МБ)
pub const DEFAULT_MAX_CAPTURE_SIZE: u64 = 256 * 1024 * 1024;

/// Читает файл захвата целиком в память.
///
/// Файл больше `limit` байт отклоняется до чтения. Если файл растёт во
/// время чтения, читается не больше `limit + 1` байт и возвращается та же
/// ошибка.
pub fn read_capture<P: AsRef<Path>>(
    path: P,
    limit: u64,
) -> SsResult<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    if size > limit {
        return Err(SsError::CaptureTooLarge { size, limit });
    }

    let mut buf = Vec::with_capacity(size as usize);
    BufReader::new(file)
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)?;

    if buf.len() as u64 > limit {
        return Err(SsError::CaptureTooLarge {
            size: buf.len() as u64,
            limit,
        });
    }

    debug!("Read {} bytes from {:?}", buf.len(), path);

    Ok(buf)
}
