// crates/osm-rid-core/src/loader/common_io.rs
use crate::error::{RelationError, Result};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// `true` when `path` names a gzip file (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file for reading, transparently decompressing `*.gz` files.
///
/// A missing file maps to [`RelationError::NotFound`]; other failures stay
/// [`RelationError::Io`].
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            RelationError::NotFound(format!("File not found at {}: {}", path.display(), e))
        }
        _ => RelationError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RelationError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Writes `bytes` to `path`, replacing it and creating missing parent
/// directories. `*.gz` paths are gzip-compressed.
///
/// The data goes to a temp file next to `path` which is then renamed over it,
/// so a failed write leaves any previous file intact.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let payload: Cow<'_, [u8]> = if is_gzip(path) {
        Cow::Owned(gzip(path, bytes)?)
    } else {
        Cow::Borrowed(bytes)
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        writer.write_all(&payload)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| RelationError::Io(e.error))?;
    Ok(())
}

#[cfg(feature = "compact")]
fn gzip(_path: &Path, bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

#[cfg(not(feature = "compact"))]
fn gzip(path: &Path, _bytes: &[u8]) -> Result<Vec<u8>> {
    Err(RelationError::InvalidData(format!(
        "gzip requested for {} but 'compact' is disabled",
        path.display()
    )))
}
