use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CertError;

/// Where [`Certificate::write_pem`](crate::cert::Certificate::write_pem) and
/// [`Certificate::write_der`](crate::cert::Certificate::write_der) send their output.
///
/// A `Path` is created (or truncated), written and closed before the call
/// returns. A `Writer` belongs to the caller: it is written and flushed but
/// left open.
pub enum WriteTarget<'a> {
    Path(PathBuf),
    Writer(&'a mut dyn Write),
}

impl From<&Path> for WriteTarget<'_> {
    fn from(path: &Path) -> Self {
        WriteTarget::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for WriteTarget<'_> {
    fn from(path: PathBuf) -> Self {
        WriteTarget::Path(path)
    }
}

impl From<&PathBuf> for WriteTarget<'_> {
    fn from(path: &PathBuf) -> Self {
        WriteTarget::Path(path.clone())
    }
}

impl From<&str> for WriteTarget<'_> {
    fn from(path: &str) -> Self {
        WriteTarget::Path(PathBuf::from(path))
    }
}

impl<'a, W: Write> From<&'a mut W> for WriteTarget<'a> {
    fn from(writer: &'a mut W) -> Self {
        WriteTarget::Writer(writer)
    }
}

/// Writes `data` to the target.
pub(crate) fn write_data(target: WriteTarget<'_>, data: &[u8]) -> Result<(), CertError> {
    match target {
        WriteTarget::Path(path) => {
            let mut file = File::create(&path)?;
            file.write_all(data)?;
            file.flush()?;
            Ok(())
        }
        WriteTarget::Writer(writer) => {
            writer.write_all(data)?;
            writer.flush()?;
            Ok(())
        }
    }
}
