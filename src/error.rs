use std::io;
use std::path::PathBuf;

/// Everything that can abort [`Repository::load`](crate::Repository::load).
///
/// Each variant names the asset or field at fault. No variant is ever produced for a
/// reference that simply does not resolve; resolvers return `None` for that.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("no such file or directory: {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be opened.
    #[error("error opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A string table violated its binary framing.
    #[error("malformed string table {}: {detail}", path.display())]
    Format { path: PathBuf, detail: String },

    /// The master document is not valid JSON for the expected shape.
    #[error("unable to decode {target} from {}: {detail}", path.display())]
    Parse {
        target: &'static str,
        path: PathBuf,
        detail: String,
    },

    /// A strictly bound string table does not have one entry per record.
    #[error("{field} did not match data file. master: {master}, strings: {strings}")]
    Validation {
        field: &'static str,
        master: usize,
        strings: usize,
    },

    /// Reading an opened file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn format(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        LoadError::Format {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
