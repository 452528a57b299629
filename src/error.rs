use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SiteCheckError>;

#[derive(Debug, thiserror::Error)]
pub enum SiteCheckError {
    #[error("cannot read page {}: {source}", .path.display())]
    PageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

impl SiteCheckError {
    /// Wrap an I/O failure on a page file.
    pub fn page_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteCheckError::PageRead {
            path: path.into(),
            source,
        }
    }
}
