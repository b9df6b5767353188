//! Acquiring schedule exports.
//!
//! A feed's `url` is either an `http(s)://` URL, a `file://` URL, or a
//! plain filesystem path.

use std::path::PathBuf;

use rozpis_core::{RozpisError, RozpisResult};
use url::Url;

/// Where a feed's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(Url),
    File(PathBuf),
}

impl Source {
    pub fn parse(locator: &str) -> RozpisResult<Self> {
        let locator = locator.trim();

        match Url::parse(locator) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Source::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Source::File)
                    .map_err(|_| RozpisError::Fetch(format!("Invalid file URL: {}", locator))),
                scheme => Err(RozpisError::Fetch(format!(
                    "Unsupported URL scheme '{}' in {}",
                    scheme, locator
                ))),
            },
            // Not a URL, treat it as a path
            Err(_) => Ok(Source::File(PathBuf::from(locator))),
        }
    }
}

/// Downloads schedule exports. One HTTP client is shared by all feeds.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> RozpisResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rozpis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RozpisError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the raw (still Windows-1250 encoded) bytes of an export.
    pub async fn fetch(&self, locator: &str) -> RozpisResult<Vec<u8>> {
        match Source::parse(locator)? {
            Source::Http(url) => self.fetch_http(url).await,
            Source::File(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| RozpisError::Fetch(format!("{}: {}", path.display(), e))),
        }
    }

    async fn fetch_http(&self, url: Url) -> RozpisResult<Vec<u8>> {
        tracing::debug!(%url, "downloading schedule");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RozpisError::Fetch(format!("{}: {}", url, e)))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RozpisError::Fetch(format!("{}: {}", url, e)))?;

        tracing::debug!(%url, bytes = bytes.len(), "downloaded schedule");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn http_urls_are_downloaded() {
        let source = Source::parse("https://www.ceskyhokej.cz/data/rozpis.csv").unwrap();
        assert!(matches!(source, Source::Http(url) if url.host_str() == Some("www.ceskyhokej.cz")));
    }

    #[test]
    fn plain_paths_are_files() {
        assert_eq!(
            Source::parse("data/rozpis.csv").unwrap(),
            Source::File(PathBuf::from("data/rozpis.csv"))
        );
    }

    #[test]
    fn file_urls_are_files() {
        assert_eq!(
            Source::parse("file:///tmp/rozpis.csv").unwrap(),
            Source::File(PathBuf::from("/tmp/rozpis.csv"))
        );
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(matches!(
            Source::parse("ftp://example.com/rozpis.csv"),
            Err(RozpisError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn fetch_reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x50, 0xF8, 0xED]).unwrap();

        let fetcher = Fetcher::new().unwrap();
        let bytes = fetcher.fetch(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(bytes, vec![0x50, 0xF8, 0xED]);
    }

    #[tokio::test]
    async fn fetch_missing_file_is_fetch_error() {
        let fetcher = Fetcher::new().unwrap();
        let result = fetcher.fetch("/nonexistent/rozpis.csv").await;
        assert!(matches!(result, Err(RozpisError::Fetch(_))));
    }
}
