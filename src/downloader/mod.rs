mod fetcher;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::DownloadError;
use crate::portrait::{category_dir, portrait_path, portrait_url, Category, PORTRAIT_INDICES};

pub use fetcher::UReqFetcher;

#[derive(Debug, PartialEq)]
pub enum Response {
    /// Any HTTP answer, whatever its status.
    Body { status: u16, body: Vec<u8> },
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::body(200, body)
    }

    pub fn body(status: u16, body: Vec<u8>) -> Self {
        Self::Body { status, body }
    }

    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody(reason.into())
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub status: u16,
    pub content: Vec<u8>,
}

impl Download {
    pub fn new(source: String, file: PathBuf, status: u16, content: Vec<u8>) -> Self {
        Self {
            source,
            file,
            status,
            content,
        }
    }
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(path: impl Into<PathBuf>, fetcher: T) -> Self {
        Downloader {
            path: path.into(),
            fetcher,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.path
    }

    /// Creates the base directory and one subdirectory per category.
    ///
    /// The base directory must not exist yet, so a second call on the same
    /// tree fails with [`DownloadError::AlreadyExists`].
    pub fn prepare_layout(&self) -> Result<(), DownloadError> {
        fs::create_dir(&self.path).map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => DownloadError::AlreadyExists(self.path.clone()),
            _ => DownloadError::io(&self.path, err),
        })?;

        for category in Category::ALL {
            let dir = category_dir(&self.path, category);
            fs::create_dir(&dir).map_err(|err| DownloadError::io(&dir, err))?;
        }

        info!("created portrait layout at {}", self.path.display());

        Ok(())
    }

    /// Fetches `url` once and writes the body to `destination`, whatever the
    /// HTTP status. The parent directory must already exist.
    pub fn fetch_and_save(&self, url: &str, destination: &Path) -> Result<Download, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl(url.to_string()))?;

        let url = url.as_str();

        debug!("GET {}", url);

        match self.fetcher.fetch(url) {
            Response::NetworkError(reason) => Err(DownloadError::Network {
                url: url.to_string(),
                reason,
            }),

            Response::InvalidBody(reason) => Err(DownloadError::InvalidBody {
                url: url.to_string(),
                reason,
            }),

            Response::Body { status, body } => {
                if !(200..300).contains(&status) {
                    warn!("{} answered {}, saving body anyway", url, status);
                }

                fs::write(destination, &body).map_err(|err| DownloadError::io(destination, err))?;

                Ok(Download::new(
                    String::from(url),
                    destination.to_path_buf(),
                    status,
                    body,
                ))
            }
        }
    }

    /// Downloads every category for each of `indices`, index-major.
    ///
    /// Stops at the first failure; pairs after it are never requested.
    pub fn run<I>(&self, indices: I) -> Result<Vec<Download>, DownloadError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut downloads = Vec::new();

        for (index, category) in indices.into_iter().cartesian_product(Category::ALL) {
            let url = portrait_url(category, index);
            let file = portrait_path(&self.path, category, index);

            let download = self.fetch_and_save(&url, &file)?;

            println!("Downloaded {} to {}", url, file.display());

            downloads.push(download);
        }

        info!("downloaded {} portraits", downloads.len());

        Ok(downloads)
    }

    pub fn run_all(&self) -> Result<Vec<Download>, DownloadError> {
        self.prepare_layout()?;
        self.run(PORTRAIT_INDICES)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let fetcher = UReqFetcher::new();
        Downloader::with_fetcher(path, fetcher)
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
