pub mod downloader;
pub mod error;
pub mod logging;
pub mod portrait;

pub use downloader::{Download, Downloader, FileDownloader, Response, UReqFetcher};
pub use error::DownloadError;
pub use portrait::{Category, DEFAULT_BASE_DIR, PORTRAIT_INDICES};
