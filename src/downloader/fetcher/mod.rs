mod ureq_fetcher;

use super::{DownloadError, FileDownloader, Response};

pub use ureq_fetcher::UReqFetcher;


#[cfg(test)]
pub use mock_fetcher::MockFetcher;
