pub mod cli;
pub mod config;
pub mod downloader;
pub mod logging;
pub mod templates;

pub use config::RunnerConfig;
pub use downloader::{
    Download, DownloadError, Downloader, FileDownloader, Outcome, Response, RunReport, UReqFetcher,
};
pub use templates::{Template, TEMPLATES};
