mod fetcher;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use itertools::Itertools;
use thiserror::Error;
use url::Url;

use crate::config::RunnerConfig;
use crate::templates::Template;

pub use fetcher::UReqFetcher;

#[derive(Debug)]
pub enum Response {
    Ok {
        body: Vec<u8>,
        content_type: Option<String>,
    },
    Status(u16),
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self::Ok { body, content_type }
    }

    pub fn status(status: u16) -> Self {
        Self::Status(status)
    }

    pub fn not_found() -> Self {
        Self::Status(404)
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

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("invalid file name: {file_name:?}")]
    InvalidFileName { file_name: String },

    #[error("network error downloading {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("HTTP {status} downloading {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to read body of {url}: {reason}")]
    InvalidBody { url: String, reason: String },

    #[error("empty body downloading {url}")]
    EmptyBody { url: String },

    #[error("IO error writing to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set up TLS: {0}")]
    TlsSetup(#[source] native_tls::Error),
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub source: String,
    pub file: PathBuf,
    pub size: usize,
    /// Image format sniffed from the body, `None` when it is not a known image.
    pub format: Option<ImageFormat>,
}

#[derive(Debug)]
pub struct Outcome {
    pub file_name: String,
    pub result: Result<Download, DownloadError>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &Download> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Result<Self, DownloadError> {
        let path = Self::create_path(path.as_ref())?;

        Ok(Downloader { path, fetcher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn download(&self, template: &Template) -> Result<Download, DownloadError> {
        if !template.has_plain_file_name() {
            return Err(DownloadError::InvalidFileName {
                file_name: template.file_name.to_string(),
            });
        }

        let url = Url::parse(template.url).map_err(|_| DownloadError::InvalidUrl {
            url: template.url.to_string(),
        })?;

        let url = url.as_str();

        tracing::info!(file = template.file_name, url, "fetching template");

        let (body, content_type) = match self.fetcher.fetch(url) {
            Response::Ok { body, content_type } => (body, content_type),
            Response::Status(status) => {
                return Err(DownloadError::HttpStatus {
                    url: url.to_string(),
                    status,
                })
            }
            Response::InvalidBody(reason) => {
                return Err(DownloadError::InvalidBody {
                    url: url.to_string(),
                    reason,
                })
            }
            Response::NetworkError(reason) => {
                return Err(DownloadError::Network {
                    url: url.to_string(),
                    reason,
                })
            }
        };

        if body.is_empty() {
            return Err(DownloadError::EmptyBody {
                url: url.to_string(),
            });
        }

        let file_path = self.path.join(template.file_name);

        fs::write(&file_path, &body).map_err(|source| DownloadError::Io {
            path: file_path.clone(),
            source,
        })?;

        let format = image::guess_format(&body).ok();
        if format.is_none() {
            tracing::warn!(
                file = template.file_name,
                content_type = content_type.as_deref().unwrap_or("unknown"),
                "saved body is not a recognised image"
            );
        }

        Ok(Download {
            file_name: template.file_name.to_string(),
            source: url.to_string(),
            file: file_path,
            size: body.len(),
            format,
        })
    }

    /// Downloads every template in order, reporting each one to `out`.
    ///
    /// A failed template is reported and skipped; only errors writing to
    /// `out` are returned.
    pub fn run<W: Write>(&self, templates: &[Template], out: &mut W) -> io::Result<RunReport> {
        let mut report = RunReport::default();

        writeln!(out, "Downloading meme templates...")?;
        writeln!(out)?;

        for template in templates {
            writeln!(out, "Downloading {}...", template.file_name)?;

            let result = self.download(template);

            match &result {
                Ok(download) => writeln!(out, "[OK] Saved to {}", download.file.display())?,
                Err(err) => {
                    tracing::info!(file = template.file_name, error = %err, "download failed");
                    writeln!(
                        out,
                        "[FAIL] Failed to download {}: {}",
                        template.file_name, err
                    )?
                }
            }

            report.outcomes.push(Outcome {
                file_name: template.file_name.to_string(),
                result,
            });
        }

        if report.failed().next().is_some() {
            let failed = report.failed().map(|o| o.file_name.as_str()).join(", ");
            tracing::debug!(%failed, "run finished with failures");
        }

        writeln!(out)?;
        writeln!(
            out,
            "Done! Templates saved to '{}/' folder.",
            self.path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_else(|| self.path.to_string_lossy())
        )?;
        writeln!(out, "Refresh your browser to see them in the meme generator!")?;

        Ok(report)
    }

    pub fn clear_cache(&self) -> io::Result<()> {
        fs::remove_dir_all(&self.path)
    }

    fn create_path(path: &Path) -> Result<PathBuf, DownloadError> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|source| DownloadError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })?
                .join(path)
        };

        // create_dir_all fails when a non-directory already sits at the path.
        if !absolute_path.is_dir() {
            tracing::info!(path = %absolute_path.display(), "creating templates directory");

            fs::create_dir_all(&absolute_path).map_err(|source| DownloadError::CreateDir {
                path: absolute_path.clone(),
                source,
            })?;
        }

        Ok(absolute_path)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &RunnerConfig) -> Result<Self, DownloadError> {
        let fetcher = UReqFetcher::new(config)?;
        Downloader::with_fetcher(&config.templates_dir, fetcher)
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
