use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::RunnerConfig;

/// Download the bundled meme templates into a local folder.
#[derive(Debug, Parser)]
#[command(name = "template-downloader", version)]
#[command(about = "Download meme template images", long_about = None)]
pub struct Cli {
    /// Directory to save templates into [default: templates].
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// User-Agent header sent with every request.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Accept any TLS certificate and hostname. Exposes downloads to interception.
    #[arg(long)]
    pub insecure: bool,

    /// Optional TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Builds the runner config: defaults, then the config file, then flags.
    pub fn runner_config(&self) -> Result<RunnerConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunnerConfig::load(path)?,
            None => RunnerConfig::default(),
        };

        if let Some(dir) = &self.dir {
            cfg.templates_dir = dir.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            cfg.user_agent = user_agent.clone();
        }
        if self.insecure {
            cfg.insecure = true;
        }

        tracing::debug!("loaded config: {:?}", cfg);

        Ok(cfg)
    }
}
