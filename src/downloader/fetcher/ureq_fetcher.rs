use std::io::Read;
use std::sync::Arc;

use ureq::{Agent, AgentBuilder};

use super::{DownloadError, FileDownloader, Response};
use crate::config::RunnerConfig;

pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => return Response::status(status),
            Err(ureq::Error::Transport(transport)) => {
                return Response::network_error(transport_reason(url, &transport))
            }
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            return Response::status(status);
        }

        let content_type = response.header("Content-Type").map(str::to_string);

        let mut body = Vec::new();
        if let Err(err) = response.into_reader().read_to_end(&mut body) {
            return Response::invalid_body(err.to_string());
        }

        Response::ok(body, content_type)
    }
}

/// Transport errors print the URL first; the caller already names it.
fn transport_reason(url: &str, transport: &ureq::Transport) -> String {
    let message = transport.to_string();

    match message.strip_prefix(url).and_then(|rest| rest.strip_prefix(": ")) {
        Some(rest) => rest.to_string(),
        None => message,
    }
}

impl UReqFetcher {
    pub fn new(config: &RunnerConfig) -> Result<Self, DownloadError> {
        let mut builder = AgentBuilder::new().user_agent(&config.user_agent);

        if config.insecure {
            tracing::warn!("TLS certificate and hostname verification disabled");

            let connector = native_tls::TlsConnector::builder()
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true)
                .build()
                .map_err(DownloadError::TlsSetup)?;

            builder = builder.tls_connector(Arc::new(connector));
        }

        Ok(Self {
            agent: builder.build(),
        })
    }
}
