use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::filters::BoxedFilter;
use warp::reply::Response;
use warp::Filter;

use crate::errors::handle_rejection;
use crate::handlers::{self, CompareRequest};
use crate::middleware::with_request_logging;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
// Form and JSON bodies only ever carry two short hands.
const MAX_BODY_BYTES: u64 = 4 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
    strict: bool,
}

/// Result of reading the server's command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerArgs {
    Run(ServerConfig),
    Help,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            strict: false,
        }
    }

    /// Reject requests whose two hands share a card.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Loopback on an OS-assigned port.
    pub fn for_tests() -> Self {
        Self::new(DEFAULT_HOST, 0)
    }

    /// Reads `--host/-h`, `--port/-p`, `--strict` and `--help` (program name
    /// already stripped).
    pub fn from_args<I>(args: I) -> Result<ServerArgs, ServerError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ServerConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--host" | "-h" => {
                    config.host = args
                        .next()
                        .ok_or_else(|| ServerError::ConfigError("--host requires a value".into()))?;
                }
                "--port" | "-p" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ServerError::ConfigError("--port requires a value".into()))?;
                    config.port = value.parse().map_err(|_| {
                        ServerError::ConfigError(format!("invalid port number: {value}"))
                    })?;
                }
                "--strict" => config.strict = true,
                "--help" => return Ok(ServerArgs::Help),
                other => {
                    return Err(ServerError::ConfigError(format!(
                        "unknown argument: {other}"
                    )))
                }
            }
        }

        Ok(ServerArgs::Run(config))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ServerConfig,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Clone)]
pub struct WebServer {
    context: AppContext,
}

impl WebServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::from_context(AppContext::new(config))
    }

    pub fn from_context(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let WebServer { context } = self;
        let bind_addr = Self::bind_addr(context.config())?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = Self::routes(&context);
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        let (addr, server_future) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(bind_addr, shutdown_signal)
            .map_err(Self::map_warp_error)?;

        tracing::info!(%addr, strict = context.config().strict(), "web server listening");

        let task = tokio::spawn(async move {
            server_future.await;
            Ok(())
        });

        Ok(ServerHandle::new(addr, shutdown_tx, task))
    }

    fn bind_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
        let host = config.host();

        if let Ok(addr) = host.parse::<SocketAddr>() {
            return Ok(addr);
        }

        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
            return Ok(SocketAddr::new(ip, config.port()));
        }

        let candidate = format!("{}:{}", host, config.port());
        let mut addrs = candidate.to_socket_addrs().map_err(|err| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`: {err}"))
        })?;

        addrs.next().ok_or_else(|| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`"))
        })
    }

    fn map_warp_error(err: warp::Error) -> ServerError {
        use std::error::Error as StdError;

        if let Some(io_err) = err
            .source()
            .and_then(|source| source.downcast_ref::<std::io::Error>())
        {
            return ServerError::BindError(std::io::Error::new(io_err.kind(), io_err.to_string()));
        }

        ServerError::ConfigError(err.to_string())
    }

    /// Every route the server answers, with request logging and JSON
    /// rejections applied.
    pub fn routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        let routes = Self::health_route()
            .or(Self::page_routes(context))
            .unify()
            .or(Self::api_routes(context))
            .unify();

        with_request_logging(routes)
            .recover(handle_rejection)
            .unify()
            .boxed()
    }

    fn health_route() -> BoxedFilter<(Response,)> {
        warp::path("health")
            .and(warp::get())
            .and(warp::path::end())
            .map(handlers::health)
            .boxed()
    }

    fn page_routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        let strict = context.config().strict();

        let index = warp::path::end()
            .and(warp::get())
            .and_then(|| async { Ok::<_, Infallible>(handlers::index().await) });

        let submit = warp::path::end()
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::form())
            .and_then(move |request: CompareRequest| async move {
                Ok::<_, Infallible>(handlers::submit_form(request, strict).await)
            });

        index.or(submit).unify().boxed()
    }

    fn api_routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        let strict = context.config().strict();

        warp::path!("api" / "compare")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and_then(move |request: CompareRequest| async move {
                Ok::<_, Infallible>(handlers::api_compare(request, strict).await)
            })
            .boxed()
    }
}

#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<(), ServerError>>>,
}

impl ServerHandle {
    fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<Result<(), ServerError>>,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            match task.await {
                Ok(result) => result?,
                Err(err) => {
                    return Err(ServerError::ConfigError(format!(
                        "server task join error: {err}"
                    )))
                }
            }
        }

        tracing::info!(addr = %self.addr, "web server stopped");
        Ok(())
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
