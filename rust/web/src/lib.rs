//! HTTP front end for the showdown hand comparator.
//!
//! Serves an HTML form at `/`, a JSON comparison endpoint at
//! `/api/compare` and a liveness probe at `/health`.

pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;

pub use errors::{handle_rejection, ErrorResponse, ErrorSeverity, IntoErrorResponse};
pub use handlers::{CompareError, CompareRequest, CompareResponse};
pub use logging::{init_logging, LogEntry, LogFormat, TestLogSubscriber};
pub use middleware::{log_response, with_request_logging};
pub use server::{AppContext, ServerArgs, ServerConfig, ServerError, ServerHandle, WebServer};
