//! Shared plumbing for the Upspinner transports.
//!
//! - [`Transport`] / [`DynTransport`]: the send contract every transport
//!   implements, statically or behind a trait object.
//! - [`TransportError`]: the error type surfaced to callers.
//! - [`Endpoint`]: `host[:port]` resolution shared by the email and SMS
//!   transports.
//! - [`Dsn`] and [`TransportFactory`]: connection-string configuration.
//! - [`message_id_from_headers`]: `x-message-id` extraction with a random
//!   UUID v4 fallback.
//! - `inject_trace_context` (feature `trace-context`): W3C trace headers on
//!   outgoing requests.

pub mod dsn;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod log;
pub mod message_id;
pub mod transport;

pub use dsn::Dsn;
pub use endpoint::{DEFAULT_HOST, Endpoint, path_segment};
pub use error::TransportError;
pub use factory::{TransportFactory, create_transport};
pub use log::LogTransport;
pub use message_id::{MESSAGE_ID_HEADER, message_id_from_headers, random_message_id};
pub use transport::{DynTransport, Transport};

// Outbound W3C Trace Context injection.
#[cfg(feature = "trace-context")]
pub mod trace_context;
#[cfg(feature = "trace-context")]
pub use trace_context::inject_trace_context;
