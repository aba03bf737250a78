//! Upspinner SMS transport.
//!
//! Delivers [`SmsMessage`](upspinner_core::SmsMessage)s through the Upspinner
//! incoming-SMS API (`POST /api/incoming/sms/{environment}`). The sender must
//! be an alphanumeric sender ID (2 to 11 characters) or an E.164 number; other
//! values are rejected before any request is made.
//!
//! ```no_run
//! use upspinner_core::{Message, SmsMessage};
//! use upspinner_sms::{SmsConfig, UpspinnerSmsTransport};
//! use upspinner_transport::Transport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = UpspinnerSmsTransport::new(
//!     SmsConfig::new("your-api-key", "Upspinner")
//!         .with_host("api.upspinner.example")
//!         .with_environment_id("2"),
//! )?;
//!
//! let sms = SmsMessage::new("+31611223344", "Your code is 1234")?;
//! let sent = transport.send(&Message::from(sms)).await?;
//! println!("queued as {}", sent.message_id());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod sender;
pub mod transport;
pub mod types;

pub use config::SmsConfig;
pub use error::SmsError;
pub use factory::UpspinnerSmsFactory;
pub use sender::is_valid_sender;
pub use transport::UpspinnerSmsTransport;
pub use types::{SmsApiError, SmsPayload};
