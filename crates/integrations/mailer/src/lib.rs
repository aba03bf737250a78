//! Upspinner email transport.
//!
//! Delivers [`Email`](upspinner_core::Email) messages through the Upspinner
//! incoming-emails API (`POST /api/incoming/emails[/{environment}]`).
//!
//! # Quick start
//!
//! ```no_run
//! use upspinner_core::{Address, Email, Message};
//! use upspinner_mailer::{MailerConfig, UpspinnerMailerTransport};
//! use upspinner_transport::Transport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MailerConfig::new("your-api-key")
//!     .with_host("api.upspinner.example")
//!     .with_environment_id("2");
//! let transport = UpspinnerMailerTransport::new(config)?;
//!
//! let email = Email::new()
//!     .with_from(Address::new("noreply@example.com")?)
//!     .with_to(Address::with_name("jane@example.com", "Jane")?)
//!     .with_subject("Welcome")
//!     .with_text("Hello Jane");
//!
//! let sent = transport.send(&Message::from(email)).await?;
//! println!("queued as {}", sent.message_id());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod payload;
pub mod transport;
pub mod types;

pub use config::MailerConfig;
pub use error::MailerError;
pub use factory::UpspinnerMailerFactory;
pub use payload::build_payload;
pub use transport::UpspinnerMailerTransport;
pub use types::{EmailAddress, EmailApiErrorDetail, EmailApiErrors, EmailAttachment, EmailContent, EmailPayload};
