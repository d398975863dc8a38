//! Core components for signing OAuth 1.0 requests.
//!
//! This crate provides the foundational types shared by the oauthsign crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The error type, carrying an [`ErrorKind`] callers can match on
//!
//! Signing itself is pure computation and lives in the service crates; the
//! [`Context`] is only consulted to read configuration and to hand a signed
//! request to the transport.
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use oauthsign_core::{Context, HttpSend, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct EchoHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for EchoHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(req.into_body()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(EchoHttpSend);
//! let req = http::Request::get("https://example.com").body(Bytes::new())?;
//! let resp = ctx.http_send(req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
