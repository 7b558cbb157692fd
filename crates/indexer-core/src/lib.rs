//! # Indexer Core Library
//!
//! Client-side core for administering an indexer management server over its
//! GraphQL API: typed action records, a small GraphQL-over-HTTP client, the
//! action queue operations, and protocol-network alias resolution.
//!
//! ## Core Modules
//!
//! - [`client`]: GraphQL client bound to a management API endpoint
//! - [`actions`]: operations on the server's action queue
//! - [`models`]: action records and their status/type enums
//! - [`network`]: CAIP2 chain id to human-readable alias resolution
//! - [`error`]: error types shared by the above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use indexer_core::{actions, client::IndexerManagementClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), indexer_core::error::CoreError> {
//!     let client = IndexerManagementClient::new("http://127.0.0.1:18000")?;
//!     let canceled = actions::cancel_actions(&client, &[3, 7]).await?;
//!     for action in canceled {
//!         println!("canceled action {} ({})", action.id, action.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod client;
pub mod error;
pub mod models;
pub mod network;
