// Timecard
// Copyright 2026 The Timecard Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service to keep track of the hours worked by a collection of users.
//!
//! The service adheres to a layered architecture and the code is structured to
//! have one module per layer:
//!
//! 1.  `model`: The base layer, providing high-level data types that represent
//!     concepts in the domain of the application.  There is no logic in here
//!     other than validation at construction time, following the newtype
//!     pattern.
//!
//! 1.  `db`: The persistence layer.  Provides a thin abstraction over the
//!     database connection plus the domain-specific operations on the table of
//!     user records.  PostgreSQL is the production backend and SQLite backs
//!     single-machine deployments and all unit tests.
//!
//! 1.  `driver`: The business logic layer.  The `Driver` type encapsulates the
//!     shared database handle and coordinates every state transition on the
//!     record set.
//!
//! 1.  `rest`: The HTTP layer, offering the REST APIs.  Every API lives in its
//!     own file and is backed by a `Driver` instance.
//!
//! 1.  `main`: The app launcher.  Its sole purpose is to gather configuration
//!     data from environment variables and call `serve` to start the
//!     application.
//!
//! There are result and error types in every layer, such as `DbResult` and
//! `DbError`.  Errors float to the top of the app using the `?` operator and
//! are translated to HTTP status codes once returned from the REST layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use crate::db::Db;
use crate::driver::Driver;
use log::info;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

pub mod db;
pub(crate) mod driver;
pub mod env;
pub(crate) mod model;
mod rest;

/// Instantiates all resources to serve the application on `addr` backed by the
/// already-connected `db`.
///
/// This does not return until the server loop terminates, at which point the
/// database connection is released.
pub async fn serve(
    addr: impl Into<SocketAddr>,
    db: Box<dyn Db + Send + Sync>,
) -> Result<(), Box<dyn Error>> {
    let db: Arc<dyn Db + Send + Sync> = Arc::from(db);
    let app = rest::app(Driver::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(addr.into()).await?;
    info!("Listening on {}", listener.local_addr()?);
    let result = axum::serve(listener, app).await;

    db.close().await;
    result?;
    Ok(())
}
