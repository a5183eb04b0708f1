// III-IV
// Copyright 2023 Julio Merino
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

//! REST service that implements an in-memory catalog of records.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use catalog_core::clocks::SystemClock;
use catalog_core::env::get_optional_var;
use catalog_core::rest::access_log::{AccessLog, LogAccessLogger};
use log::info;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

mod db;
use db::MemoryStore;
mod driver;
use driver::Driver;
mod model;
mod rest;
use rest::app;

/// Default port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Options to configure the server.
#[derive(Debug, PartialEq)]
pub struct ServerOptions {
    /// Address to bind to.
    pub addr: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self { addr: IpAddr::from(Ipv4Addr::LOCALHOST), port: DEFAULT_PORT }
    }
}

impl ServerOptions {
    /// Creates a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_ADDR` and `<prefix>_PORT`.  Unprefixed variables
    /// like `PORT` are not consulted.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let defaults = Self::default();
        Ok(Self {
            addr: get_optional_var::<IpAddr>(prefix, "ADDR")?.unwrap_or(defaults.addr),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(defaults.port),
        })
    }
}

/// Instantiates all resources to serve the application as configured by `opts`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(opts: ServerOptions) -> Result<(), Box<dyn Error>> {
    let driver = Driver::new(Box::new(MemoryStore::default()));
    let access_log =
        AccessLog::new(Arc::new(LogAccessLogger::default()), Arc::new(SystemClock::default()));
    let app = app(driver, access_log);

    let listener = TcpListener::bind(SocketAddr::new(opts.addr, opts.port)).await?;
    info!("Server is running at {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
