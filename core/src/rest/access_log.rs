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

//! Per-request access logging.
//!
//! The `log_access` middleware wraps the routes of an app and emits exactly one `AccessEvent` per
//! request, regardless of the outcome of the request.  The middleware only builds the events:
//! formatting and storing them is the responsibility of the `AccessLogger` sink it is given.

use crate::clocks::Clock;
use async_trait::async_trait;
use axum::extract::{MatchedPath, RawPathParams, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::{Method, StatusCode};
use log::info;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Coarse classification of how a request ended.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The operation succeeded.
    Success,

    /// The request was rejected because of its contents.
    InvalidInput,

    /// The request referred to an entity that does not exist.
    NotFound,

    /// The server failed to process the request.
    Failure,
}

impl From<StatusCode> for Outcome {
    fn from(status: StatusCode) -> Self {
        if status.is_success() || status.is_redirection() {
            Outcome::Success
        } else if status == StatusCode::NOT_FOUND {
            Outcome::NotFound
        } else if status.is_client_error() {
            Outcome::InvalidInput
        } else {
            Outcome::Failure
        }
    }
}

/// Details about a single processed request.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessEvent {
    /// HTTP method of the request.
    pub method: Method,

    /// Path of the request as sent by the client.
    pub path: String,

    /// Route template that matched the request, which identifies the invoked operation.
    pub route: Option<String>,

    /// Identifier of the entity targeted by the request, if the route has one.
    pub target: Option<String>,

    /// HTTP status code of the response.
    pub status: StatusCode,

    /// Classification of the status code.
    pub outcome: Outcome,

    /// Time it took to process the request.
    ///
    /// Measured with the wall clock of the injected `Clock`, not a monotonic one: if the clock
    /// steps backwards while a request is in flight, this is zero.
    pub elapsed: Duration,
}

impl AccessEvent {
    /// Formats the event as a JSON object suitable for a single log line.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "method": self.method.as_str(),
            "url": self.path,
            "status": self.status.as_u16(),
            "responseTime": self.elapsed.as_micros() as f64 / 1000.0,
            "route": self.route,
            "target": self.target,
            "outcome": self.outcome,
        })
    }
}

/// Sink for access events.
#[async_trait]
pub trait AccessLogger {
    /// Consumes one `event`.  Sinks cannot fail: problems writing the event are theirs to handle.
    async fn record(&self, event: AccessEvent);
}

/// Access logger that writes events as JSON lines via the `log` facade with the `access` target.
#[derive(Clone, Default)]
pub struct LogAccessLogger {}

#[async_trait]
impl AccessLogger for LogAccessLogger {
    async fn record(&self, event: AccessEvent) {
        info!(target: "access", "{}", event.to_json());
    }
}

/// State required by the `log_access` middleware.
#[derive(Clone)]
pub struct AccessLog {
    /// Where to send the events to.
    logger: Arc<dyn AccessLogger + Send + Sync>,

    /// Clock used to measure how long requests take.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl AccessLog {
    /// Creates the middleware state from its injected components.
    pub fn new(
        logger: Arc<dyn AccessLogger + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self { logger, clock }
    }
}

/// Middleware that records an `AccessEvent` for every request that goes through it.
///
/// This must be installed with `Router::route_layer` so that the matched route and the path
/// parameters are known by the time the middleware runs.
pub async fn log_access(
    State(log): State<AccessLog>,
    route: Option<MatchedPath>,
    params: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Response {
    let start = log.clock.now_utc();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = route.map(|route| route.as_str().to_owned());
    let target = params.and_then(|params| params.iter().next().map(|(_, v)| v.to_owned()));

    let response = next.run(request).await;

    let status = response.status();
    let event = AccessEvent {
        method,
        path,
        route,
        target,
        status,
        outcome: Outcome::from(status),
        elapsed: log.clock.elapsed_since(start),
    };
    log.logger.record(event).await;

    response
}

/// Test utilities.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    use super::*;
    use futures::lock::Mutex;

    /// Access logger that keeps all events in memory.
    #[derive(Clone, Default)]
    pub struct RecordingAccessLogger {
        /// Events recorded so far, in arrival order.
        events: Arc<Mutex<Vec<AccessEvent>>>,
    }

    impl RecordingAccessLogger {
        /// Returns all events recorded so far and clears the log.
        pub async fn take(&self) -> Vec<AccessEvent> {
            let mut events = self.events.lock().await;
            std::mem::take(&mut *events)
        }
    }

    #[async_trait]
    impl AccessLogger for RecordingAccessLogger {
        async fn record(&self, event: AccessEvent) {
            self.events.lock().await.push(event);
        }
    }
}
