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

//! API to get all records.

use crate::driver::Driver;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let records = driver.list_all().await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use catalog_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/v1/records".to_owned())
    }

    #[tokio::test]
    async fn test_none() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Record>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_some_in_creation_order() {
        let context = TestContext::setup();

        let exp_response = vec![
            context.create("second", 2.0).await,
            context.create("first", 1.0).await,
            context.create("third", 3.0).await,
        ];

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Record>>()
            .await;
        assert_eq!(exp_response, response);
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route());
}
