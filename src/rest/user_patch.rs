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

//! API to accrue worked hours onto a single user.

use crate::driver::Driver;
use crate::model::{User, UserId};
use crate::rest::RestResult;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

/// Message accepted by this API.
#[derive(Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddHoursRequest {
    /// Number of hours to add to the user's counter.
    ///
    /// The field is optional at the serde level so that its absence renders the same error as
    /// a non-positive quantity.
    hours_to_add: Option<i64>,
}

/// PATCH handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    Json(request): Json<AddHoursRequest>,
) -> RestResult<Json<User>> {
    let user = driver.add_hours(id, request.hours_to_add.unwrap_or(0)).await?;
    Ok(Json(user))
}
