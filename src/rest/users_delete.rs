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

//! API to wipe the full list of users.

use crate::driver::Driver;
use crate::model::User;
use crate::rest::{EmptyBody, RestResult};
use axum::extract::State;
use axum::Json;

/// DELETE handler for this API.
///
/// Returns the now-empty collection so that callers can refresh their view in one round trip.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> RestResult<Json<Vec<User>>> {
    driver.delete_all_users().await?;
    Ok(Json(vec![]))
}
