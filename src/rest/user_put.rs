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

//! API to rename a single user.

use crate::driver::Driver;
use crate::model::{User, UserId, Username};
use crate::rest::RestResult;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

/// Message accepted by this API.
#[derive(Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub(crate) struct UpdateUserRequest {
    /// New display name for the user.
    ///
    /// A missing or blank name turns the update into a no-op instead of an error.
    name: Option<String>,
}

/// PUT handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    Json(request): Json<UpdateUserRequest>,
) -> RestResult<Json<User>> {
    let name = match request.name {
        Some(name) if !name.trim().is_empty() => Some(Username::new(name)?),
        _ => None,
    };
    let user = driver.rename_user(id, name).await?;
    Ok(Json(user))
}
