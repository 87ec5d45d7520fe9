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

//! High-level data types.

use derive_getters::Getters;
use derive_more::{AsRef, Constructor};
use serde::{Deserialize, Serialize};

/// Errors caused by invalid values for the domain types.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ModelError(pub String);

/// Result type for this module.
pub type ModelResult<T> = Result<T, ModelError>;

/// Identifier of a user record, as assigned by the database on creation.
#[derive(Clone, Constructor, Copy, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug))]
pub struct UserId(i64);

impl UserId {
    /// Returns the identifier as an `i64` for use in database queries.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Name of a user.  Names are trimmed at construction time and are guaranteed to be
/// non-empty, but they carry no uniqueness guarantee.
#[derive(AsRef, Clone, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize))]
pub struct Username(String);

impl Username {
    /// Creates a new username from `name` after validating its contents.
    pub fn new<S: Into<String>>(name: S) -> ModelResult<Username> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ModelError("Name is required and must be a non-empty string".to_owned()));
        }
        Ok(Username(name))
    }

    /// Returns a view of the name as a string.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number of hours accumulated by a user.  We store this as a `u32` but guarantee that it
/// is usable in an `i64` context because the database backends only offer signed columns.
#[derive(Clone, Copy, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize))]
pub struct Hours(u32);

impl Hours {
    /// The empty counter assigned to new users.
    pub(crate) const ZERO: Hours = Hours(0);

    /// Creates a counter from an `i64` with range validation.
    pub(crate) fn from_i64(hours: i64) -> ModelResult<Hours> {
        match u32::try_from(hours) {
            Ok(hours) => Ok(Hours(hours)),
            Err(e) => Err(ModelError(format!("Hours counter cannot be represented: {}", e))),
        }
    }

    /// Returns the counter as an `i64`.
    pub(crate) fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

/// A strictly-positive amount of hours to add to a user's counter.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub struct HoursDelta(u32);

impl HoursDelta {
    /// Creates a delta from an `i64`, rejecting non-positive and oversized amounts.
    pub(crate) fn from_i64(delta: i64) -> ModelResult<HoursDelta> {
        if delta <= 0 {
            return Err(ModelError("hoursToAdd must be a positive integer".to_owned()));
        }
        match u32::try_from(delta) {
            Ok(delta) => Ok(HoursDelta(delta)),
            Err(e) => Err(ModelError(format!("hoursToAdd is too large: {}", e))),
        }
    }
}

/// A user record as persisted in the database.
#[derive(Clone, Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    /// Unique identifier of the record.  Immutable once assigned.
    id: UserId,

    /// Display name of the user.  Mutable via the rename operation.
    name: Username,

    /// Hours accumulated by the user so far.
    hours_worked: Hours,
}

impl User {
    /// Returns a copy of this record with the name replaced by `name`.
    pub(crate) fn rename(self, name: Username) -> User {
        User { name, ..self }
    }

    /// Returns a copy of this record with `delta` added to the hours counter.
    pub(crate) fn accrue(self, delta: HoursDelta) -> ModelResult<User> {
        match self.hours_worked.0.checked_add(delta.0) {
            Some(hours) => Ok(User { hours_worked: Hours(hours), ..self }),
            None => Err(ModelError("hoursWorked counter would overflow".to_owned())),
        }
    }
}
