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

//! Extends the driver with operations against a single user.

use crate::db::users;
use crate::driver::{Driver, DriverResult};
use crate::model::{HoursDelta, User, UserId, Username};

impl Driver {
    /// Creates a new user named `name` with a zeroed hours counter.
    pub(crate) async fn create_user(self, name: Username) -> DriverResult<User> {
        let mut ex = self.db.ex().await?;
        let user = users::create_user(&mut ex, &name).await?;
        Ok(user)
    }

    /// Fetches the user with identifier `id`.
    pub(crate) async fn get_user(self, id: UserId) -> DriverResult<User> {
        let mut ex = self.db.ex().await?;
        let user = users::get_user(&mut ex, id).await?;
        Ok(user)
    }

    /// Gives the user `id` a new `name`, or leaves the user untouched when no name is supplied.
    ///
    /// Returns the resulting user in both cases.
    pub(crate) async fn rename_user(self, id: UserId, name: Option<Username>) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;

        let user = users::get_user(tx.ex(), id).await?;
        let user = match name {
            Some(name) => {
                let user = user.rename(name);
                users::update_user(tx.ex(), &user).await?;
                user
            }
            None => user,
        };

        tx.commit().await?;
        Ok(user)
    }

    /// Accrues `hours_to_add` hours onto the counter of the user `id` and returns the updated
    /// user.
    ///
    /// The existence of the user is checked before the amount is validated, so an unknown `id`
    /// reports a missing entity even when the amount is invalid too.
    pub(crate) async fn add_hours(self, id: UserId, hours_to_add: i64) -> DriverResult<User> {
        let mut tx = self.db.begin().await?;

        let user = users::get_user(tx.ex(), id).await?;
        let delta = HoursDelta::from_i64(hours_to_add)?;
        let user = user.accrue(delta)?;
        users::update_user(tx.ex(), &user).await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Deletes the user with identifier `id`.
    pub(crate) async fn delete_user(self, id: UserId) -> DriverResult<()> {
        let mut ex = self.db.ex().await?;
        users::delete_user(&mut ex, id).await?;
        Ok(())
    }
}
