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

//! Extends the driver with operations against the whole users collection.

use crate::db::users;
use crate::driver::{Driver, DriverResult};
use crate::model::User;

impl Driver {
    /// Fetches all users sorted by their identifier.
    pub(crate) async fn get_users(self) -> DriverResult<Vec<User>> {
        let mut ex = self.db.ex().await?;
        let users = users::get_users(&mut ex).await?;
        Ok(users)
    }

    /// Deletes every stored user.  Succeeds even when there are none.
    pub(crate) async fn delete_all_users(self) -> DriverResult<()> {
        let mut ex = self.db.ex().await?;
        users::delete_all_users(&mut ex).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::TestContext;
    use crate::model::Username;

    #[tokio::test]
    async fn test_get_users_none() {
        let context = TestContext::setup().await;

        assert!(context.driver().get_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_users_sorted_by_id() {
        let context = TestContext::setup().await;

        let mut exp_users = vec![];
        for name in ["Ana", "Bruno", "Carla"] {
            let name = Username::new(name).unwrap();
            exp_users.push(context.driver().create_user(name).await.unwrap());
        }

        assert_eq!(exp_users, context.driver().get_users().await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_all_users() {
        let context = TestContext::setup().await;

        for name in ["Ana", "Bruno"] {
            context.driver().create_user(Username::new(name).unwrap()).await.unwrap();
        }

        context.driver().delete_all_users().await.unwrap();
        assert!(context.driver().get_users().await.unwrap().is_empty());

        // Deleting an empty collection is not an error.
        context.driver().delete_all_users().await.unwrap();
    }
}
