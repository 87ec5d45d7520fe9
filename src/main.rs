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

//! Entry point to the service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use std::net::Ipv4Addr;
use timecard::db::postgres::PostgresOptions;
use timecard::db::sqlite::SqliteOptions;
use timecard::db::{self, users, ConnectionOptions, Db};
use timecard::env::get_optional_var;
use timecard::serve;

#[tokio::main]
async fn main() {
    env_logger::init();

    let address = get_optional_var::<Ipv4Addr>("TIMECARD", "ADDRESS")
        .unwrap()
        .unwrap_or(Ipv4Addr::UNSPECIFIED);
    let port = get_optional_var::<u16>("TIMECARD", "PORT").unwrap().unwrap_or(3000);
    let addr = (address, port);

    let opts = match get_optional_var::<String>("TIMECARD", "DB").unwrap().as_deref() {
        None | Some("sqlite") => {
            ConnectionOptions::Sqlite(SqliteOptions::from_env("TIMECARD_SQLITE").unwrap())
        }
        Some("postgres") => {
            ConnectionOptions::Postgres(PostgresOptions::from_env("TIMECARD_PGSQL").unwrap())
        }
        Some(other) => panic!("Invalid TIMECARD_DB value {}", other),
    };

    let db = db::connect(opts).await.unwrap();
    users::init_schema(&mut db.ex().await.unwrap()).await.unwrap();

    serve(addr, db).await.unwrap()
}
