pub mod assert;

use crate::DbPool;
use actix_web::web;
use anyhow::Context;
use diesel::prelude::*;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

no_arg_sql_function!(
    last_insert_id,
    diesel::sql_types::Unsigned<diesel::sql_types::Bigint>
);

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}

pub fn last_inserted_id(conn: &MysqlConnection) -> Result<u64, diesel::result::Error> {
    diesel::select(last_insert_id).get_result::<u64>(conn)
}
