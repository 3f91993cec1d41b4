#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

pub use diesel::pg::PgConnection;
use diesel::r2d2::{
    self as diesel_r2d2, ConnectionManager, CustomizeConnection, Pool, PooledConnection,
};
use diesel::Connection as _;
use r2d2::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod models;
pub mod schema;

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

fn database_url() -> String {
    env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

pub fn new_pool() -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url());

    Pool::builder()
        .build(manager)
        .expect("failed to create db pool")
}

#[derive(Debug)]
struct TestTransaction;

impl CustomizeConnection<PgConnection, diesel_r2d2::Error> for TestTransaction {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel_r2d2::Error> {
        conn.begin_test_transaction()
            .map_err(diesel_r2d2::Error::QueryError)
    }
}

/// Pool for tests. It holds a single connection that sits inside a transaction
/// which is never committed, so every write is discarded when the pool drops
/// and concurrent tests never see each other's rows.
pub fn new_test_pool() -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url());

    Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestTransaction))
        .build(manager)
        .expect("failed to create test db pool")
}
