#[macro_use]
extern crate diesel;

mod customer;
mod database;
mod models;
mod protocol;
mod queue;
mod schema;
mod shopkeeper;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = "127.0.0.1:8080";
    log::info!("turn queue server listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .data(pool.clone())
            // customer
            .service(
                web::scope("/customer")
                    .configure(customer::config),
            )
            // shopkeeper
            .service(
                web::scope("/shopkeeper")
                    .configure(shopkeeper::config),
            )
    })
    .bind(bind)?
    .run()
    .await
}
