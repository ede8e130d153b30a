pub mod fpl_client;
pub mod handlers;
pub mod models;
pub mod routes;
