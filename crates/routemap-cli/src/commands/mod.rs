//! Command implementations for the routemap CLI

mod generate;
mod routes;

pub use generate::execute as generate_sitemap;
pub use routes::execute as list_routes;
