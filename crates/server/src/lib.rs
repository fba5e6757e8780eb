pub mod boundary;
pub mod errors;
pub mod mapper;
pub mod metrics;
pub mod openapi;
pub mod payload;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
