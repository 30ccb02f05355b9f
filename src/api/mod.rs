//! API Module
//!
//! HTTP handlers and routing for the cache REST API.
//!
//! # Endpoints
//! - `PUT /store` - Store a scalar under a generated key
//! - `GET /get/:key` - Retrieve a value by key
//! - `GET /calls/:operation` - Call count and history
//! - `GET /page` - Fetch a page through the TTL cache
//! - `GET /page/count` - Page access count
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
