//! Request and Response models for the cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DecodeAs, GetQuery, PageQuery, ScalarInput, StoreRequest};
pub use responses::{
    CallsResponse, CountResponse, GetResponse, HealthResponse, PageResponse, StoreResponse,
};
