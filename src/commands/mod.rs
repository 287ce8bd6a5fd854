//! Backend Command Wrappers
//!
//! Frontend bindings to the REST backend, organized by resource.

mod food;

pub use food::HttpFoodApi;
