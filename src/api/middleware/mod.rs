// Middleware module

pub mod cors;

#[allow(unused_imports)]
pub use cors::create_cors_layer;
