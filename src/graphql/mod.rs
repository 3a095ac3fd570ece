pub mod helpers;
pub mod schema;
pub mod schema_impl;
