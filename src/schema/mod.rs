//! Descriptors of a GraphQL schema, as authored by the host application.

pub mod enums;
pub mod meta;
pub mod model;
pub mod object;
pub mod options;
pub mod summary;
pub mod union;
