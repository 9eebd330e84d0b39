//! Public library API for converting runtime values to and from constructor schemas.

/// Schema model, encoder, decoder, and constructor namespaces.
pub mod schema;
