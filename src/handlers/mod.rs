//! Request handlers, one module per surface.
//!
//! Every handler composes validators and integrity checks in a fixed order,
//! then performs exactly one store operation. Authentication never reaches
//! this layer; the gate chain runs before routing.

pub mod homes;
pub mod seniors;
pub mod sensors;
pub mod tokens;
