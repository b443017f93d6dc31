pub mod api_key;
pub mod gate;
pub mod token;

pub use api_key::ApiKeyGate;
pub use gate::{auth_gate_middleware, path_is_protected, Gate, GateDecision};
pub use token::{TokenGate, TOKEN_HEADER};
