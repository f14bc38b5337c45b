//! Types library for the stablecoin API simulator
//!
//! This library holds everything the HTTP layer composes: the request/response
//! domain types, the closed error taxonomy, the validation rules, the quote
//! engine and the response envelope. Nothing in here performs I/O.
//!
//! # Modules
//! - `stablecoin`: Stablecoin index, listing and operation types
//! - `fee`: Basis-point fee arithmetic (the quote engine)
//! - `validation`: Request validation rules and their precedence
//! - `envelope`: `{success, data}` / `{success, message}` response wrapper
//! - `rates`: Exchange-rate and APY payloads
//! - `timestamp`: UTC timestamp renderings
//! - `errors`: Error taxonomy

// Public modules
pub mod stablecoin;
pub mod fee;
pub mod validation;
pub mod envelope;
pub mod rates;
pub mod timestamp;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::stablecoin::*;
    pub use crate::fee::*;
    pub use crate::validation::*;
    pub use crate::envelope::*;
    pub use crate::rates::*;
    pub use crate::timestamp::*;
    pub use crate::errors::*;
}
