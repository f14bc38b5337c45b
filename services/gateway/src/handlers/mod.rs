pub mod apy;
pub mod events;
pub mod exchange_rate;
pub mod health;
pub mod quote;
pub mod simulate;
pub mod stablecoin;
pub mod stats;
pub mod transaction;
