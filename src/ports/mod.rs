//! Port traits, the seams between domain logic and the outside world.

pub mod store_port;
pub mod price_port;
pub mod config_port;
pub mod report_port;
