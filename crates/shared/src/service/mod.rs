pub mod client;
pub mod commission;
pub mod security;
