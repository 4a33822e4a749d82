pub mod client;
pub mod collecteur;
pub mod commission;
pub mod jwt;
pub mod mouvement;
pub mod security;
