pub mod client;
pub mod collecteur;
pub mod mouvement;
