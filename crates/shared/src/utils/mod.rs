mod gracefull;
mod logs;
mod name;

pub use self::gracefull::shutdown_signal;
pub use self::logs::init_logger;
pub use self::name::format_collecteur_name;
