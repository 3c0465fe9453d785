mod gracefullshutdown;
mod logs;
mod parse_datetime;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::parse_datetime::parse_datetime;
