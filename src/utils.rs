pub mod date;
pub mod db;
pub mod logging;
