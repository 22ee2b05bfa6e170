pub mod books;
pub mod catalogue;
pub mod core;
pub mod utils;
