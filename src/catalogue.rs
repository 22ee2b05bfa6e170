pub mod command;
pub mod controller;
pub mod doc;
pub mod domain;
pub mod factory;
pub mod schemas;
