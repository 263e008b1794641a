pub mod ports;
pub mod event_bus;
pub mod script;
pub mod scoring;
pub mod store;
pub mod catalog;
pub mod controller;
pub mod fixtures;
pub mod mock;
