//! Interview App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It reads the configuration, builds the selected backend and hands it to
//! the browser front end as [`InterviewClient`].

mod client;


pub use client::InterviewClient;

use wasm_bindgen::prelude::*;

/// WASM entry point: runs when the module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Interview WASM starting...");
}
