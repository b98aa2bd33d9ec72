//! # client
//!
//! Leptos + WASM frontend for the tele-medicine site.
//!
//! This crate contains the three page widgets (scripted assistant, diagnosis
//! chat, doctor directory), their plain-data state machines, the prediction
//! endpoint client, and the small browser helpers they share. The `server`
//! crate renders it with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
