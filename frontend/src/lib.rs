//! WebAssembly entry point for the portfolio frontend.
//!
//! Hydrates the server-rendered HTML to enable client-side interactivity
//! (filtering, the detail modal, the contact form) and initializes
//! client-side logging.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Initializes `console_log` and `console_error_panic_hook` for debugging,
/// then mounts the main application component over the server-rendered body.
pub fn hydrate() {
    use app::component;
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
