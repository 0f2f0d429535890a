//! WASM entry point for the Leptos CSR demo

use leptos::mount::mount_to_body;
use navmenu_web::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
