//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_ui::{logger, App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);
    log::info!("[APP] starting, storage key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
