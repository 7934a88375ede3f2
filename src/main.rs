mod capability;
mod config;
mod error;
mod menu;
mod playground;
mod root;

use crate::config::DEFAULT_CONTAINER_ID;

fn main() {
    if let Err(err) = root::mount(DEFAULT_CONTAINER_ID) {
        if err.is_fatal() {
            gloo_console::error!(format!("AcGame failed to start: {}", err));
        } else {
            gloo_console::warn!(format!("AcGame started with problems: {}", err));
        }
    }
}
