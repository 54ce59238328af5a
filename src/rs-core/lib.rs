use wasm_bindgen::prelude::*;

mod bindings;
mod configuration;
mod media_element;
mod resumer;
mod storage;
mod tracker;
mod utils;

pub use bindings::WaspResumer;
pub use configuration::ResumerOptions;
pub use media_element::MediaObservation;
pub use utils::logger::{set_log_level, Logger, LoggerLevel};
