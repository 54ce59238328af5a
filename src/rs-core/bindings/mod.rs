mod event_listeners;
mod js_functions;
mod wasp_resumer;

pub use js_functions::*;
pub use wasp_resumer::WaspResumer;
