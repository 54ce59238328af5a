use crate::{
    configuration::ResumerOptions, media_element::JsMediaElement, resumer::Resumer,
    storage::JsLocalStorage, wasm_bindgen,
};

use super::PlayerId;

/// The `WaspResumer` is the interface exported to the JavaScript-side, keeping
/// the playback position of a single player across page loads.
///
/// Its methods are only bindings converting to the right types, the actual
/// logic being in the `Resumer` it wraps.
#[wasm_bindgen]
pub struct WaspResumer {
    pub(super) inner: Resumer<JsMediaElement, JsLocalStorage>,
}

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which, as its name points at, should be called when
/// particular events happen.
#[wasm_bindgen]
impl WaspResumer {
    /// Create a new `WaspResumer` for the player identified by `player_id`.
    ///
    /// If no video identifier is set in `options`, an error is logged and the
    /// created `WaspResumer` won't do anything. Otherwise, `jsAwaitPlayerReady`
    /// is called and the position only begins to be tracked once
    /// `on_player_ready` is called.
    #[wasm_bindgen(constructor)]
    pub fn new(player_id: PlayerId, options: &ResumerOptions) -> Self {
        Self {
            inner: Resumer::new(
                options,
                JsMediaElement::new(player_id),
                JsLocalStorage::new(),
            ),
        }
    }

    /// Returns the key under which the playback position is stored.
    ///
    /// `undefined` if the position is not being tracked (yet).
    pub fn storage_key(&self) -> Option<String> {
        self.inner.storage_key().map(|key| key.to_string())
    }

    /// Returns `true` if the playback position is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Stop listening to the player's events. The `WaspResumer` won't do
    /// anything after that call.
    ///
    /// Should be called before disposing the player.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}
