use crate::bindings::{ListenerId, PlaybackEvent};

use super::MediaElement;

/// `MediaElement` recording every action performed on it.
#[derive(Default)]
pub(crate) struct FakeMediaElement {
    next_listener_id: ListenerId,
    pub(crate) listeners: Vec<(ListenerId, PlaybackEvent)>,
    pub(crate) removed_listeners: Vec<ListenerId>,
    pub(crate) seeks: Vec<f64>,
    pub(crate) ready_requests: usize,
    pub(crate) classes: Vec<String>,
}

impl FakeMediaElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing at all was asked to that `FakeMediaElement`.
    pub(crate) fn is_untouched(&self) -> bool {
        self.listeners.is_empty()
            && self.removed_listeners.is_empty()
            && self.seeks.is_empty()
            && self.ready_requests == 0
            && self.classes.is_empty()
    }
}

impl MediaElement for FakeMediaElement {
    fn seek(&mut self, position: f64) {
        self.seeks.push(position);
    }

    fn add_listener(&mut self, event: PlaybackEvent) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, event));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.removed_listeners.push(id);
    }

    fn await_ready(&mut self) {
        self.ready_requests += 1;
    }

    fn add_class(&mut self, class_name: &str) {
        self.classes.push(class_name.to_owned());
    }
}
