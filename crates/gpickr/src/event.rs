//! Typed notification channels.
//!
//! Each channel has its own callback signature:
//!
//! | Channel | Fired when | Callback |
//! |---------|-----------|----------|
//! | init | [`StopEditor::init`] runs the first time | `FnMut(&StopEditor)` |
//! | change | any accepted, non-silent edit | `FnMut(&StopEditor, &ChangeEvent)` |
//! | color change | the focused stop is recolored | `FnMut(&StopEditor, &ColorToken)` |
//!
//! Listeners stay registered until removed with [`StopEditor::off`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use gpickr_css::{ColorToken, Mode};

use crate::editor::StopEditor;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Init,
    Change,
    ColorChange,
}

/// Returned by the `on_*` registration calls; pass to [`StopEditor::off`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId {
    channel: Channel,
    id: u64,
}

impl ListenerId {
    fn new(channel: Channel) -> Self {
        Self { channel, id: NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed) }
    }

    pub fn channel(self) -> Channel {
        self.channel
    }
}

/// Payload of the change channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub mode: Mode,
    /// The full declaration for `mode` after the edit.
    pub gradient: String,
}

pub type InitListener = dyn FnMut(&StopEditor);
pub type ChangeListener = dyn FnMut(&StopEditor, &ChangeEvent);
pub type ColorChangeListener = dyn FnMut(&StopEditor, &ColorToken);

// ── Slot ──────────────────────────────────────────────────────────────────

/// Callbacks of one channel, in registration order.
pub(crate) struct Slot<F: ?Sized> {
    entries: Vec<(ListenerId, Box<F>)>,
}

impl<F: ?Sized> Slot<F> {
    fn add(&mut self, channel: Channel, callback: Box<F>) -> ListenerId {
        let id = ListenerId::new(channel);
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    /// Detach the callbacks so they can borrow the editor while running.
    pub(crate) fn take(&mut self) -> Vec<(ListenerId, Box<F>)> {
        std::mem::take(&mut self.entries)
    }

    /// Reattach after [`Slot::take`].
    pub(crate) fn restore(&mut self, taken: Vec<(ListenerId, Box<F>)>) {
        debug_assert!(self.entries.is_empty(), "listener registered during emission");
        self.entries = taken;
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<F: ?Sized> Default for Slot<F> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

// ── Listeners ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct Listeners {
    pub(crate) init: Slot<InitListener>,
    pub(crate) change: Slot<ChangeListener>,
    pub(crate) color_change: Slot<ColorChangeListener>,
}

impl Listeners {
    pub(crate) fn add_init(&mut self, cb: Box<InitListener>) -> ListenerId {
        self.init.add(Channel::Init, cb)
    }

    pub(crate) fn add_change(&mut self, cb: Box<ChangeListener>) -> ListenerId {
        self.change.add(Channel::Change, cb)
    }

    pub(crate) fn add_color_change(&mut self, cb: Box<ColorChangeListener>) -> ListenerId {
        self.color_change.add(Channel::ColorChange, cb)
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match id.channel {
            Channel::Init => self.init.remove(id),
            Channel::Change => self.change.remove(id),
            Channel::ColorChange => self.color_change.remove(id),
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("init", &self.init.len())
            .field("change", &self.change.len())
            .field("color_change", &self.color_change.len())
            .finish()
    }
}
