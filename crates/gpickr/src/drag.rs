//! Dragging stops along the track, and dragging them off it to delete.
//!
//! A gesture is `begin_drag` → any number of `drag_to` → `end_drag`. The
//! embedder converts pointer positions into a track location and a
//! perpendicular distance from the track before calling in; the editor has
//! no notion of layout.

use crate::editor::StopEditor;
use crate::error::EditError;
use crate::model::StopHandle;

/// Pulling a stop farther than this from the track marks it for removal.
pub const DRAG_REMOVE_DISTANCE: f32 = 50.0;

/// Number of stops that must exist for drag-to-remove to arm.
const MIN_STOPS_FOR_DRAG_REMOVE: usize = 3;

/// One in-progress drag of one stop.
#[derive(Debug)]
pub struct DragSession {
    handle: StopHandle,
    hidden: bool,
}

impl DragSession {
    #[inline]
    pub fn handle(&self) -> StopHandle {
        self.handle
    }

    /// `true` while the stop is pulled off the track: the embedder should
    /// hide its marker, and releasing now removes the stop.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// What releasing the pointer did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragOutcome {
    /// The stop stays where the last move put it.
    Relocated,
    /// The stop was pulled off the track and deleted.
    Removed,
}

impl StopEditor {
    /// Start dragging `handle`. The stop becomes the focused stop.
    pub fn begin_drag(&mut self, handle: StopHandle) -> Result<DragSession, EditError> {
        self.focus(handle)?;
        log::trace!("drag started");
        Ok(DragSession { handle, hidden: false })
    }

    /// Apply one pointer move.
    ///
    /// `location` is the pointer's position along the track (clamped into
    /// `[0, 1]`); `distance` is how far it is from the track, either side.
    /// While the stop is off the track it is not relocated.
    pub fn drag_to(&mut self, session: &mut DragSession, location: f32, distance: f32) -> Result<(), EditError> {
        session.hidden = distance.abs() > DRAG_REMOVE_DISTANCE && self.len() >= MIN_STOPS_FOR_DRAG_REMOVE;
        if session.hidden {
            log::trace!("stop pulled {} off the track", distance.abs());
            return Ok(());
        }
        self.relocate_stop(session.handle, location)
    }

    /// Release the pointer. Removes the stop if it was off the track.
    pub fn end_drag(&mut self, session: DragSession) -> Result<DragOutcome, EditError> {
        if session.hidden {
            self.remove_by_handle(session.handle)?;
            return Ok(DragOutcome::Removed);
        }
        Ok(DragOutcome::Relocated)
    }
}
