// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer gesture state machine.
//!
//! Exactly one of panning/dragging can be active at a time; the enum makes
//! concurrent gestures unrepresentable. Wheel input bypasses the state
//! machine entirely and always zooms.

use crate::layout::OffsetMap;
use crate::model::PersonId;
use crate::scene::{Point, Scene};

use super::transform::Transform;

/// A pointer event in diagram-local screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Wheel { at: Point, delta: f64 },
}

/// Current gesture. `last` is the previous pointer position in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Panning { last: Point },
    Dragging { person: PersonId, last: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchOutcome {
    None,
    PanStarted,
    DragStarted { person: PersonId },
    Panned,
    Dragged { person: PersonId },
    Released,
    Zoomed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerController {
    gesture: Gesture,
}

impl PointerController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// Routes one pointer event to node-drag, background-pan, or zoom.
    ///
    /// Drag deltas are divided by the zoom scale so offsets accumulate in
    /// world units; pan deltas stay in raw screen units.
    pub fn dispatch(
        &mut self,
        event: PointerEvent,
        scene: &Scene,
        transform: &mut Transform,
        offsets: &mut OffsetMap,
    ) -> DispatchOutcome {
        match event {
            PointerEvent::Down(at) => {
                if !self.is_idle() {
                    return DispatchOutcome::None;
                }
                match scene.hit_test(transform.to_world(at)) {
                    Some(person) => {
                        self.gesture = Gesture::Dragging { person, last: at };
                        DispatchOutcome::DragStarted { person }
                    }
                    None => {
                        self.gesture = Gesture::Panning { last: at };
                        DispatchOutcome::PanStarted
                    }
                }
            }
            PointerEvent::Move(at) => match self.gesture {
                Gesture::Idle => DispatchOutcome::None,
                Gesture::Panning { last } => {
                    transform.pan_by(at.x - last.x, at.y - last.y);
                    self.gesture = Gesture::Panning { last: at };
                    DispatchOutcome::Panned
                }
                Gesture::Dragging { person, last } => {
                    offsets.nudge(
                        person,
                        (at.x - last.x) / transform.k,
                        (at.y - last.y) / transform.k,
                    );
                    self.gesture = Gesture::Dragging { person, last: at };
                    DispatchOutcome::Dragged { person }
                }
            },
            PointerEvent::Up => {
                if self.is_idle() {
                    return DispatchOutcome::None;
                }
                self.gesture = Gesture::Idle;
                DispatchOutcome::Released
            }
            PointerEvent::Wheel { at, delta } => {
                transform.zoom_at(at, delta);
                DispatchOutcome::Zoomed
            }
        }
    }
}

impl Default for PointerController {
    fn default() -> Self {
        Self::new()
    }
}
