// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewing state: the pan/zoom transform and the pointer gesture machine.

pub mod pointer;
pub mod transform;

pub use pointer::{DispatchOutcome, Gesture, PointerController, PointerEvent};
pub use transform::{Transform, FIT_MARGIN, K_MAX, K_MIN, WHEEL_ZOOM_RATE};
