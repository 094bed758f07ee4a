// Copyright 2026 the Gradient View Authors
// SPDX-License-Identifier: Apache-2.0

//! Serialization support for restoring views from a persisted UI layout.
//!
//! The archive captures geometry only. Decoding reconstructs the view
//! through its normal constructor: backing layer in place, no colors,
//! default end points. Callers re-apply colors and points afterwards if
//! they need anything beyond the defaults.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vello::kurbo::Rect;

use crate::{GradientView, VerticalGradientView};

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct SavedView {
    #[serde(with = "serde_rect")]
    frame: Rect,
}

impl Serialize for GradientView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SavedView {
            frame: self.frame(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GradientView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let saved = SavedView::deserialize(deserializer)?;
        Ok(Self::new(saved.frame))
    }
}

impl Serialize for VerticalGradientView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SavedView {
            frame: self.frame(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VerticalGradientView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let saved = SavedView::deserialize(deserializer)?;
        // Runs the constructor's eager paired-point set.
        Ok(Self::new(saved.frame))
    }
}

mod serde_rect {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use vello::kurbo::Rect;

    pub(super) fn serialize<S: Serializer>(
        value: &Rect,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let value = (value.x0, value.y0, value.x1, value.y1);
        value.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Rect, D::Error> {
        let (x0, y0, x1, y1) = Deserialize::deserialize(deserializer)?;
        Ok(Rect::new(x0, y0, x1, y1))
    }
}
