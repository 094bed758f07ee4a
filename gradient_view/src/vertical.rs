// Copyright 2026 the Gradient View Authors
// SPDX-License-Identifier: Apache-2.0

use std::ops::{Deref, DerefMut};

use vello::kurbo::Rect;
use vello::peniko::color::{AlphaColor, Srgb};

use crate::view::{DEFAULT_END_POINT, DEFAULT_START_POINT};
use crate::{GradientView, UnitPoint};

/// A [`GradientView`] whose orientation defaults to top-to-bottom.
///
/// Construction unconditionally establishes the (0.5, 0) → (0.5, 1) end
/// points through the verbatim [`set_points`](GradientView::set_points)
/// path, before any caller-supplied points are considered. The builder
/// methods then go through the base view's individual setters, so an
/// explicitly assigned point is honored and an absent one falls back to the
/// same default the eager set already wrote.
///
/// The type derefs to [`GradientView`]; every base operation is available
/// on it unchanged.
#[derive(Debug)]
pub struct VerticalGradientView {
    view: GradientView,
}

// --- MARK: BUILDERS
impl VerticalGradientView {
    /// Creates a view covering `frame`, oriented top-to-bottom.
    pub fn new(frame: Rect) -> Self {
        let mut view = GradientView::new(frame);
        view.set_points(DEFAULT_START_POINT, DEFAULT_END_POINT);
        Self { view }
    }

    /// Builder-style method for setting the gradient colors.
    pub fn with_colors(mut self, colors: impl Into<Vec<AlphaColor<Srgb>>>) -> Self {
        self.view.set_colors(colors);
        self
    }

    /// Builder-style method for setting the optional start point.
    ///
    /// Goes through the substituting setter, so `None` re-assigns the
    /// default the constructor already established.
    pub fn with_start_point(mut self, point: Option<UnitPoint>) -> Self {
        self.view.set_start_point(point);
        self
    }

    /// Builder-style method for setting the optional end point.
    ///
    /// Goes through the substituting setter, so `None` re-assigns the
    /// default the constructor already established.
    pub fn with_end_point(mut self, point: Option<UnitPoint>) -> Self {
        self.view.set_end_point(point);
        self
    }
}

impl Default for VerticalGradientView {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl Deref for VerticalGradientView {
    type Target = GradientView;

    fn deref(&self) -> &Self::Target {
        &self.view
    }
}

impl DerefMut for VerticalGradientView {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.view
    }
}
