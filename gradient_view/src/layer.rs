// Copyright 2026 the Gradient View Authors
// SPDX-License-Identifier: Apache-2.0

use vello::Scene;
use vello::kurbo::{Affine, Rect};
use vello::peniko::color::{AlphaColor, ColorSpaceTag, HueDirection, Srgb};
use vello::peniko::{ColorStops, ColorStopsSource, Extend, Fill, Gradient, GradientKind};

use crate::UnitPoint;

/// The retained rendering node backing a [`GradientView`].
///
/// This is the narrow adapter over the compositing primitive: it holds a
/// color list, two unit-space end points, and a rectangle, and turns them
/// into a [`peniko::Gradient`](Gradient) fill when asked to render.
///
/// The layer is created by its view, lives exactly as long as it, and is
/// only ever mutated through it. Its start and end points are not optional
/// at this level; the owning view is responsible for substituting defaults
/// before forwarding.
///
/// [`GradientView`]: crate::GradientView
#[derive(Clone, Debug, PartialEq)]
pub struct GradientLayer {
    frame: Rect,
    colors: Vec<AlphaColor<Srgb>>,
    start_point: UnitPoint,
    end_point: UnitPoint,
}

impl GradientLayer {
    /// Creates a layer covering `frame`, with no colors and the primitive's
    /// own default end points: top center to bottom center.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            colors: Vec::new(),
            start_point: UnitPoint::TOP,
            end_point: UnitPoint::BOTTOM,
        }
    }

    /// Replaces the gradient stop colors wholesale.
    ///
    /// Order is stop order. The list is not validated here; an empty list
    /// simply renders nothing.
    pub fn set_colors(&mut self, colors: impl Into<Vec<AlphaColor<Srgb>>>) {
        self.colors = colors.into();
    }

    /// Sets the point the first gradient stop is anchored to.
    pub fn set_start_point(&mut self, point: UnitPoint) {
        self.start_point = point;
    }

    /// Sets the point the last gradient stop is anchored to.
    pub fn set_end_point(&mut self, point: UnitPoint) {
        self.end_point = point;
    }

    /// Sets the rectangle the layer is drawn into.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The rectangle the layer is drawn into.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The gradient stop colors, in stop order.
    pub fn colors(&self) -> &[AlphaColor<Srgb>] {
        &self.colors
    }

    /// The point the first gradient stop is anchored to.
    pub fn start_point(&self) -> UnitPoint {
        self.start_point
    }

    /// The point the last gradient stop is anchored to.
    pub fn end_point(&self) -> UnitPoint {
        self.end_point
    }

    /// Returns the gradient brush for the layer's current configuration.
    ///
    /// The end points are resolved against the current frame, and the colors
    /// become evenly spaced stops in sRGB interpolation.
    pub fn to_peniko_gradient(&self) -> Gradient {
        let mut stops = ColorStops::default();
        self.colors.as_slice().collect_stops(&mut stops);
        Gradient {
            kind: GradientKind::Linear {
                start: self.start_point.resolve(self.frame),
                end: self.end_point.resolve(self.frame),
            },
            extend: Extend::default(),
            interpolation_cs: ColorSpaceTag::Srgb,
            hue_direction: HueDirection::default(),
            stops,
        }
    }

    /// Fills the layer's frame with its gradient.
    ///
    /// With no colors configured this is a no-op.
    pub fn render(&self, scene: &mut Scene) {
        if self.colors.is_empty() {
            return;
        }
        let brush = self.to_peniko_gradient();
        scene.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &self.frame);
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use vello::kurbo::Point;
    use vello::peniko::color::DynamicColor;

    use super::*;
    use crate::palette;

    #[test]
    fn brush_resolves_points_against_frame() {
        let mut layer = GradientLayer::new(Rect::new(0.0, 0.0, 100.0, 200.0));
        layer.set_colors([palette::css::WHITE, palette::css::BLACK]);

        let gradient = layer.to_peniko_gradient();
        assert_matches!(
            gradient.kind,
            GradientKind::Linear { start, end }
                if start == Point::new(50.0, 0.0) && end == Point::new(50.0, 200.0)
        );
    }

    #[test]
    fn stops_carry_colors_in_order() {
        let mut layer = GradientLayer::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        layer.set_colors([palette::css::RED, palette::css::GREEN, palette::css::BLUE]);

        let gradient = layer.to_peniko_gradient();
        assert_eq!(gradient.stops.len(), 3);
        assert_eq!(gradient.stops[0].offset, 0.0);
        assert_eq!(gradient.stops[1].offset, 0.5);
        assert_eq!(gradient.stops[2].offset, 1.0);
        assert_eq!(
            gradient.stops[0].color,
            DynamicColor::from_alpha_color(palette::css::RED)
        );
        assert_eq!(
            gradient.stops[2].color,
            DynamicColor::from_alpha_color(palette::css::BLUE)
        );
    }

    #[test]
    fn empty_layer_renders_nothing() {
        let layer = GradientLayer::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        let mut scene = Scene::new();
        layer.render(&mut scene);
    }

    #[test]
    fn nonzero_origin_frame_offsets_points() {
        let mut layer = GradientLayer::new(Rect::new(10.0, 20.0, 30.0, 60.0));
        layer.set_colors([palette::css::WHITE, palette::css::BLACK]);
        layer.set_start_point(UnitPoint::TOP_LEFT);
        layer.set_end_point(UnitPoint::BOTTOM_RIGHT);

        let gradient = layer.to_peniko_gradient();
        assert_matches!(
            gradient.kind,
            GradientKind::Linear { start, end }
                if start == Point::new(10.0, 20.0) && end == Point::new(30.0, 60.0)
        );
    }
}
