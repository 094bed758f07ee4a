// Copyright 2026 the Gradient View Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tracing::{trace, trace_span};
use vello::Scene;
use vello::kurbo::{Affine, Rect};
use vello::peniko::Fill;
use vello::peniko::color::{AlphaColor, Srgb};

use crate::{GradientLayer, UnitPoint};

/// Start point used when the property is unset: top center.
pub(crate) const DEFAULT_START_POINT: UnitPoint = UnitPoint::TOP;
/// End point used when the property is unset: bottom center.
pub(crate) const DEFAULT_END_POINT: UnitPoint = UnitPoint::BOTTOM;

/// A rectangular view that renders a linear color gradient.
///
/// The view owns exactly one [`GradientLayer`] and forwards every property
/// change to it as it happens; there is no batching and nothing to flush.
/// Geometry flows the same way: [`set_frame`](Self::set_frame) overwrites
/// the layer's rectangle with the view's own, so a host layout loop only
/// has to call it whenever the view's rectangle changes.
///
/// The start and end point properties are optional. Assigning `None`
/// forwards a fixed default instead (top center and bottom center
/// respectively), resolved at assignment time. The paired
/// [`set_points`](Self::set_points) setter bypasses that substitution and
/// forwards both points verbatim.
///
/// Content drawn via [`set_content`](Self::set_content) is painted above
/// the gradient and clipped to the view's rectangle.
pub struct GradientView {
    layer: GradientLayer,
    frame: Rect,
    colors: Vec<AlphaColor<Srgb>>,
    start_point: Option<UnitPoint>,
    end_point: Option<UnitPoint>,
    content: Option<Box<dyn Fn(&mut Scene, Rect) + Send + Sync + 'static>>,
}

// --- MARK: BUILDERS
impl GradientView {
    /// Creates a view covering `frame`.
    ///
    /// The backing layer exists from this point on: no colors, default end
    /// points.
    pub fn new(frame: Rect) -> Self {
        Self {
            layer: GradientLayer::new(frame),
            frame,
            colors: Vec::new(),
            start_point: None,
            end_point: None,
            content: None,
        }
    }

    /// Builder-style method for setting the gradient colors.
    pub fn with_colors(mut self, colors: impl Into<Vec<AlphaColor<Srgb>>>) -> Self {
        self.set_colors(colors);
        self
    }

    /// Builder-style method for setting the optional start point.
    ///
    /// `None` establishes the default, same as assigning `None` after
    /// construction.
    pub fn with_start_point(mut self, point: Option<UnitPoint>) -> Self {
        self.set_start_point(point);
        self
    }

    /// Builder-style method for setting the optional end point.
    ///
    /// `None` establishes the default, same as assigning `None` after
    /// construction.
    pub fn with_end_point(mut self, point: Option<UnitPoint>) -> Self {
        self.set_end_point(point);
        self
    }

    /// Builder-style method for setting content drawn above the gradient.
    pub fn with_content(
        mut self,
        content: impl Fn(&mut Scene, Rect) + Send + Sync + 'static,
    ) -> Self {
        self.set_content(content);
        self
    }
}

// --- MARK: METHODS
impl GradientView {
    /// Replaces the gradient colors wholesale and forwards them to the
    /// backing layer.
    ///
    /// Order is stop order. No validation is performed; the rendering
    /// primitive silently renders nothing for an empty list.
    pub fn set_colors(&mut self, colors: impl Into<Vec<AlphaColor<Srgb>>>) {
        self.colors = colors.into();
        self.layer.set_colors(self.colors.clone());
    }

    /// Sets the optional start point.
    ///
    /// `Some` is forwarded to the backing layer verbatim; `None` forwards
    /// the default, top center.
    pub fn set_start_point(&mut self, point: Option<UnitPoint>) {
        self.start_point = point;
        self.layer
            .set_start_point(point.unwrap_or(DEFAULT_START_POINT));
    }

    /// Sets the optional end point.
    ///
    /// `Some` is forwarded to the backing layer verbatim; `None` forwards
    /// the default, bottom center.
    pub fn set_end_point(&mut self, point: Option<UnitPoint>) {
        self.end_point = point;
        self.layer.set_end_point(point.unwrap_or(DEFAULT_END_POINT));
    }

    /// Sets both end points atomically, verbatim.
    ///
    /// This writes straight to the backing layer and does not touch the
    /// optional properties or their default substitution. It is the path
    /// [`VerticalGradientView`](crate::VerticalGradientView) uses to
    /// establish its orientation at construction.
    pub fn set_points(&mut self, start_point: UnitPoint, end_point: UnitPoint) {
        self.layer.set_start_point(start_point);
        self.layer.set_end_point(end_point);
    }

    /// Sets the view's rectangle and copies it onto the backing layer.
    ///
    /// This is the layout hook: a host layout loop calls it whenever the
    /// view's geometry changes. Calling it again with the same rectangle
    /// has no further effect.
    pub fn set_frame(&mut self, frame: Rect) {
        trace!(?frame, "syncing layer geometry");
        self.frame = frame;
        self.layer.set_frame(frame);
    }

    /// Sets content drawn above the gradient, clipped to the view's
    /// rectangle.
    ///
    /// The closure receives the view's rectangle and should draw within it.
    pub fn set_content(&mut self, content: impl Fn(&mut Scene, Rect) + Send + Sync + 'static) {
        self.content = Some(Box::new(content));
    }

    /// The view's rectangle.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The gradient colors, in stop order.
    pub fn colors(&self) -> &[AlphaColor<Srgb>] {
        &self.colors
    }

    /// The start point property as assigned; `None` means the default is in
    /// effect.
    pub fn start_point(&self) -> Option<UnitPoint> {
        self.start_point
    }

    /// The end point property as assigned; `None` means the default is in
    /// effect.
    pub fn end_point(&self) -> Option<UnitPoint> {
        self.end_point
    }

    /// Read access to the backing layer.
    ///
    /// The layer is mutated only through its owning view.
    pub fn layer(&self) -> &GradientLayer {
        &self.layer
    }

    /// Paints the view into `scene`: the gradient first, then any content
    /// above it, everything clipped to the view's rectangle.
    pub fn render(&self, scene: &mut Scene) {
        let _span = trace_span!("GradientView").entered();
        scene.push_clip_layer(Fill::NonZero, Affine::IDENTITY, &self.frame);
        self.layer.render(scene);
        if let Some(content) = &self.content {
            content(scene, self.frame);
        }
        scene.pop_layer();
    }
}

impl Default for GradientView {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl fmt::Debug for GradientView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientView")
            .field("frame", &self.frame)
            .field("colors", &self.colors)
            .field("start_point", &self.start_point)
            .field("end_point", &self.end_point)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn construction_establishes_default_points() {
        let view = GradientView::new(Rect::new(0.0, 0.0, 100.0, 100.0));

        assert_eq!(view.start_point(), None);
        assert_eq!(view.end_point(), None);
        assert_eq!(view.layer().start_point(), UnitPoint::new(0.5, 0.0));
        assert_eq!(view.layer().end_point(), UnitPoint::new(0.5, 1.0));
        assert!(view.layer().colors().is_empty());
    }

    #[test]
    fn frame_and_colors_scenario() {
        let view = GradientView::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_colors([palette::css::RED, palette::css::BLUE]);

        assert_eq!(view.layer().frame(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            view.layer().colors(),
            &[palette::css::RED, palette::css::BLUE]
        );
        assert_eq!(view.layer().start_point(), UnitPoint::TOP);
        assert_eq!(view.layer().end_point(), UnitPoint::BOTTOM);
    }

    #[test]
    fn colors_pass_through_unchanged() {
        let mut view = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let colors = vec![
            palette::css::RED,
            palette::css::GREEN,
            palette::css::BLUE,
            palette::css::RED,
        ];
        view.set_colors(colors.clone());

        assert_eq!(view.colors(), colors.as_slice());
        assert_eq!(view.layer().colors(), colors.as_slice());
    }

    #[test]
    fn explicit_points_are_forwarded_verbatim() {
        let mut view = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.set_start_point(Some(UnitPoint::new(0.2, 0.3)));
        view.set_end_point(Some(UnitPoint::new(0.9, 0.8)));

        assert_eq!(view.layer().start_point(), UnitPoint::new(0.2, 0.3));
        assert_eq!(view.layer().end_point(), UnitPoint::new(0.9, 0.8));
    }

    #[test]
    fn clearing_a_point_restores_the_default() {
        let mut view = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.set_start_point(Some(UnitPoint::new(0.2, 0.3)));
        assert_eq!(view.layer().start_point(), UnitPoint::new(0.2, 0.3));

        view.set_start_point(None);
        assert_eq!(view.layer().start_point(), UnitPoint::new(0.5, 0.0));

        view.set_end_point(Some(UnitPoint::new(0.1, 0.4)));
        view.set_end_point(None);
        assert_eq!(view.layer().end_point(), UnitPoint::new(0.5, 1.0));
    }

    #[test]
    fn paired_setter_bypasses_substitution() {
        let mut view = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.set_start_point(Some(UnitPoint::new(0.2, 0.3)));

        view.set_points(UnitPoint::new(0.0, 0.0), UnitPoint::new(1.0, 1.0));

        assert_eq!(view.layer().start_point(), UnitPoint::new(0.0, 0.0));
        assert_eq!(view.layer().end_point(), UnitPoint::new(1.0, 1.0));
        // The optional properties are not consulted or updated by this path.
        assert_eq!(view.start_point(), Some(UnitPoint::new(0.2, 0.3)));
    }

    #[test]
    fn layout_overwrites_layer_frame() {
        let mut view = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let frame = Rect::new(5.0, 5.0, 80.0, 40.0);

        view.set_frame(frame);
        assert_eq!(view.frame(), frame);
        assert_eq!(view.layer().frame(), frame);

        view.set_frame(frame);
        assert_eq!(view.layer().frame(), frame);
    }

    #[test]
    fn builder_with_absent_points_uses_defaults() {
        let view = GradientView::new(Rect::new(0.0, 0.0, 20.0, 20.0))
            .with_colors([palette::css::WHITE, palette::css::BLACK])
            .with_start_point(None)
            .with_end_point(Some(UnitPoint::new(0.7, 0.7)));

        assert_eq!(view.layer().start_point(), UnitPoint::TOP);
        assert_eq!(view.layer().end_point(), UnitPoint::new(0.7, 0.7));
    }

    #[test]
    fn render_smoke() {
        let view = GradientView::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_colors([palette::css::RED, palette::css::BLUE])
            .with_content(|scene, frame| {
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    palette::css::WHITE,
                    None,
                    &frame.inset(-10.0),
                );
            });

        let mut scene = Scene::new();
        view.render(&mut scene);

        // A view with no colors still renders (clip push/pop only).
        let empty = GradientView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        empty.render(&mut scene);
    }
}
