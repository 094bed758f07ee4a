// Copyright 2026 the Gradient View Authors
// SPDX-License-Identifier: Apache-2.0

//! A rectangular panel that renders a linear color gradient.
//!
//! This crate provides two components:
//!
//! - [`GradientView`], a visual container that owns a [`GradientLayer`] (the
//!   retained node actually drawn by [Vello][vello]) and keeps that node's
//!   colors, end points, and geometry synchronized with its own properties.
//! - [`VerticalGradientView`], a thin variant of [`GradientView`] whose
//!   start and end points default to a top-to-bottom orientation.
//!
//! Pixel work is delegated entirely to Vello: the view assembles a
//! [`peniko::Gradient`] brush from its configuration and fills its rectangle
//! in a [`vello::Scene`]. There is no rasterization, animation, or input
//! handling here.
//!
//! Start and end points are expressed as [`UnitPoint`]s, fractions of the
//! view's rectangle, so a configured view can be laid out at any size
//! without touching its gradient properties.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub use vello::peniko::color::palette;
pub use vello::{kurbo, peniko};

mod layer;
mod persist;
mod unit_point;
mod vertical;
mod view;

pub use layer::GradientLayer;
pub use unit_point::UnitPoint;
pub use vertical::VerticalGradientView;
pub use view::GradientView;
