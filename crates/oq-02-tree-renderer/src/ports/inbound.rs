//! Inbound Ports (Driving Ports)
//!
//! The API the front end uses to turn an answer into a drawing.

use shared_types::{AnswerPayload, TreeNode};

use super::outbound::DrawSurface;
use crate::domain::TreeLayout;
use crate::error::RenderError;

/// Primary tree renderer API (Driving Port)
pub trait TreeRendererApi {
    /// Lay out `root` with the configured bounds and margins.
    ///
    /// Returns `InvalidTree` when `root` is `None`.
    fn layout(&self, root: Option<&TreeNode>) -> Result<TreeLayout, RenderError>;

    /// Replace the contents of `surface` with the drawing of `layout`.
    ///
    /// The surface is cleared first; repeated calls never overlay.
    fn render(&self, layout: &TreeLayout, surface: &mut dyn DrawSurface);

    /// Lay out the payload's tree to fit `surface` and draw it.
    ///
    /// A payload without tree raises `InvalidTree` and leaves the surface
    /// untouched.
    fn visualize(
        &self,
        payload: &AnswerPayload,
        surface: &mut dyn DrawSurface,
    ) -> Result<TreeLayout, RenderError>;
}
