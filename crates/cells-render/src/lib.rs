//! Cells Render - the display half of the renderer
//!
//! Converts raw influence sums into pixel colors under the configured
//! mode and drives the full-frame scan into a caller-owned byte buffer.

mod frame;
mod mapper;

pub use frame::{FrameRenderer, FrameView, BYTES_PER_PIXEL};
pub use mapper::{map_influence, stripe_color, STRIPE_PALETTE};
