//! Fit a video into its container.
//!
//! [`fit`] is a pure function of the video's intrinsic size, the container box,
//! the [`Sizing`] mode and the [`Rotate`] mode. It has no notion of a UI framework;
//! the caller applies the resulting [`Placement`] however it renders.

mod mode;
mod placement;
mod size;

pub use mode::*;
pub use placement::*;
pub use size::*;

/// Compute the placement of a `video` inside a `container`.
///
/// Returns `None` when either size isn't usable yet, in which case the previous placement should be kept.
pub fn fit(video: Size, container: Size, sizing: Sizing, rotate: Rotate) -> Option<Placement> {
	if !video.is_usable() || !container.is_usable() {
		return None;
	}

	let video_aspect = video.aspect();

	// A quarter turn displays the video sideways, so fit against the swapped box.
	let frame = match rotate.is_quarter_turn() {
		true => container.swap(),
		false => container,
	};
	let frame_aspect = frame.aspect();

	let width_dominant = match sizing {
		Sizing::Contain => video_aspect > frame_aspect,
		Sizing::Cover => video_aspect < frame_aspect,
	};

	let (width, height, dominant) = if width_dominant {
		(frame.width, frame.width / video_aspect, Axis::Width)
	} else {
		(frame.height * video_aspect, frame.height, Axis::Height)
	};

	// The size was computed in rotated space, but the element is positioned before its transform.
	// Centering in the true container covers both cases: without rotation, frame == container.
	let top = (container.height - height) / 2.0;
	let left = (container.width - width) / 2.0;

	Some(Placement {
		width,
		height,
		top,
		left,
		rotate,
		dominant,
	})
}
