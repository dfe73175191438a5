/// Embedded previews render at desktop size and are scaled down into their container.
pub static PREVIEW_WIDTH: f64 = 1280.0;
pub static PREVIEW_HEIGHT: f64 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
	pub scale: f64,
	/// Offsets which center the preview, in unscaled units (translation is applied before scaling).
	pub translate_x: f64,
	pub translate_y: f64,
}

impl Default for Fit {
	fn default() -> Self {
		Self {
			scale: 1.0,
			translate_x: 0.0,
			translate_y: 0.0,
		}
	}
}

impl Fit {
	/// Fits a preview into a container, keeping its aspect ratio.
	pub fn within(container_width: f64, container_height: f64) -> Self {
		let scale = (container_width / PREVIEW_WIDTH).min(container_height / PREVIEW_HEIGHT);
		if !scale.is_finite() || scale <= 0.0 {
			return Self::default();
		}
		let offset_x = ((container_width - PREVIEW_WIDTH * scale) / 2.0).max(0.0);
		let offset_y = ((container_height - PREVIEW_HEIGHT * scale) / 2.0).max(0.0);
		Self {
			scale,
			translate_x: offset_x / scale,
			translate_y: offset_y / scale,
		}
	}

	pub fn to_css(&self) -> String {
		format!(
			"width: {PREVIEW_WIDTH}px; height: {PREVIEW_HEIGHT}px; transform-origin: top left; \
			transform: translate({}px, {}px) scale({});",
			self.translate_x, self.translate_y, self.scale
		)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn exact_fit() {
		assert_eq!(
			Fit::within(640.0, 360.0),
			Fit {
				scale: 0.5,
				translate_x: 0.0,
				translate_y: 0.0
			}
		);
	}

	#[test]
	fn tall_container_centers_vertically() {
		let fit = Fit::within(640.0, 560.0);
		assert_eq!(fit.scale, 0.5);
		assert_eq!(fit.translate_x, 0.0);
		// (560 - 360) / 2 = 100 scaled px, 200 unscaled
		assert_eq!(fit.translate_y, 200.0);
	}

	#[test]
	fn empty_container() {
		assert_eq!(Fit::within(0.0, 0.0), Fit::default());
	}
}
