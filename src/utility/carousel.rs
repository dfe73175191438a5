//! Placement of the cards in the 3D project carousel, relative to the active card.

pub static CARD_SPACING: f64 = 320.0;
pub static DEPTH_STEP: f64 = 120.0;
pub static ROTATION_STEP: f64 = 25.0;
pub static SCALE_STEP: f64 = 0.08;
pub static MIN_SCALE: f64 = 0.8;
pub static TOP_Z_INDEX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
	pub translate_x: f64,
	pub translate_z: f64,
	/// Degrees.
	pub rotate_y: f64,
	pub scale: f64,
	pub z_index: i32,
}

impl CardTransform {
	pub fn for_card(index: usize, active: usize) -> Self {
		let offset = index as f64 - active as f64;
		let distance = offset.abs();
		Self {
			translate_x: offset * CARD_SPACING,
			translate_z: -DEPTH_STEP * distance,
			rotate_y: -ROTATION_STEP * offset,
			scale: (1.0 - distance * SCALE_STEP).max(MIN_SCALE),
			z_index: TOP_Z_INDEX - distance as i32,
		}
	}

	pub fn to_css(&self) -> String {
		format!(
			"transform: translateX({}px) translateZ({}px) rotateY({}deg) scale({}); z-index: {};",
			self.translate_x, self.translate_z, self.rotate_y, self.scale, self.z_index
		)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
	Previous,
	Next,
}

impl Navigation {
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"ArrowLeft" => Some(Self::Previous),
			"ArrowRight" => Some(Self::Next),
			_ => None,
		}
	}

	/// Moves the active index, staying within `0..count`.
	pub fn apply(self, active: usize, count: usize) -> usize {
		match self {
			Self::Previous => active.saturating_sub(1),
			Self::Next => (active + 1).min(count.saturating_sub(1)),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn active_card_is_front_and_center() {
		let transform = CardTransform::for_card(2, 2);
		assert_eq!(transform.translate_x, 0.0);
		assert_eq!(transform.translate_z, 0.0);
		assert_eq!(transform.rotate_y, 0.0);
		assert_eq!(transform.scale, 1.0);
		assert_eq!(transform.z_index, 100);
	}

	#[test]
	fn neighbours() {
		let left = CardTransform::for_card(0, 1);
		assert_eq!(left.translate_x, -320.0);
		assert_eq!(left.translate_z, -120.0);
		assert_eq!(left.rotate_y, 25.0);
		assert_eq!(left.z_index, 99);
		let right = CardTransform::for_card(2, 1);
		assert_eq!(right.translate_x, 320.0);
		assert_eq!(right.rotate_y, -25.0);
		assert_eq!(right.scale, left.scale);
	}

	#[test]
	fn far_cards_are_clamped() {
		assert_eq!(CardTransform::for_card(10, 0).scale, MIN_SCALE);
	}

	#[test]
	fn navigation_stays_in_bounds() {
		assert_eq!(Navigation::Previous.apply(0, 5), 0);
		assert_eq!(Navigation::Previous.apply(3, 5), 2);
		assert_eq!(Navigation::Next.apply(3, 5), 4);
		assert_eq!(Navigation::Next.apply(4, 5), 4);
		assert_eq!(Navigation::Next.apply(0, 0), 0);
		assert_eq!(Navigation::from_key("ArrowRight"), Some(Navigation::Next));
		assert_eq!(Navigation::from_key("Enter"), None);
	}
}
