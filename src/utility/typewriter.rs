use std::time::Duration;

pub static TYPING_DELAY: Duration = Duration::from_millis(150);
pub static DELETING_DELAY: Duration = Duration::from_millis(100);
/// How long the full text is shown before it starts being deleted.
pub static FULL_PAUSE: Duration = Duration::from_millis(2000);
/// How long nothing is shown before typing starts again.
pub static EMPTY_PAUSE: Duration = Duration::from_millis(1000);

/// Types out a line of text one character at a time, then deletes it again, forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
	text: Vec<char>,
	index: usize,
	deleting: bool,
}

impl Typewriter {
	pub fn new(text: &str) -> Self {
		Self {
			text: text.chars().collect(),
			index: 0,
			deleting: false,
		}
	}

	/// The currently typed prefix of the text.
	pub fn display(&self) -> String {
		self.text[..self.index].iter().collect()
	}

	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// How long the current state is held before the next [`step`](Self::step).
	pub fn delay(&self) -> Duration {
		match (self.deleting, self.index) {
			(false, index) if index < self.text.len() => TYPING_DELAY,
			(true, index) if index > 0 => DELETING_DELAY,
			(false, _) => FULL_PAUSE,
			(true, _) => EMPTY_PAUSE,
		}
	}

	pub fn step(&mut self) {
		match (self.deleting, self.index) {
			(false, index) if index < self.text.len() => self.index += 1,
			(true, index) if index > 0 => self.index -= 1,
			(false, _) => self.deleting = true,
			(true, _) => self.deleting = false,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn types_then_deletes() {
		let mut writer = Typewriter::new("Hé!");
		assert_eq!(writer.display(), "");
		assert_eq!(writer.delay(), TYPING_DELAY);
		writer.step();
		writer.step();
		assert_eq!(writer.display(), "Hé");
		writer.step();
		assert_eq!(writer.display(), "Hé!");
		assert_eq!(writer.delay(), FULL_PAUSE);
		writer.step();
		assert!(writer.is_deleting());
		assert_eq!(writer.delay(), DELETING_DELAY);
		writer.step();
		assert_eq!(writer.display(), "Hé");
		writer.step();
		writer.step();
		assert_eq!(writer.display(), "");
		assert_eq!(writer.delay(), EMPTY_PAUSE);
		writer.step();
		assert!(!writer.is_deleting());
		assert_eq!(writer, Typewriter::new("Hé!"));
	}

	#[test]
	fn empty_text_only_pauses() {
		let mut writer = Typewriter::new("");
		assert_eq!(writer.delay(), FULL_PAUSE);
		writer.step();
		assert_eq!(writer.delay(), EMPTY_PAUSE);
		writer.step();
		assert_eq!(writer.display(), "");
	}
}
