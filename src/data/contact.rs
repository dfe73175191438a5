#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
	pub icon: &'static str,
	pub title_key: &'static str,
	/// Shown as-is, or translated if it is a translation key.
	pub value: &'static str,
	/// Target and translation key of the entry's action link.
	pub link: Option<(&'static str, &'static str)>,
}

pub static CONTACTS: [ContactEntry; 5] = [
	ContactEntry {
		icon: "📍",
		title_key: "contact.location",
		value: "Thu Duc City",
		link: None,
	},
	ContactEntry {
		icon: "📱",
		title_key: "contact.phone",
		value: "0977844114",
		link: Some(("tel:0977844114", "contact.callNow")),
	},
	ContactEntry {
		icon: "📧",
		title_key: "contact.email",
		value: "datnguyentien.work@gmail.com",
		link: Some(("mailto:datnguyentien.work@gmail.com", "contact.sendEmail")),
	},
	ContactEntry {
		icon: "💼",
		title_key: "contact.linkedin",
		value: "contact.connect",
		link: Some(("https://www.linkedin.com/in/aleamz/", "contact.viewProfile")),
	},
	ContactEntry {
		icon: "🐙",
		title_key: "contact.github",
		value: "contact.githubText",
		link: Some(("https://github.com/AleamZ", "contact.visitGithub")),
	},
];
