use enumset::EnumSetType;

#[derive(Debug, EnumSetType)]
pub enum SkillCategory {
	Frontend,
	Backend,
	Database,
	Tools,
	Cloud,
}

impl SkillCategory {
	pub fn text_key(&self) -> &'static str {
		match self {
			Self::Frontend => "skills.category.frontend",
			Self::Backend => "skills.category.backend",
			Self::Database => "skills.category.database",
			Self::Tools => "skills.category.tools",
			Self::Cloud => "skills.category.cloud",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
	pub name: &'static str,
	/// Proficiency in percent.
	pub level: u8,
	pub category: SkillCategory,
	pub icon: &'static str,
}

macro_rules! skill {
	($name:literal, $level:literal, $category:ident, $icon:literal) => {
		Skill {
			name: $name,
			level: $level,
			category: SkillCategory::$category,
			icon: $icon,
		}
	};
}

static SKILLS: [Skill; 14] = [
	skill!("React", 95, Frontend, "⚛️"),
	skill!("TypeScript", 90, Frontend, "📘"),
	skill!("JavaScript", 92, Frontend, "🟨"),
	skill!("Vite", 88, Frontend, "⚡"),
	skill!("Ant Design", 85, Frontend, "🎨"),
	skill!("Next.js", 87, Frontend, "⏭️"),
	skill!("Tailwind CSS", 85, Frontend, "🌬️"),
	skill!("Node.js", 80, Backend, "🟢"),
	skill!("Express.js", 75, Backend, "🚀"),
	skill!("ASP.NET", 70, Backend, "🔷"),
	skill!("MongoDB", 70, Database, "🍃"),
	skill!("MySQL", 65, Database, "🐬"),
	skill!("Git", 85, Tools, "📝"),
	skill!("Figma", 75, Tools, "🎯"),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
	SKILLS.iter().filter(move |skill| skill.category == category)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn by_category() {
		assert_eq!(skills_in(SkillCategory::Frontend).count(), 7);
		assert_eq!(skills_in(SkillCategory::Cloud).count(), 0);
		assert!(skills_in(SkillCategory::Database).all(|skill| skill.level <= 100));
	}
}
