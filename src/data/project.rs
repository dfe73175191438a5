use enumset::EnumSetType;

#[derive(Debug, EnumSetType)]
pub enum Category {
	Frontend,
	Backend,
	FullStack,
}

impl Category {
	pub fn text_key(&self) -> &'static str {
		match self {
			Self::Frontend => "projects.filter.frontend",
			Self::Backend => "projects.filter.backend",
			Self::FullStack => "projects.filter.fullstack",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
	pub id: u32,
	pub title_key: &'static str,
	pub description_key: &'static str,
	pub technologies: &'static [&'static str],
	pub icon: &'static str,
	/// Url of the source repository, empty if there is none.
	pub github: &'static str,
	pub live: &'static str,
	pub category: Category,
	pub demo_url: Option<&'static str>,
	pub source_private: bool,
	pub preview_image: Option<&'static str>,
}

impl Project {
	/// The page to embed as a live demo.
	pub fn demo_source(&self) -> Option<&'static str> {
		self.demo_url.or(Some(self.live)).filter(|url| !url.is_empty())
	}

	/// True if a link to the repository may be shown.
	pub fn has_public_source(&self) -> bool {
		!self.source_private && !self.github.is_empty()
	}
}

static PROJECTS: [Project; 5] = [
	Project {
		id: 1,
		title_key: "projects.webStore.title",
		description_key: "projects.webStore.description",
		technologies: &["React", "TypeScript", "Node.js", "Express", "Vite", "Ant Design"],
		icon: "🛒",
		github: "",
		live: "https://www.bluetoothmobile.vn",
		category: Category::FullStack,
		demo_url: Some("https://www.bluetoothmobile.vn"),
		source_private: true,
		preview_image: Some("https://image.thum.io/get/width/1280/crop/720/https://www.bluetoothmobile.vn"),
	},
	Project {
		id: 2,
		title_key: "projects.salesManagement.title",
		description_key: "projects.salesManagement.description",
		technologies: &["React", "TypeScript", "Vite", "Ant Design", "React Query"],
		icon: "📊",
		github: "https://github.com/AleamZ/Sales-Management",
		live: "https://sales-management-henna.vercel.app",
		category: Category::FullStack,
		demo_url: Some("https://sales-management-henna.vercel.app"),
		source_private: false,
		preview_image: None,
	},
	Project {
		id: 3,
		title_key: "projects.ciResearch.title",
		description_key: "projects.ciResearch.description",
		technologies: &["ASP.NET", "C#", "Big Data", "MySQL", "Performance Optimization"],
		icon: "🏢",
		github: "",
		live: "https://ciresearch.vn/dn",
		category: Category::FullStack,
		demo_url: Some("https://ciresearch.vn/dn"),
		source_private: true,
		preview_image: Some("https://image.thum.io/get/width/1280/crop/720/https://ciresearch.vn/dn"),
	},
	Project {
		id: 4,
		title_key: "projects.amazingTech.title",
		description_key: "projects.amazingTech.description",
		technologies: &["React", "JavaScript", "SCSS", "Ant Design", "API Integration"],
		icon: "💻",
		github: "#",
		live: "#",
		category: Category::Frontend,
		demo_url: Some("https://amazing-tech-demo.vercel.app"),
		source_private: false,
		preview_image: None,
	},
	Project {
		id: 5,
		title_key: "projects.portfolio.title",
		description_key: "projects.portfolio.description",
		technologies: &["React", "TypeScript", "SCSS", "Vite"],
		icon: "💼",
		github: "https://github.com/AleamZ/Portfolio-Web",
		live: "https://www.aleamz.info.vn/",
		category: Category::Frontend,
		demo_url: Some("https://www.aleamz.info.vn/"),
		source_private: false,
		preview_image: Some("https://image.thum.io/get/width/1280/crop/720/https://www.aleamz.info.vn/"),
	},
];

pub fn projects() -> &'static [Project] {
	&PROJECTS
}

/// Projects in the category, or all of them if there is no category.
pub fn filter_projects(category: Option<Category>) -> Vec<&'static Project> {
	PROJECTS
		.iter()
		.filter(|project| category.map_or(true, |category| project.category == category))
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn filtering() {
		assert_eq!(filter_projects(None).len(), 5);
		let frontend = filter_projects(Some(Category::Frontend));
		assert_eq!(frontend.iter().map(|project| project.id).collect::<Vec<_>>(), vec![4, 5]);
		assert!(filter_projects(Some(Category::Backend)).is_empty());
	}

	#[test]
	fn public_source() {
		let by_id = |id| projects().iter().find(|project| project.id == id).unwrap();
		assert!(!by_id(1).has_public_source());
		assert!(by_id(2).has_public_source());
		assert_eq!(by_id(5).demo_source(), Some("https://www.aleamz.info.vn/"));
	}
}
