use super::{FileTree, Node};

/// A small static tree shown when the project has no public repository,
/// or its repository could not be listed.
pub fn placeholder_tree() -> FileTree {
	let tree = FileTree::from_roots(vec![
		Node::folder("", "src"),
		Node::folder("", "public"),
		Node::file("", "package.json").with_content("{\n  \"name\": \"project\",\n  \"version\": \"1.0.0\"..."),
		Node::file("", "README.md").with_content("# Project Title\n\nProject description..."),
		Node::file("", ".gitignore").with_content("node_modules/\n.env\nbuild/"),
	]);
	let tree = tree.with_children(
		"src",
		vec![
			Node::folder("src", "components"),
			Node::folder("src", "pages"),
			Node::folder("src", "utils"),
			Node::file("src", "App.tsx").with_content("// Main App component..."),
			Node::file("src", "index.tsx").with_content("// Entry point..."),
		],
	);
	let tree = tree.with_children(
		"src/components",
		vec![
			Node::file("src/components", "Header.tsx").with_content("// Header component code here..."),
			Node::file("src/components", "Footer.tsx").with_content("// Footer component code here..."),
		],
	);
	let tree = tree.with_children(
		"src/pages",
		vec![
			Node::file("src/pages", "Home.tsx").with_content("// Home page component..."),
			Node::file("src/pages", "Products.tsx").with_content("// Products page component..."),
		],
	);
	let tree = tree.with_children(
		"src/utils",
		vec![
			Node::file("src/utils", "api.ts").with_content("// API utility functions..."),
			Node::file("src/utils", "helpers.ts").with_content("// Helper functions..."),
		],
	);
	tree.with_children(
		"public",
		vec![
			Node::file("public", "index.html").with_content("<!DOCTYPE html>..."),
			Node::file("public", "favicon.ico").with_content("Binary file..."),
		],
	)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn fully_loaded() {
		let tree = placeholder_tree();
		assert_eq!(tree.len(), 18);
		for (_, node) in tree.depth_first() {
			assert!(node.is_loaded(), "{} should be loaded", node.path());
			assert_eq!(node.is_folder(), node.content().is_none());
		}
	}
}
