use crate::repo_browser::{FileTree, Node};
use std::collections::BTreeSet;
use yew::prelude::*;

/// Icon shown next to a file, picked by its extension.
pub fn file_icon(name: &str) -> &'static str {
	let extension = name.rsplit('.').next().unwrap_or(name).to_lowercase();
	match extension.as_str() {
		"js" => "🟨",
		"ts" => "📘",
		"jsx" | "tsx" => "⚛️",
		"css" | "scss" => "🎨",
		"html" => "🌐",
		"json" => "📋",
		"md" => "📝",
		"gitignore" => "🚫",
		"rs" => "🦀",
		_ => "📄",
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct FileTreeViewProps {
	pub tree: FileTree,
	pub expanded: BTreeSet<String>,
	#[prop_or_default]
	pub selected: Option<String>,
	/// Emits the path of a folder which was clicked.
	pub on_toggle: Callback<String>,
	/// Emits the path of a file which was clicked.
	pub on_select: Callback<String>,
}

#[function_component]
pub fn FileTreeView(props: &FileTreeViewProps) -> Html {
	html! {
		<div class="project-demo__file-tree-content">
			{render_nodes(props, props.tree.roots(), 0)}
		</div>
	}
}

fn render_nodes<'a>(props: &FileTreeViewProps, nodes: impl Iterator<Item = &'a Node>, level: usize) -> Html {
	nodes.map(|node| render_node(props, node, level)).collect::<Html>()
}

fn render_node(props: &FileTreeViewProps, node: &Node, level: usize) -> Html {
	let path = node.path().to_owned();
	let is_expanded = props.expanded.contains(&path);
	let onclick = match node.is_folder() {
		true => props.on_toggle.reform({
			let path = path.clone();
			move |_: MouseEvent| path.clone()
		}),
		false => props.on_select.reform({
			let path = path.clone();
			move |_: MouseEvent| path.clone()
		}),
	};
	let classes = classes!(
		"project-demo__file-item",
		match node.is_folder() {
			true => "project-demo__file-item--folder",
			false => "project-demo__file-item--file",
		},
		(props.selected.as_ref() == Some(&path)).then_some("project-demo__file-item--selected"),
	);
	let icon = match node.is_folder() {
		true => "📁",
		false => file_icon(node.name()),
	};
	html! {
		<div key={path.clone()} style={format!("margin-left: {}px;", level * 20)}>
			<div class={classes} {onclick}>
				<span class="project-demo__file-icon">{icon}</span>
				<span class="project-demo__file-name">{node.name().to_owned()}</span>
				if node.is_folder() {
					<span class="project-demo__file-expand">{if is_expanded { "▼" } else { "▶" }}</span>
				}
			</div>
			if node.is_folder() && is_expanded {
				{render_nodes(props, props.tree.children(&path), level + 1)}
			}
		</div>
	}
}
