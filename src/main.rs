use portfolio::logging;

#[cfg(target_family = "wasm")]
fn main() {
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	yew::Renderer::<portfolio::components::App>::new().render();
}

/// Browses a github repository from the terminal, the same way the project viewer does.
#[cfg(not(target_family = "wasm"))]
#[derive(clap::Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), long_about = None)]
struct Cli {
	/// Url of the repository, e.g. https://github.com/owner/name
	url: String,
	/// Folders to expand; a file is printed instead.
	#[arg(value_name = "PATH")]
	paths: Vec<String>,
	/// Personal access token, lifts the rate limit of anonymous requests.
	#[arg(long)]
	token: Option<String>,
	#[arg(long, default_value = "info")]
	log_level: logging::console::LevelFilter,
}

#[cfg(not(target_family = "wasm"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	use clap::Parser;
	use portfolio::repo_browser::{resolve_repository, select_file, FileTree, NodeKind};

	let cli = Cli::parse();
	logging::console::init(env!("CARGO_PKG_NAME"), cli.log_level, &[])?;

	let client = github::GithubClient::new(cli.token.as_deref(), portfolio::APP_USER_AGENT)?;
	let Some(repository) = resolve_repository(&client, &cli.url).await? else {
		anyhow::bail!("{:?} does not name a github repository", cli.url);
	};
	log::info!("Browsing {}@{}", repository.id(), repository.default_branch);

	let mut tree = FileTree::load_root(&client, &repository).await?;
	let mut files = Vec::new();
	for path in &cli.paths {
		let segments = path.split('/').filter(|segment| !segment.is_empty()).collect::<Vec<_>>();
		for depth in 1..=segments.len() {
			let prefix = segments[..depth].join("/");
			let Some(node) = tree.get(&prefix) else {
				anyhow::bail!("{prefix:?} does not exist in {}", repository.id());
			};
			match node.kind() {
				NodeKind::Folder => tree = tree.expand(&client, &repository, &prefix).await?,
				NodeKind::File => {
					tree = select_file(&tree, &client, &repository, &prefix).await;
					files.push(prefix);
					break;
				}
			}
		}
	}

	for (depth, node) in tree.depth_first() {
		let marker = match (node.kind(), node.is_loaded()) {
			(NodeKind::Folder, true) => "-",
			(NodeKind::Folder, false) => "+",
			(NodeKind::File, _) => " ",
		};
		println!("{}{marker} {}", "  ".repeat(depth), node.name());
	}
	for path in files {
		println!("\n==> {path} <==");
		println!("{}", tree.cached_content(&path).unwrap_or_default());
	}
	Ok(())
}
