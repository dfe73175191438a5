use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub struct Config {
	level: LevelFilter,
	/// Prefix each message with its target instead of its module path.
	prefer_target: bool,
	/// Targets whose messages are dropped, matched by prefix.
	ignore: Vec<&'static str>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: LevelFilter::Debug,
			prefer_target: false,
			ignore: Vec::new(),
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	pub fn ignore(mut self, target: &'static str) -> Self {
		self.ignore.push(target);
		self
	}
}

struct ConsoleLogger(Config);

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.level && !self.0.ignore.iter().any(|prefix| metadata.target().starts_with(prefix))
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let origin = match (self.0.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		};
		let message = JsValue::from(format!("[{}] {origin}: {}", record.level(), record.args()));
		match record.level() {
			Level::Error => web_sys::console::error_1(&message),
			Level::Warn => web_sys::console::warn_1(&message),
			Level::Info => web_sys::console::info_1(&message),
			Level::Debug => web_sys::console::debug_1(&message),
			Level::Trace => web_sys::console::log_1(&message),
		}
	}

	fn flush(&self) {}
}

/// Routes all `log` output to the browser console.
pub fn init(config: Config) {
	let level = config.level;
	match log::set_boxed_logger(Box::new(ConsoleLogger(config))) {
		Ok(()) => log::set_max_level(level),
		Err(err) => web_sys::console::error_1(&JsValue::from(err.to_string())),
	}
}
