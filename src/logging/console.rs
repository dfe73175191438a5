use anyhow::Result;
pub use log::LevelFilter;

/// Logs to the terminal and to `<name>.log` in the working directory, which is truncated on every run.
/// Messages whose target starts with any of the `ignore` prefixes are dropped.
pub fn init(name: &str, level: LevelFilter, ignore: &[&'static str]) -> Result<()> {
	use simplelog::*;
	let log_path = std::env::current_dir()?.join(format!("{name}.log"));
	let file = std::fs::OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&log_path)?;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_max_level(LevelFilter::Error)
			.set_time_format_custom(format_description!("[year].[month].[day]-[hour].[minute].[second]"))
			// [ERROR]
			// [ WARN]
			// [ INFO]
			.set_level_padding(LevelPadding::Left)
			.set_thread_level(LevelFilter::Error)
			.set_thread_mode(ThreadLogMode::Names)
			.set_thread_padding(ThreadPadding::Left(5))
			// requests log under the `github` target, everything else under its module path
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for prefix in ignore {
			builder.add_filter_ignore_str(prefix);
		}
		builder.build()
	};
	CombinedLogger::init(vec![
		TermLogger::new(level, cfg.clone(), TerminalMode::Stderr, ColorChoice::Auto),
		WriteLogger::new(LevelFilter::Trace, cfg, file),
	])?;
	log::info!("Writing log to {}", log_path.display());
	Ok(())
}
