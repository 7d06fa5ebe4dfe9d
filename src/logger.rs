use std::io::Write;

use env_logger::Env;

/// ` file:line` for records from this crate, ` module` for anything else.
fn location(record: &log::Record) -> Option<String> {
    let style = anstyle::Style::new().dimmed().italic();
    let location = match (record.file(), record.line()) {
        (Some(file), Some(line)) if file.starts_with("src") => format!("{file}:{line}"),
        _ => record.module_path()?.to_string(),
    };
    Some(format!(" {style}{location}{style:#}"))
}

/// Sends log records to stderr, keeping stdout for the transcript.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logger(level: log::Level, line_numbers: bool) {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", level.to_string()))
        .target(env_logger::Target::Stderr)
        .format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            let location = line_numbers
                .then(|| location(record))
                .flatten()
                .unwrap_or_default();
            writeln!(
                buf,
                "[{style}{}{style:#}{location}] {}",
                record.level(),
                record.args()
            )
        })
        .init();
}
