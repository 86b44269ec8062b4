use log::{Level, LevelFilter, Log, Metadata, Record};

/// Browser console logger.
///
/// Components log through the `*_with_component` helpers; the `shared`
/// crate logs through the `log` facade, which `init` routes here as well.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install as the `log` backend. Unknown levels fall back to `info`.
    pub fn init(level: &str) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(parse_level(level));
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::write(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::write(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::write(Level::Warn, message, component);
    }

    fn write(level: Level, message: &str, component: &str) {
        if level > log::max_level() {
            return;
        }

        let line = format!("[{}] {}", component, message);
        match level {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Self::write(record.level(), &record.args().to_string(), record.target());
        }
    }

    fn flush(&self) {}
}

pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }
}
