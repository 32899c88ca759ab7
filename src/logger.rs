//! Operator-facing log lines with colored prefixes.
//!
//! ```ignore
//! log!("css"; "{} ({})", path, size);
//! // [css] css/styles.27p9pg.css (0.1KB, was 0.2KB)
//! ```

use owo_colors::OwoColorize;
use std::io::{Write, stdout};

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "build" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        assert!(colorize_prefix("css").contains("[css]"));
        assert!(colorize_prefix("Build").contains("[Build]"));
        assert_ne!(colorize_prefix("error"), colorize_prefix("css"));
    }
}
