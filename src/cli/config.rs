//! Handler for the `config` command.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;

/// Print the effective configuration.
///
/// Loading already validated it; errors never reach this point.
pub fn execute(config: &Config, source: Option<&Path>) {
    output::section("Effective Configuration");
    match source {
        Some(path) => output::key_value("Source", path.display()),
        None => output::key_value("Source", "(built-in defaults)"),
    }
    output::key_value("Log level", &config.logging.level);
    output::key_value("Log format", &config.logging.format);

    output::section("Pairs");
    output::key_value("Provider", &config.pairs.provider_url);
    output::key_value("Pair storage", &config.pairs.pair_storage);
    output::key_value("Limit", config.pairs.limit);

    let render = &config.render;
    output::section("Render");
    output::key_value("URL", &render.url);
    output::key_value(
        "Heading",
        format!("{:?} ({} ms)", render.heading, render.heading_timeout_ms),
    );
    output::key_value(
        "Text",
        format!("{:?} ({} ms)", render.text, render.text_timeout_ms),
    );
    output::key_value("Success shot", render.success_screenshot().display());
    output::key_value("Error shot", render.error_screenshot().display());
    output::key_value("Headless", render.headless);
    if !render.sandbox {
        output::warn("Chrome sandbox disabled");
    }
    match &render.chrome_executable {
        Some(path) => output::key_value("Chrome", path.display()),
        None => output::key_value("Chrome", "(auto-detect)"),
    }

    println!();
    output::ok("Configuration is valid");
}
