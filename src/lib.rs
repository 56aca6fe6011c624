pub mod askpass;
pub mod credentials;
pub mod error;
pub mod executor;
pub mod git;
pub mod logger;
pub mod metadata;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LICENSE: &str = env!("CARGO_PKG_LICENSE");
pub const URL: &str = env!("CARGO_PKG_REPOSITORY");

/// One-paragraph description used by `--version` and the About panel.
pub fn about_lines() -> Vec<String> {
    vec![
        format!("{} v{}", NAME, VERSION),
        String::new(),
        env!("CARGO_PKG_DESCRIPTION").to_string(),
        format!("License: {}", LICENSE),
        format!("Source: {}", URL),
    ]
}
