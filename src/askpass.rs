//! Answers git's credential prompts from environment values.
//!
//! git runs the program named by `GIT_ASKPASS` with the prompt text as its only
//! argument and reads the answer from stdout.

/// File name of the helper binary, without the platform executable suffix.
pub const ASKPASS_BIN: &str = "autogit-askpass";

pub const USERNAME_ENV: &str = "AUTOGIT_USERNAME";
pub const PASSWORD_ENV: &str = "AUTOGIT_PASSWORD";

/// Picks the answer for `prompt`, or `None` when the prompt asks for neither a
/// username nor a password (or the matching value is unset).
pub fn answer<'a>(
    prompt: &str,
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Option<&'a str> {
    let prompt = prompt.to_lowercase();
    if prompt.contains("username") {
        return username;
    }
    if prompt.contains("password") {
        return password;
    }
    None
}

/// Location of the helper binary installed next to the running executable.
pub fn helper_path() -> std::io::Result<std::path::PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.with_file_name(format!(
        "{}{}",
        ASKPASS_BIN,
        std::env::consts::EXE_SUFFIX
    )))
}

#[cfg(test)]
#[path = "tests/askpass_tests.rs"]
mod tests;
