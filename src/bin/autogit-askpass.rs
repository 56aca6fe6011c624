use std::io::Write;

use autogit::askpass::{PASSWORD_ENV, USERNAME_ENV, answer};

fn main() {
    let prompt = std::env::args().nth(1).unwrap_or_default();
    let username = std::env::var(USERNAME_ENV).ok();
    let password = std::env::var(PASSWORD_ENV).ok();

    match answer(&prompt, username.as_deref(), password.as_deref()) {
        Some(value) => {
            let mut out = std::io::stdout();
            if writeln!(out, "{}", value).is_err() {
                std::process::exit(1);
            }
        }
        None => std::process::exit(1),
    }
}
