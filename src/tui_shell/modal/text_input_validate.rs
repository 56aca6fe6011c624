use crate::git;

use super::super::TextInputAction;

/// An empty editor command clears the setting.
pub(super) fn allow_empty_text_input(action: TextInputAction) -> bool {
    matches!(action, TextInputAction::EditorCommand)
}

/// Passwords are taken verbatim; everything else is trimmed.
pub(super) fn normalize_text_input(action: TextInputAction, raw: &str) -> String {
    match action {
        TextInputAction::Password => raw.to_string(),
        _ => raw.trim().to_string(),
    }
}

pub(super) fn validate_text_input(action: TextInputAction, raw: &str) -> Result<(), String> {
    match action {
        TextInputAction::NewRepoName => git::validate_name("Repository name", raw)
            .map(|_| ())
            .map_err(|e| e.to_string()),
        TextInputAction::BranchName => git::validate_name("Branch name", raw)
            .map(|_| ())
            .map_err(|e| e.to_string()),
        TextInputAction::CloneUrl => match git::repo_name_from_url(raw) {
            Some(_) => Ok(()),
            None => Err("cannot tell the repository name from this URL".to_string()),
        },
        TextInputAction::RemoteSpec => {
            if raw.split_whitespace().count() == 2 {
                Ok(())
            } else {
                Err("format: <name> <url>".to_string())
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/modal/text_input_validate_tests.rs"]
mod tests;
