use super::super::super::Modal;

/// Keeps at most one error line under the prompt.
pub(super) fn append_modal_error(modal: &mut Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error:"));
    modal.lines.push(format!("error: {}", msg));
}
