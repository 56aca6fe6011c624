use super::*;

fn gate_with_credentials() -> CredentialGate<&'static str> {
    let mut gate = CredentialGate::default();
    gate.begin_entry(None);
    gate.submit_username("alice");
    assert_eq!(gate.submit_password("secret"), None);
    gate
}

#[test]
fn present_credentials_release_the_action_immediately() {
    let mut gate = gate_with_credentials();
    assert_eq!(gate.require("push"), Gate::Ready("push"));
    assert!(!gate.is_prompting());
}

#[test]
fn missing_credentials_prompt_username_then_password() {
    let mut gate: CredentialGate<&str> = CredentialGate::default();
    assert_eq!(gate.require("push"), Gate::Prompting);
    assert!(gate.is_prompting());
    assert!(!gate.awaiting_password());

    gate.submit_username("alice");
    assert!(gate.awaiting_password());
    assert!(!gate.have_credentials(), "no half-filled pair");

    assert_eq!(gate.submit_password("secret"), Some("push"));
    assert_eq!(gate.credentials(), &Credentials::pair("alice", "secret"));
    assert!(!gate.is_prompting());
}

#[test]
fn action_is_released_at_most_once() {
    let mut gate: CredentialGate<&str> = CredentialGate::default();
    gate.require("push");
    gate.submit_username("alice");
    assert_eq!(gate.submit_password("secret"), Some("push"));
    assert_eq!(gate.submit_password("again"), None);
    assert_eq!(gate.credentials(), &Credentials::pair("alice", "secret"));
}

#[test]
fn cancel_at_username_step_drops_action() {
    let mut gate: CredentialGate<&str> = CredentialGate::default();
    gate.require("push");
    gate.cancel();

    assert!(!gate.have_credentials());
    assert!(!gate.is_prompting());
    assert_eq!(gate.submit_password("secret"), None);
}

#[test]
fn cancel_at_password_step_leaves_credentials_empty() {
    let mut gate: CredentialGate<&str> = CredentialGate::default();
    gate.require("push");
    gate.submit_username("alice");
    gate.cancel();

    assert!(!gate.have_credentials());
    assert_eq!(gate.credentials(), &Credentials::None);
}

#[test]
fn new_entry_flow_discards_previous_credentials() {
    let mut gate = gate_with_credentials();
    gate.begin_entry(None);
    assert!(!gate.have_credentials());
    gate.cancel();
    assert!(!gate.have_credentials());
}

#[test]
fn second_require_during_prompt_is_handed_back() {
    let mut gate: CredentialGate<&str> = CredentialGate::default();
    assert_eq!(gate.require("push"), Gate::Prompting);
    assert_eq!(gate.require("pull"), Gate::Busy("pull"));

    gate.submit_username("alice");
    assert_eq!(gate.submit_password("secret"), Some("push"));
}
