use super::*;

#[test]
fn cwd_follows_the_entered_repository() {
    let mut ctx = WorkContext::new("/ws");
    assert_eq!(ctx.cwd(), PathBuf::from("/ws"));

    ctx.enter_repo("proj");
    assert_eq!(ctx.repo(), Some("proj"));
    assert_eq!(ctx.cwd(), PathBuf::from("/ws/proj"));

    ctx.leave_repo();
    assert_eq!(ctx.repo(), None);
    assert_eq!(ctx.cwd(), PathBuf::from("/ws"));
    assert_eq!(ctx.workspace_root(), Path::new("/ws"));
}

#[test]
fn entering_twice_replaces_rather_than_nests() {
    let mut ctx = WorkContext::new("/ws");
    ctx.enter_repo("a");
    ctx.enter_repo("b");
    assert_eq!(ctx.cwd(), PathBuf::from("/ws/b"));
}
