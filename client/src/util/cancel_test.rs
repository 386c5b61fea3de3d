use super::*;

#[test]
fn fresh_token_is_live() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let task_side = token.clone();
    token.cancel();
    assert!(task_side.is_cancelled());
}

#[test]
fn deliver_writes_while_live() {
    let token = CancelToken::new();
    let mut written = None;
    assert!(token.deliver(|| written = Some(3)));
    assert_eq!(written, Some(3));
}

#[test]
fn deliver_after_cancel_drops_the_result() {
    let token = CancelToken::new();
    let task_side = token.clone();
    let mut writes = 0;

    token.cancel();
    assert!(!task_side.deliver(|| writes += 1));
    assert_eq!(writes, 0);
}
