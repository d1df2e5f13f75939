use super::*;

fn notice(title: &str) -> Notice {
    Notice::info(title, "")
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    let b = state.push(notice("b"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_keeps_newest_visible() {
    let mut state = ToastState::default();
    for title in ["a", "b", "c", "d"] {
        state.push(notice(title));
    }
    let titles: Vec<&str> = state.items.iter().map(|t| t.notice.title.as_str()).collect();
    assert_eq!(titles, ["b", "c", "d"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    state.push(notice("b"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].notice.title, "b");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
