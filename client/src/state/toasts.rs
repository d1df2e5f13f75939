//! Toast queue fed by coordinator notices.
//!
//! DESIGN
//! ======
//! Each toast gets a local id so timers and dismiss buttons can remove a
//! specific entry. Only the newest few stay visible.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use session::Notice;

const MAX_VISIBLE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice`, evicting the oldest toasts past the visible limit.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
