//! Transient notifications.

use std::time::Duration;

/// How long each notification stays visible.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notifications currently on screen, oldest first.
///
/// Each entry is dismissed on its own timer, so removal can happen in any
/// order; insertion order is preserved for what remains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeStack {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeStack {
    /// Append a notification and return the id to dismiss it with.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stack_oldest_first() {
        let mut stack = NoticeStack::default();
        stack.push(NoticeKind::Success, "Product added successfully!");
        stack.push(NoticeKind::Error, "Error loading products. Please refresh the page.");

        let kinds: Vec<_> = stack.notices().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, [NoticeKind::Success, NoticeKind::Error]);
        assert_eq!(stack.notices()[0].message, "Product added successfully!");
    }

    #[test]
    fn dismissal_is_independent() {
        let mut stack = NoticeStack::default();
        let first = stack.push(NoticeKind::Success, "one");
        let second = stack.push(NoticeKind::Success, "two");
        let third = stack.push(NoticeKind::Error, "three");

        assert!(stack.dismiss(second));
        assert!(!stack.dismiss(second));

        let ids: Vec<_> = stack.notices().iter().map(|n| n.id).collect();
        assert_eq!(ids, [first, third]);

        stack.dismiss(first);
        stack.dismiss(third);
        assert!(stack.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut stack = NoticeStack::default();
        let a = stack.push(NoticeKind::Success, "a");
        stack.dismiss(a);
        let b = stack.push(NoticeKind::Success, "b");
        assert_ne!(a, b);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn css_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
        assert_eq!(NOTICE_LIFETIME, Duration::from_secs(4));
    }
}
