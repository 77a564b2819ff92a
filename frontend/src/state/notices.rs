use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

pub const MAX_NOTICES: usize = 5;
pub const SUCCESS_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice error",
            NoticeKind::Success => "notice success",
        }
    }

    /// Errors wait for the user; successes fade on their own
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        match self {
            NoticeKind::Error => None,
            NoticeKind::Success => Some(SUCCESS_NOTICE_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Bounded queue of inline banners, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    next_id: u64,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u64),
}

impl NoticeQueue {
    /// Returns the id of the new notice
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push_back(Notice {
            id,
            kind,
            message: message.into(),
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }
}

impl Reducible for NoticeQueue {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(kind, message) => {
                next.push(kind, message);
            }
            NoticeAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}
