use shared::{Entity, EntityKind};
use std::rc::Rc;
use yew::Reducible;

/// A delete the user asked for but has not confirmed yet.
///
/// Nothing is sent until the confirmation dialog is accepted; declining
/// drops this value and leaves the list alone.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: String,
    pub label: String,
    pub kind: EntityKind,
}

impl PendingDelete {
    pub fn of<T: Entity>(record: &T) -> Self {
        Self {
            id: record.id().to_string(),
            label: record.label().to_string(),
            kind: T::KIND,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this {} \"{}\"?",
            self.kind,
            preview(&self.label)
        )
    }

    pub fn success_message(&self) -> String {
        format!("Deleted {} \"{}\"", self.kind, preview(&self.label))
    }

    pub fn failure_message(&self, reason: &str) -> String {
        format!("Failed to delete {} \"{}\": {}", self.kind, preview(&self.label), reason)
    }
}

/// The delete flow of one screen: at most one question open and one
/// request in flight. Only [`DeleteConfirm::confirm`] hands out a target to
/// send.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteConfirm {
    pending: Option<PendingDelete>,
    deleting: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    Request(PendingDelete),
    Confirm,
    Decline,
    Finish,
}

impl DeleteConfirm {
    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    pub fn deleting(&self) -> Option<&str> {
        self.deleting.as_deref()
    }

    /// Ignored while another delete is in flight
    pub fn request(&mut self, target: PendingDelete) {
        if self.deleting.is_none() {
            self.pending = Some(target);
        }
    }

    pub fn decline(&mut self) {
        self.pending = None;
    }

    /// The target to send, now marked as deleting
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        let target = self.pending.take()?;
        self.deleting = Some(target.id.clone());
        Some(target)
    }

    pub fn finish(&mut self) {
        self.deleting = None;
    }
}

impl Reducible for DeleteConfirm {
    type Action = ConfirmAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ConfirmAction::Request(target) => next.request(target),
            ConfirmAction::Confirm => {
                next.confirm();
            }
            ConfirmAction::Decline => next.decline(),
            ConfirmAction::Finish => next.finish(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

const PREVIEW_CHARS: usize = 60;

/// Long question texts are cut for prompts
pub(crate) fn preview(label: &str) -> String {
    let mut chars = label.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
