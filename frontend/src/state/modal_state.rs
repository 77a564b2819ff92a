//! # Modal State Module
//!
//! Every create/edit dialog is the same single-field form:
//! `Closed → Open → Submitting → Closed`, or back to `Open` with an error
//! when the injected submit fails. The dialog never talks to the backend.

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormModal {
    pub phase: ModalPhase,
    pub value: String,
    /// Opened with an existing value (edit) rather than blank (create)
    pub editing: bool,
    pub error: Option<String>,
    field_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Open(Option<String>),
    Edit(String),
    BeginSubmit,
    Finish(Result<(), String>),
    Cancel,
    /// Validation failed before anything was sent
    Reject(String),
}

impl FormModal {
    pub fn new(field_label: &'static str) -> Self {
        Self {
            phase: ModalPhase::Closed,
            value: String::new(),
            editing: false,
            error: None,
            field_label,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    /// Blank for create, pre-filled for edit
    pub fn open(&mut self, initial: Option<&str>) {
        self.phase = ModalPhase::Open;
        self.value = initial.unwrap_or_default().to_string();
        self.editing = initial.is_some();
        self.error = None;
    }

    pub fn edit(&mut self, value: String) {
        if self.phase == ModalPhase::Open {
            self.value = value;
        }
    }

    /// Required-field check. On success moves to `Submitting` and returns the
    /// text exactly as typed.
    pub fn begin_submit(&mut self) -> Result<String, String> {
        if self.phase != ModalPhase::Open {
            return Err(format!("{} cannot be submitted right now", self.field_label));
        }
        if self.value.trim().is_empty() {
            let message = format!("{} is required", self.field_label);
            self.error = Some(message.clone());
            return Err(message);
        }
        self.phase = ModalPhase::Submitting;
        self.error = None;
        Ok(self.value.clone())
    }

    /// Success closes; failure reopens with the text kept
    pub fn finish(&mut self, result: Result<(), String>) {
        if self.phase != ModalPhase::Submitting {
            return;
        }
        match result {
            Ok(()) => self.close(),
            Err(message) => {
                self.phase = ModalPhase::Open;
                self.error = Some(message);
            }
        }
    }

    /// Ignored while a submit is in flight
    pub fn cancel(&mut self) {
        if self.phase != ModalPhase::Submitting {
            self.close();
        }
    }

    fn close(&mut self) {
        self.phase = ModalPhase::Closed;
        self.value.clear();
        self.editing = false;
        self.error = None;
    }
}

impl Reducible for FormModal {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Open(initial) => next.open(initial.as_deref()),
            FormAction::Edit(value) => next.edit(value),
            FormAction::BeginSubmit => {
                let _ = next.begin_submit();
            }
            FormAction::Finish(result) => next.finish(result),
            FormAction::Cancel => next.cancel(),
            FormAction::Reject(message) => next.error = Some(message),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
