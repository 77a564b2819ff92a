//! # List State Module
//!
//! Local mirror of one server collection for the lifetime of a screen.
//!
//! The list only changes in response to server acknowledgements: a load
//! result replaces it wholesale, a created record is appended, an updated
//! record replaces its predecessor by id, and a deleted id is filtered out.
//! Order is the server's response order and is never re-sorted.

use shared::Entity;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Vec<T>),
    /// Message shown in place of the list
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
    Append(T),
    Replace { id: String, record: T },
    Remove(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T: Entity> ListState<T> {
    /// Next state, or `None` when the action leaves this one untouched
    pub fn apply(&self, action: ListAction<T>) -> Option<Self> {
        match action {
            ListAction::Loading => Some(ListState::Loading),
            ListAction::Loaded(records) => Some(ListState::Ready(records)),
            ListAction::Failed(message) => Some(ListState::Failed(message)),
            ListAction::Append(record) => {
                let items = self.ready()?;
                let mut next = items.to_vec();
                match next.iter().position(|item| item.id() == record.id()) {
                    // a repeated acknowledgement must not duplicate the row
                    Some(index) => next[index] = record,
                    None => next.push(record),
                }
                Some(ListState::Ready(next))
            }
            ListAction::Replace { id, record } => {
                let items = self.ready()?;
                let index = items.iter().position(|item| item.id() == id)?;
                let mut next = items.to_vec();
                next[index] = record;
                Some(ListState::Ready(next))
            }
            ListAction::Remove(id) => {
                let items = self.ready()?;
                if !items.iter().any(|item| item.id() == id) {
                    return None;
                }
                let next = items.iter().filter(|item| item.id() != id).cloned().collect();
                Some(ListState::Ready(next))
            }
        }
    }

    fn ready(&self) -> Option<&[T]> {
        match self {
            ListState::Ready(items) => Some(items),
            _ => None,
        }
    }

    /// Records on display; empty while loading or failed
    pub fn items(&self) -> &[T] {
        self.ready().unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items().iter().find(|item| item.id() == id)
    }
}

impl<T: Entity + 'static> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
