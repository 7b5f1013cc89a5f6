use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::model::Entity;

/// A settled or starting command, as the slice sees it.
///
/// `Pending` only toggles the loading flag; the collection changes on
/// fulfilled transitions alone, and `Rejected` leaves it untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    /// A command entered flight: mark loading, clear the prior error.
    Pending,
    /// `list` fulfilled: replace the whole collection.
    Loaded(Vec<T>),
    /// `create` fulfilled: append.
    Created(T),
    /// `update` fulfilled: replace by id. Unknown ids are ignored.
    Updated(T),
    /// `delete` fulfilled: remove by id.
    Removed(String),
    /// The command failed; the reason becomes the slice error.
    Rejected(ApiError),
    /// Drop error/success markers (page unmount).
    Reset,
}

/// Normalized state for one resource type: the collection in insertion
/// order plus the async lifecycle flags the UI reads.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    items: Vec<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Pulses true after a fulfilled write so forms can close themselves.
    pub success: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            success: false,
            last_updated: None,
        }
    }
}

impl<T: Entity> ResourceState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pure reducer over one transition. No I/O happens here.
    pub fn apply(&mut self, transition: Transition<T>) {
        match transition {
            Transition::Pending => {
                self.loading = true;
                self.error = None;
                self.success = false;
            }
            Transition::Loaded(items) => {
                self.loading = false;
                self.error = None;
                self.items = items;
                self.touch();
            }
            Transition::Created(item) => {
                self.loading = false;
                self.error = None;
                self.success = true;
                self.items.push(item);
                self.touch();
            }
            Transition::Updated(item) => {
                self.loading = false;
                self.error = None;
                self.success = true;
                let id = item.entity_id().to_string();
                if let Some(slot) = self.items.iter_mut().find(|it| it.entity_id() == id) {
                    *slot = item;
                }
                self.touch();
            }
            Transition::Removed(id) => {
                self.loading = false;
                self.error = None;
                self.success = true;
                self.items.retain(|item| item.entity_id() != id);
                self.touch();
            }
            Transition::Rejected(err) => {
                self.loading = false;
                self.success = false;
                self.error = Some(err);
            }
            Transition::Reset => {
                self.error = None;
                self.success = false;
            }
        }
    }

    fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }
}
