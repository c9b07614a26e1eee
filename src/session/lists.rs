//! List operations on a [`SessionStore`]
//!
//! Lookups of a missing list are hard failures. Creating a duplicate list,
//! removing an out-of-range index and removing a value that is not present
//! are soft: they only emit a diagnostic.

use super::SessionStore;
use crate::diagnostics::Level;
use crate::error::{SessionError, SessionResult};
use crate::models::{ListEntry, Scalar, ScalarType, SessionList};

impl SessionStore {
    /// Look up a list by name
    pub fn list(&self, name: &str) -> Option<&SessionList> {
        self.data.list(name)
    }

    fn list_required(&self, name: &str) -> SessionResult<&SessionList> {
        self.data
            .list(name)
            .ok_or_else(|| SessionError::list_not_found(name))
    }

    fn entry_required(&self, list: &str, index: usize) -> SessionResult<&ListEntry> {
        self.list_required(list)?
            .entry(index)
            .ok_or_else(|| SessionError::IndexNotAssigned {
                list: list.to_string(),
                index,
            })
    }

    /// Create an empty list
    ///
    /// A list with the same name already existing is a soft failure.
    pub fn create_list(&mut self, name: &str) -> SessionResult<()> {
        self.check_name("List", name)?;
        if self.data.has_list(name) {
            self.emit(
                Level::Warning,
                format!("List named {} already exists, aborting", name),
            );
            return Ok(());
        }

        self.apply(|data| data.add_list(name))?;
        self.emit(Level::Info, format!("Created list {}", name));
        Ok(())
    }

    /// Remove a list and all of its entries
    pub fn remove_list(&mut self, name: &str) -> SessionResult<()> {
        self.list_required(name)?;
        self.apply(|data| data.remove_list(name))?;
        self.emit(Level::Info, format!("Successfully removed list named {}", name));
        Ok(())
    }

    /// Append a value to a list
    pub fn add(&mut self, list: &str, value: impl Into<Scalar>) -> SessionResult<()> {
        let value = value.into();
        self.check_value(&value)?;
        self.list_required(list)?;
        self.apply(|data| data.list_mut(list).map(|target| target.push(&value)))?;
        self.emit(Level::Info, format!("Successfully added {} to {}", value, list));
        Ok(())
    }

    /// Typed value at `index`
    pub fn get_at(&self, list: &str, index: usize) -> SessionResult<Scalar> {
        self.entry_required(list, index)?.value()
    }

    /// String at `index`; the entry must be tagged as a string
    pub fn get_string_at(&self, list: &str, index: usize) -> SessionResult<String> {
        let entry = self.entry_required(list, index)?;
        if entry.kind != ScalarType::String {
            return Err(mismatch(list, index, ScalarType::String, entry.kind));
        }
        Ok(entry.content.clone())
    }

    /// Integer at `index`
    ///
    /// The stored text is converted rather than the tag checked, so any
    /// entry whose text is a valid integer can be read this way.
    pub fn get_int_at(&self, list: &str, index: usize) -> SessionResult<i32> {
        let entry = self.entry_required(list, index)?;
        entry
            .content
            .parse()
            .map_err(|_| mismatch(list, index, ScalarType::Int, entry.kind))
    }

    /// Float at `index`, converted from the stored text
    pub fn get_float_at(&self, list: &str, index: usize) -> SessionResult<f32> {
        let entry = self.entry_required(list, index)?;
        entry
            .content
            .parse()
            .map_err(|_| mismatch(list, index, ScalarType::Float, entry.kind))
    }

    /// Type tag of the entry at `index`
    pub fn type_at(&self, list: &str, index: usize) -> SessionResult<ScalarType> {
        Ok(self.entry_required(list, index)?.kind)
    }

    /// Number of entries in a list
    pub fn list_len(&self, list: &str) -> SessionResult<usize> {
        Ok(self.list_required(list)?.len())
    }

    /// Remove the entry at `index`, renumbering the rest
    ///
    /// An index outside `0..len` is a soft failure: an error diagnostic is
    /// emitted and nothing changes.
    pub fn remove_at(&mut self, list: &str, index: usize) -> SessionResult<()> {
        let len = self.list_required(list)?.len();
        if index >= len {
            self.emit(
                Level::Error,
                format!("Index {} is out of range for the list {}", index, list),
            );
            return Ok(());
        }

        self.apply(|data| data.list_mut(list).and_then(|target| target.remove_at(index)))?;
        self.emit(
            Level::Info,
            format!("Successfully removed data at index {} in list {}", index, list),
        );
        Ok(())
    }

    /// Remove entries equal to `value`
    ///
    /// Only the first match is removed unless `remove_all` is set. Floats
    /// must match exactly. Returns the number of entries removed; finding
    /// none is a soft failure.
    pub fn remove_value(
        &mut self,
        list: &str,
        value: impl Into<Scalar>,
        remove_all: bool,
    ) -> SessionResult<usize> {
        let value = value.into();
        self.list_required(list)?;
        let removed = self.apply(|data| {
            data.list_mut(list)
                .map_or(0, |target| target.remove_matching(&value, remove_all))
        })?;

        if removed > 0 {
            self.emit(
                Level::Info,
                format!(
                    "Successfully removed {} occurrences of '{}' from list {}",
                    removed, value, list
                ),
            );
        } else {
            self.emit(
                Level::Warning,
                format!("Content '{}' was not found in list {}", value, list),
            );
        }
        Ok(removed)
    }

    /// Position of the first entry equal to `value`
    ///
    /// Floats compare approximately here. `None` when absent.
    pub fn index_of(&self, list: &str, value: impl Into<Scalar>) -> SessionResult<Option<usize>> {
        let value = value.into();
        Ok(self.list_required(list)?.position_of(&value))
    }
}

fn mismatch(list: &str, index: usize, expected: ScalarType, found: ScalarType) -> SessionError {
    SessionError::TypeMismatch {
        name: format!("{}[{}]", list, index),
        expected: expected.name(),
        found: found.name(),
    }
}
