//! Sewing (세공) option list: one to three free-text entries.

use crate::error::DomainError;

/// Ordered option texts with `MIN_LEN <= len <= MAX_LEN` held at every
/// mutation. Starts as a single empty entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SewingOptions {
    entries: Vec<String>,
}

impl SewingOptions {
    pub const MIN_LEN: usize = 1;
    pub const MAX_LEN: usize = 3;

    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }

    /// Build from existing entries; fails unless `1..=3` entries are given.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.len() > Self::MAX_LEN {
            return Err(DomainError::container_full(entries.len(), Self::MAX_LEN));
        }
        if entries.len() < Self::MIN_LEN {
            return Err(DomainError::constraint(
                "at least one sewing option is required",
            ));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < Self::MAX_LEN
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > Self::MIN_LEN
    }

    /// Append an empty entry.
    pub fn push(&mut self) -> Result<(), DomainError> {
        if !self.can_add() {
            return Err(DomainError::container_full(self.entries.len(), Self::MAX_LEN));
        }
        self.entries.push(String::new());
        Ok(())
    }

    /// Remove the entry at `index`; later entries shift forward.
    pub fn remove(&mut self, index: usize) -> Result<String, DomainError> {
        if index >= self.entries.len() {
            return Err(DomainError::validation(format!(
                "sewing option index {} out of range (len {})",
                index,
                self.entries.len()
            )));
        }
        if !self.can_remove() {
            return Err(DomainError::constraint(
                "at least one sewing option is required",
            ));
        }
        Ok(self.entries.remove(index))
    }

    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<(), DomainError> {
        let len = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or_else(|| {
            DomainError::validation(format!(
                "sewing option index {} out of range (len {})",
                index, len
            ))
        })?;
        *entry = text.into();
        Ok(())
    }
}

impl Default for SewingOptions {
    fn default() -> Self {
        Self::new()
    }
}
