use super::PageId;
use crate::error::RegistryError;

/// Fixed, ordered set of pages and their containers. Built once at startup;
/// there is no way to add or remove pages afterwards.
pub struct PageRegistry<C> {
    entries: Vec<(PageId, C)>, // declaration order
}

impl<C> PageRegistry<C> {
    /// Builds the registry, rejecting blank ids, duplicates and an empty set.
    pub fn new<I, S>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
    {
        let mut entries: Vec<(PageId, C)> = Vec::new();
        for (id, container) in pairs {
            let id: String = id.into();
            if id.is_empty() {
                return Err(RegistryError::BlankId);
            }
            if entries.iter().any(|(existing, _)| existing.as_str() == id) {
                return Err(RegistryError::DuplicatePage(id));
            }
            entries.push((PageId::new(id), container));
        }
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn has(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn container_for(&self, id: &str) -> Result<&C, RegistryError> {
        self.position(id)
            .map(|idx| &self.entries[idx].1)
            .ok_or_else(|| RegistryError::NotFound(id.to_owned()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(page, _)| page.as_str() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &PageId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &C)> {
        self.entries.iter().map(|(id, c)| (id, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed registry; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Index-based accessors for the router, which only holds positions it got
    // from `position`.
    pub(crate) fn id_at(&self, idx: usize) -> &PageId {
        &self.entries[idx].0
    }

    pub(crate) fn container_at(&self, idx: usize) -> &C {
        &self.entries[idx].1
    }
}
