use crate::error::CompileError;
use ahash::AHashMap;
use std::fmt;

/// Dense identifier of a declared item, assigned in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interns item names into `ItemId`s.
///
/// The registry fixes the universe of items a search works over. Every
/// `Inventory` built against it has exactly `len()` slots.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    names: Vec<String>,
    ids: AHashMap<String, ItemId>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of item names, rejecting duplicates.
    pub fn from_items<I, S>(items: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for item in items {
            registry.declare(item.as_ref())?;
        }
        Ok(registry)
    }

    pub fn declare(&mut self, name: &str) -> Result<ItemId, CompileError> {
        if self.ids.contains_key(name) {
            return Err(CompileError::DuplicateItem(name.to_string()));
        }
        let id = ItemId::new(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (ItemId::new(i), name.as_str()))
    }
}
