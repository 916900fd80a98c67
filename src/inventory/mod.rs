pub mod registry;

pub use registry::{ItemId, ItemRegistry};

use crate::error::CompileError;
use std::fmt;

/// A snapshot of item quantities, one slot per declared item.
///
/// `Inventory` is a plain value: equality, hashing and ordering all derive
/// from the quantity slice, so two inventories compare equal exactly when
/// every quantity matches. The order is lexicographic over declaration
/// order and is what the frontier uses to break cost ties.
///
/// Quantities are unsigned. A transition that would take an item below zero
/// is reported as an error by `CompiledRecipe::apply` and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Inventory {
    quantities: Box<[u32]>,
}

impl Inventory {
    /// An inventory with `len` items, all at zero.
    pub fn empty(len: usize) -> Self {
        Self {
            quantities: vec![0; len].into_boxed_slice(),
        }
    }

    pub fn from_quantities(quantities: Vec<u32>) -> Self {
        Self {
            quantities: quantities.into_boxed_slice(),
        }
    }

    /// Builds an inventory over `registry` from named quantities.
    /// Items not listed default to zero; `context` names the inventory in errors.
    pub fn from_named<'a, I>(
        registry: &ItemRegistry,
        entries: I,
        context: &str,
    ) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut inventory = Self::empty(registry.len());
        for (name, quantity) in entries {
            let id = registry
                .id(name)
                .ok_or_else(|| CompileError::UndeclaredInventoryItem {
                    context: context.to_string(),
                    item: name.to_string(),
                })?;
            inventory.set(id, quantity);
        }
        Ok(inventory)
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Quantity of `id`, or zero for an id outside this inventory.
    pub fn get(&self, id: ItemId) -> u32 {
        self.quantities.get(id.index()).copied().unwrap_or(0)
    }

    /// Sets the quantity of `id`. Only call this on an inventory you own and
    /// have not yet handed to a search.
    ///
    /// Returns `false` and leaves the inventory unchanged when `id` is outside it.
    pub fn set(&mut self, id: ItemId, quantity: u32) -> bool {
        match self.quantities.get_mut(id.index()) {
            Some(slot) => {
                *slot = quantity;
                true
            }
            None => false,
        }
    }

    /// Whether `id` has a slot in this inventory.
    pub fn contains(&self, id: ItemId) -> bool {
        id.index() < self.quantities.len()
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.quantities
            .iter()
            .enumerate()
            .map(|(i, q)| (ItemId::new(i), *q))
    }

    /// Total number of items held.
    pub fn total(&self) -> u64 {
        self.quantities.iter().map(|q| u64::from(*q)).sum()
    }

    /// Renders the inventory with item names, omitting zero quantities.
    pub fn display<'a>(&'a self, registry: &'a ItemRegistry) -> DisplayInventory<'a> {
        DisplayInventory {
            inventory: self,
            registry,
        }
    }
}

/// A helper for displaying an `Inventory` with item names resolved.
pub struct DisplayInventory<'a> {
    inventory: &'a Inventory,
    registry: &'a ItemRegistry,
}

impl fmt::Display for DisplayInventory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (id, quantity) in self.inventory.iter().filter(|(_, q)| *q > 0) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            match self.registry.name(id) {
                Some(name) => write!(f, "{}: {}", name, quantity)?,
                None => write!(f, "{}: {}", id, quantity)?,
            }
        }
        write!(f, "}}")
    }
}
