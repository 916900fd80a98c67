use crate::error::{CompileError, RecipeField, TransitionError};
use crate::inventory::{Inventory, ItemId, ItemRegistry};
use crate::recipe::RecipeDefinition;
use itertools::Itertools;

/// A recipe with its item names interned, ready to be tested and applied
/// against inventories.
///
/// Each field holds `(item, quantity)` pairs sorted by item id with duplicate
/// entries merged. Compiled recipes are immutable and safe to share between
/// concurrent searches.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRecipe {
    name: String,
    requires: Box<[(ItemId, u32)]>,
    consumes: Box<[(ItemId, u32)]>,
    produces: Box<[(ItemId, u32)]>,
    cost: f64,
}

impl CompiledRecipe {
    /// Builds a recipe from already-interned parts.
    ///
    /// Fails when the cost is not a positive, finite number.
    pub fn new<R, C, P>(
        name: impl Into<String>,
        requires: R,
        consumes: C,
        produces: P,
        cost: f64,
    ) -> Result<Self, CompileError>
    where
        R: IntoIterator<Item = (ItemId, u32)>,
        C: IntoIterator<Item = (ItemId, u32)>,
        P: IntoIterator<Item = (ItemId, u32)>,
    {
        let name = name.into();
        if !(cost.is_finite() && cost > 0.0) {
            return Err(CompileError::InvalidCost { recipe: name, cost });
        }
        Ok(Self {
            name,
            // A repeated requirement keeps the strictest minimum.
            requires: merge(requires, u32::max),
            consumes: merge(consumes, u32::saturating_add),
            produces: merge(produces, u32::saturating_add),
            cost,
        })
    }

    /// Interns a definition against `registry`.
    pub(crate) fn compile(
        definition: &RecipeDefinition,
        registry: &ItemRegistry,
    ) -> Result<Self, CompileError> {
        let resolve = |entries: &[(String, u32)], field: RecipeField| {
            entries
                .iter()
                .map(|(item, quantity)| {
                    registry
                        .id(item)
                        .map(|id| (id, *quantity))
                        .ok_or_else(|| CompileError::UndeclaredItem {
                            recipe: definition.name.clone(),
                            item: item.clone(),
                            field,
                        })
                })
                .collect::<Result<Vec<_>, _>>()
        };

        Self::new(
            definition.name.clone(),
            resolve(&definition.requires, RecipeField::Requires)?,
            resolve(&definition.consumes, RecipeField::Consumes)?,
            resolve(&definition.produces, RecipeField::Produces)?,
            definition.cost,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn requires(&self) -> &[(ItemId, u32)] {
        &self.requires
    }

    pub fn consumes(&self) -> &[(ItemId, u32)] {
        &self.consumes
    }

    pub fn produces(&self) -> &[(ItemId, u32)] {
        &self.produces
    }

    /// One past the highest item id the recipe mentions, or 0 if it mentions none.
    pub fn item_span(&self) -> usize {
        self.requires
            .iter()
            .chain(self.consumes.iter())
            .chain(self.produces.iter())
            .map(|(id, _)| id.index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Whether the recipe can fire in `state`: every required item is present
    /// in at least its minimum quantity and every consumed item is available.
    pub fn is_applicable(&self, state: &Inventory) -> bool {
        self.requires
            .iter()
            .chain(self.consumes.iter())
            .all(|&(id, quantity)| state.get(id) >= quantity)
    }

    /// Returns a copy of `state` with consumed items removed and produced items added.
    ///
    /// Required items are left untouched. Applying a recipe whose predicate
    /// does not hold is a caller bug and yields `TransitionError::NegativeQuantity`.
    /// Producing an item the inventory has no slot for yields
    /// `TransitionError::ItemOutOfRange`.
    pub fn apply(&self, state: &Inventory) -> Result<Inventory, TransitionError> {
        let mut next = state.clone();
        for &(id, amount) in self.consumes.iter() {
            let have = next.get(id);
            let remaining =
                have.checked_sub(amount)
                    .ok_or_else(|| TransitionError::NegativeQuantity {
                        recipe: self.name.clone(),
                        item: id,
                        have,
                        amount,
                    })?;
            next.set(id, remaining);
        }
        for &(id, amount) in self.produces.iter() {
            if !next.contains(id) {
                return Err(TransitionError::ItemOutOfRange {
                    recipe: self.name.clone(),
                    item: id,
                });
            }
            let total = next.get(id).checked_add(amount).ok_or_else(|| {
                TransitionError::QuantityOverflow {
                    recipe: self.name.clone(),
                    item: id,
                }
            })?;
            next.set(id, total);
        }
        Ok(next)
    }
}

fn merge<I>(entries: I, combine: fn(u32, u32) -> u32) -> Box<[(ItemId, u32)]>
where
    I: IntoIterator<Item = (ItemId, u32)>,
{
    entries
        .into_iter()
        .sorted_by_key(|(id, _)| *id)
        .coalesce(|a, b| {
            if a.0 == b.0 {
                Ok((a.0, combine(a.1, b.1)))
            } else {
                Err((a, b))
            }
        })
        .collect()
}
