//! Actor catalog loader.
//!
//! Loads player and monster templates from RON and turns them into
//! [`ActorState`] values at spawn time.

use std::path::Path;

use crawler_core::{
    ActorState, AffinityProfile, AiBehavior, ConditionKind, ConditionRegistry, ElementKind,
    EntityId, Faction, GameConfig, GameState, InventoryState, ItemHandle, Position,
    SpecialAttackKind, SpecialAttackProfile, SpellHandle,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Elemental affinities of a template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffinitySpec {
    pub resistant: Vec<ElementKind>,
    pub immune: Vec<ElementKind>,
    pub vulnerable: Vec<ElementKind>,
    /// At most one element.
    pub attacks_with: Vec<ElementKind>,
}

impl AffinitySpec {
    fn build(&self) -> AffinityProfile {
        let mut profile = AffinityProfile::new();
        for element in &self.resistant {
            profile = profile.resistant_to(*element);
        }
        for element in &self.immune {
            profile = profile.immune_to(*element);
        }
        for element in &self.vulnerable {
            profile = profile.vulnerable_to(*element);
        }
        for element in &self.attacks_with {
            profile = profile.attacking_with(*element);
        }
        profile
    }
}

/// One enabled special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SpecialSpec {
    pub kind: SpecialAttackKind,
    #[serde(default)]
    pub amount: u32,
    #[serde(default)]
    pub damage: u32,
}

/// Static description of an actor kind.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActorTemplate {
    pub name: String,
    pub max_hp: u32,
    #[serde(default)]
    pub max_mana: u32,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub defense: u32,
    /// Experience the player earns for the kill.
    #[serde(default)]
    pub xp_given: u32,
    /// Defaults to hero for the player and monster otherwise.
    #[serde(default)]
    pub faction: Option<Faction>,
    #[serde(default)]
    pub immune_to: Vec<ConditionKind>,
    /// Conditions applied by this actor's unarmed hits.
    #[serde(default)]
    pub inflicts: Vec<ConditionKind>,
    #[serde(default)]
    pub affinity: AffinitySpec,
    #[serde(default)]
    pub specials: Vec<SpecialSpec>,
    #[serde(default)]
    pub resists_specials: Vec<SpecialAttackKind>,
    #[serde(default)]
    pub inventory_slots: usize,
    #[serde(default)]
    pub starting_items: Vec<ItemHandle>,
    #[serde(default)]
    pub spells: Vec<SpellHandle>,
    #[serde(default)]
    pub ai: Option<AiBehavior>,
}

impl ActorTemplate {
    /// Checks invariants the rules rely on.
    pub fn validate(&self) -> LoadResult<()> {
        if self.max_hp == 0 {
            anyhow::bail!("max_hp must be positive");
        }
        if self.affinity.attacks_with.len() > 1 {
            anyhow::bail!("an actor attacks with at most one element");
        }
        for element in ElementKind::ALL {
            let lists = [
                &self.affinity.resistant,
                &self.affinity.immune,
                &self.affinity.vulnerable,
            ];
            if lists.iter().filter(|list| list.contains(&element)).count() > 1 {
                anyhow::bail!("conflicting affinities for {element}");
            }
        }
        for (index, special) in self.specials.iter().enumerate() {
            if self.specials[..index].iter().any(|s| s.kind == special.kind) {
                anyhow::bail!("special attack {} listed twice", special.kind);
            }
        }
        if self.inventory_slots > GameConfig::MAX_INVENTORY_SLOTS {
            anyhow::bail!(
                "inventory_slots {} exceeds {}",
                self.inventory_slots,
                GameConfig::MAX_INVENTORY_SLOTS
            );
        }
        if self.starting_items.len() > self.inventory_slots {
            anyhow::bail!(
                "{} starting items do not fit in {} slots",
                self.starting_items.len(),
                self.inventory_slots
            );
        }
        if self.spells.len() > GameConfig::MAX_SPELLS {
            anyhow::bail!(
                "{} spells exceed the spellbook size {}",
                self.spells.len(),
                GameConfig::MAX_SPELLS
            );
        }
        Ok(())
    }

    /// Builds a living actor without starting items.
    pub fn spawn(&self, id: EntityId, position: Position) -> ActorState {
        let mut conditions = ConditionRegistry::new();
        for kind in &self.immune_to {
            conditions = conditions.with_immunity(*kind);
        }
        for kind in &self.inflicts {
            conditions = conditions.with_inflicts(*kind);
        }

        let mut specials = SpecialAttackProfile::new();
        for spec in &self.specials {
            specials = specials.with_ability(spec.kind, spec.amount, spec.damage);
        }
        for kind in &self.resists_specials {
            specials = specials.with_immunity(*kind);
        }

        let mut actor = ActorState::new(id, self.name.clone(), position, self.max_hp)
            .with_stats(self.power, self.defense)
            .with_mana(self.max_mana)
            .with_xp_given(self.xp_given)
            .with_conditions(conditions)
            .with_affinity(self.affinity.build())
            .with_specials(specials)
            .with_inventory(InventoryState::with_capacity(self.inventory_slots))
            .with_spells(self.spells.iter().copied());
        if let Some(faction) = self.faction {
            actor = actor.with_faction(faction);
        }
        if let Some(ai) = self.ai {
            actor = actor.with_ai(ai);
        }
        actor
    }

    /// Spawns the actor into `state`, allocating its starting items.
    pub fn spawn_into(&self, state: &mut GameState, id: EntityId, position: Position) {
        let mut actor = self.spawn(id, position);
        for handle in &self.starting_items {
            let item = state.create_item(*handle);
            if actor.inventory.push(item).is_err() {
                tracing::warn!(
                    target: "content::actors",
                    actor = %self.name,
                    "starting item does not fit"
                );
            }
        }
        state.spawn(actor);
    }
}

/// Templates keyed by catalog id, in file order.
#[derive(Clone, Debug, Default)]
pub struct ActorCatalog {
    templates: Vec<(String, ActorTemplate)>,
}

impl ActorCatalog {
    pub fn get(&self, id: &str) -> Option<&ActorTemplate> {
        self.templates
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, template)| template)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActorTemplate)> + '_ {
        self.templates.iter().map(|(key, t)| (key.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Spawns the template `template_id` into `state`.
    pub fn spawn_into(
        &self,
        state: &mut GameState,
        template_id: &str,
        id: EntityId,
        position: Position,
    ) -> LoadResult<()> {
        let template = self
            .get(template_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown actor template '{}'", template_id))?;
        template.spawn_into(state, id, position);
        Ok(())
    }
}

/// Loader for actor catalogs from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor catalog from a RON file.
    ///
    /// RON format: `[("orc", ActorTemplate), ...]`
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let raw: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut catalog = ActorCatalog::default();
        for (actor_id, template) in raw {
            template
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid actor '{}': {}", actor_id, e))?;
            if catalog.get(&actor_id).is_some() {
                anyhow::bail!("Duplicate actor id '{}'", actor_id);
            }
            catalog.templates.push((actor_id, template));
        }

        tracing::debug!(target: "content::actors", count = catalog.len(), "loaded actor catalog");
        Ok(catalog)
    }
}
