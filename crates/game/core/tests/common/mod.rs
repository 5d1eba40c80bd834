#![allow(dead_code)]

use crawler_core::{
    ActorState, ConditionKind, ConsumableEffect, ElementKind, EntityId, Env, EquipSlotKind,
    GameConfig, GameState, InventoryState, ItemDefinition, ItemHandle, ItemOracle, MapDimensions,
    MapOracle, Material, Position, RngOracle, SpellDefinition, SpellEffect, SpellHandle,
    SpellOracle, SpellTargeting,
};

pub const SWORD: ItemHandle = ItemHandle(1);
pub const LEATHER_ARMOR: ItemHandle = ItemHandle(2);
pub const RING: ItemHandle = ItemHandle(3);
pub const HEALTH_POTION: ItemHandle = ItemHandle(4);
pub const CONFUSION_SCROLL: ItemHandle = ItemHandle(5);
pub const SERRATED_DAGGER: ItemHandle = ItemHandle(6);
pub const FIRE_WAND: ItemHandle = ItemHandle(7);

pub const LIGHTNING: SpellHandle = SpellHandle(1);
pub const FIREBALL: SpellHandle = SpellHandle(2);
pub const CONFUSE: SpellHandle = SpellHandle(3);
pub const MEND: SpellHandle = SpellHandle(4);

/// Open rectangular room with optional walls and hidden cells.
pub struct Room {
    pub width: u32,
    pub height: u32,
    pub walls: Vec<Position>,
    pub hidden: Vec<Position>,
}

impl Room {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            hidden: Vec::new(),
        }
    }
}

impl MapOracle for Room {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    fn is_walkable(&self, position: Position) -> bool {
        !self.walls.contains(&position)
    }

    fn is_visible(&self, position: Position) -> bool {
        !self.hidden.contains(&position)
    }
}

pub struct Catalog {
    pub items: Vec<ItemDefinition>,
    pub spells: Vec<SpellDefinition>,
}

impl Catalog {
    pub fn standard() -> Self {
        let items = vec![
            ItemDefinition::new(SWORD, "sword")
                .equippable(EquipSlotKind::Melee, 4, 0)
                .made_of(Material::Metal),
            ItemDefinition::new(LEATHER_ARMOR, "leather armor")
                .equippable(EquipSlotKind::Armor, 0, 2)
                .made_of(Material::Leather),
            ItemDefinition::new(RING, "ring of protection")
                .equippable(EquipSlotKind::Accessory, 0, 1)
                .magical(),
            ItemDefinition::new(HEALTH_POTION, "health potion")
                .made_of(Material::Glass)
                .consumable(ConsumableEffect::Heal(8)),
            ItemDefinition::new(CONFUSION_SCROLL, "confusion scroll")
                .made_of(Material::Paper)
                .consumable(ConsumableEffect::Cast(CONFUSE)),
            ItemDefinition::new(SERRATED_DAGGER, "serrated dagger")
                .equippable(EquipSlotKind::Melee, 1, 0)
                .made_of(Material::Metal)
                .inflicting(ConditionKind::Bleed),
            ItemDefinition::new(FIRE_WAND, "fire wand")
                .equippable(EquipSlotKind::Melee, 0, 0)
                .with_element(ElementKind::Fire)
                .magical(),
        ];
        let spells = vec![
            SpellDefinition {
                handle: LIGHTNING,
                name: "lightning bolt".into(),
                mana_cost: 5,
                amount: 20,
                range: 5,
                radius: 0,
                targeting: SpellTargeting::Nearest,
                effect: SpellEffect::Damage,
            },
            SpellDefinition {
                handle: FIREBALL,
                name: "fireball".into(),
                mana_cost: 8,
                amount: 12,
                range: 0,
                radius: 1,
                targeting: SpellTargeting::Area,
                effect: SpellEffect::Damage,
            },
            SpellDefinition {
                handle: CONFUSE,
                name: "confusion".into(),
                mana_cost: 3,
                amount: 0,
                range: 0,
                radius: 0,
                targeting: SpellTargeting::Single,
                effect: SpellEffect::Status(ConditionKind::Confusion),
            },
            SpellDefinition {
                handle: MEND,
                name: "mend".into(),
                mana_cost: 4,
                amount: 5,
                range: 0,
                radius: 0,
                targeting: SpellTargeting::Caster,
                effect: SpellEffect::Cure,
            },
        ];
        Self { items, spells }
    }
}

impl ItemOracle for Catalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.items.iter().find(|d| d.handle == handle).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.items.clone()
    }
}

impl SpellOracle for Catalog {
    fn spell(&self, handle: SpellHandle) -> Option<SpellDefinition> {
        self.spells.iter().find(|s| s.handle == handle).cloned()
    }
}

/// Returns the same raw value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Oracles for one test.
pub struct World {
    pub map: Room,
    pub catalog: Catalog,
    pub config: GameConfig,
    pub rng: FixedRng,
}

impl World {
    pub fn new() -> Self {
        Self {
            map: Room::new(12, 12),
            catalog: Catalog::standard(),
            config: GameConfig::default(),
            rng: FixedRng(0),
        }
    }

    /// Every d100 roll comes out as `roll`.
    pub fn rolling(mut self, roll: u32) -> Self {
        self.rng = FixedRng(roll - 1);
        self
    }

    pub fn env(&self) -> Env<'_> {
        Env::with_all(&self.map, &self.catalog, &self.catalog, &self.config, &self.rng)
    }
}

pub fn player_at(x: i32, y: i32) -> ActorState {
    ActorState::new(EntityId::PLAYER, "player", Position::new(x, y), 30)
        .with_stats(5, 1)
        .with_inventory(InventoryState::with_capacity(GameConfig::MAX_INVENTORY_SLOTS))
}

pub fn monster(id: u32, name: &str, x: i32, y: i32, hp: u32) -> ActorState {
    ActorState::new(EntityId(id), name, Position::new(x, y), hp)
}

pub fn state_with(actors: impl IntoIterator<Item = ActorState>) -> GameState {
    let mut state = GameState::new(42);
    for actor in actors {
        state.spawn(actor);
    }
    state
}
