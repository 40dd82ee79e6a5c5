//! Item capability and the built-in item kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can sit in an inventory slot.
///
/// The inventory only ever looks at these two accessors, so any type that
/// can name and describe itself can be stored.
pub trait Item {
    /// Display name, also the sort key inside an inventory
    fn name(&self) -> &str;

    /// Free-form description shown next to the name
    fn description(&self) -> &str;
}

impl<T: Item + ?Sized> Item for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

/// Built-in item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Sword
    Sword,
    /// Shield
    Shield,
    /// Potion
    Potion,
}

impl ItemKind {
    /// All kinds, in menu order
    pub fn all() -> [Self; 3] {
        [Self::Sword, Self::Shield, Self::Potion]
    }

    /// Map a 1-based menu choice to a kind
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Sword),
            2 => Some(Self::Shield),
            3 => Some(Self::Potion),
            _ => None,
        }
    }

    /// 1-based position in the creation menu
    pub fn menu_choice(&self) -> i64 {
        match self {
            Self::Sword => 1,
            Self::Shield => 2,
            Self::Potion => 3,
        }
    }

    /// Name given to items of this kind when none is supplied
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Sword => "Sword",
            Self::Shield => "Shield",
            Self::Potion => "Potion",
        }
    }

    /// Description given to items of this kind when none is supplied
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Sword => "Pointy end goes into the other man.",
            Self::Shield => "A gigantic shield for a gigantic wuss.",
            Self::Potion => {
                "Could be magical. Could be bleach. The only way to find out is to drink it."
            }
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(choice) = s.parse::<i64>() {
            return Self::from_menu_choice(choice)
                .ok_or_else(|| format!("Unknown item kind: {}", s));
        }
        match s.to_lowercase().as_str() {
            "sword" => Ok(Self::Sword),
            "shield" => Ok(Self::Shield),
            "potion" => Ok(Self::Potion),
            _ => Err(format!("Unknown item kind: {}", s)),
        }
    }
}

/// A named item of one of the built-in kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameItem {
    /// Kind the item was created as
    pub kind: ItemKind,
    name: String,
    description: String,
}

impl GameItem {
    /// Create an item with explicit text
    pub fn new(kind: ItemKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Create an item with the kind's default name and description
    pub fn with_defaults(kind: ItemKind) -> Self {
        Self::new(kind, kind.default_name(), kind.default_description())
    }

    /// Shorthand for a sword
    pub fn sword(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Sword, name, description)
    }

    /// Shorthand for a shield
    pub fn shield(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Shield, name, description)
    }

    /// Shorthand for a potion
    pub fn potion(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Potion, name, description)
    }
}

impl From<ItemKind> for GameItem {
    fn from(kind: ItemKind) -> Self {
        Self::with_defaults(kind)
    }
}

impl Item for GameItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
