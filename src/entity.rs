//! Entity handles, the entity class hierarchy and read views of entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Opaque reference to a selectable object owned by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityHandle(pub u64);

impl EntityHandle {
    /// Returned by entity prompts that got no answer.
    pub const NULL: EntityHandle = EntityHandle(0);

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:X}", self.0)
    }
}

/// Class of a drawing entity. `Entity` and `Curve` are abstract bases used
/// as selection filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityClass {
    Entity,
    Curve,
    Line,
    Arc,
    Circle,
    Polyline,
    Text,
    MText,
    BlockReference,
    Hatch,
}

impl EntityClass {
    pub fn parent(&self) -> Option<EntityClass> {
        match self {
            EntityClass::Entity => None,
            EntityClass::Line
            | EntityClass::Arc
            | EntityClass::Circle
            | EntityClass::Polyline => Some(EntityClass::Curve),
            EntityClass::Curve
            | EntityClass::Text
            | EntityClass::MText
            | EntityClass::BlockReference
            | EntityClass::Hatch => Some(EntityClass::Entity),
        }
    }

    /// True when `self` is `other` or derives from it.
    pub fn is_kind_of(&self, other: EntityClass) -> bool {
        let mut current = Some(*self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Selection filter test: exact class equality, or kind-of when not exact.
    pub fn matches(&self, allowed: EntityClass, exact_match: bool) -> bool {
        if exact_match {
            *self == allowed
        } else {
            self.is_kind_of(allowed)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityClass::Entity => "Entity",
            EntityClass::Curve => "Curve",
            EntityClass::Line => "Line",
            EntityClass::Arc => "Arc",
            EntityClass::Circle => "Circle",
            EntityClass::Polyline => "Polyline",
            EntityClass::Text => "DBText",
            EntityClass::MText => "MText",
            EntityClass::BlockReference => "BlockReference",
            EntityClass::Hatch => "Hatch",
        }
    }
}

impl Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// View of an entity resolved through the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    pub handle: EntityHandle,
    pub class: EntityClass,
    pub layer: String,
    pub color: u16,
    pub highlighted: bool,
}
