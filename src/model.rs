//! Cosmetic identity types supplied by the caller and the per-render pose
//! state derived from them.

use std::collections::BTreeMap;

/// Character gender, used only to pick default clothing when the Coat or
/// Pants slot is empty.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Gender {
    /// Male defaults.
    Male,
    /// Female defaults.
    Female,
}

/// Closed set of equipment slots a character can populate.
///
/// One item ID per slot, never zero-or-many; slots absent from the equipment
/// map are unequipped.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum SlotName {
    /// Hat / helmet.
    Cap,
    /// Face accessory.
    Mask,
    /// Eye accessory.
    Eyes,
    /// Ear accessory.
    Ears,
    /// Top (or overall) clothing.
    Coat,
    /// Bottom clothing.
    Pants,
    /// Footwear.
    Shoes,
    /// Gloves.
    Glove,
    /// Back cape.
    Cape,
    /// Off-hand shield. Reserved ID sub-ranges hold second weapons instead.
    Shield,
    /// Main weapon. Drives stand-pose selection.
    Weapon,
}

impl SlotName {
    /// All slots in fingerprint order.
    pub const ALL: [SlotName; 11] = [
        SlotName::Cap,
        SlotName::Mask,
        SlotName::Eyes,
        SlotName::Ears,
        SlotName::Coat,
        SlotName::Pants,
        SlotName::Shoes,
        SlotName::Glove,
        SlotName::Cape,
        SlotName::Shield,
        SlotName::Weapon,
    ];
}

/// Immutable cosmetic snapshot for one render request.
///
/// Constructed by the caller per request and discarded afterwards; the
/// compositor's output is a pure function of this value given a warm cache.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterCosmetics {
    /// Skin tone index, added to the fixed skin item bases.
    pub skin_tone: u8,
    /// Gender, used for default Coat/Pants fallback only.
    pub gender: Gender,
    /// Hair item ID.
    pub hair_id: u32,
    /// Face item ID.
    pub face_id: u32,
    /// Equipped item ID per slot. Absent slot means unequipped.
    pub equipment: BTreeMap<SlotName, u32>,
}

impl CharacterCosmetics {
    /// Item ID equipped in `slot`, if any.
    pub fn equipped(&self, slot: SlotName) -> Option<u32> {
        self.equipment.get(&slot).copied()
    }
}

/// Metadata-contributing piece of a character.
///
/// Superset of [`SlotName`]: hair and face resolve per-item metadata exactly
/// like equipment but are cosmetic attributes, not slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// An equipment slot.
    Slot(SlotName),
    /// Hair attribute.
    Hair,
    /// Face attribute.
    Face,
}

/// Full-body stand pose variant.
///
/// Chosen exactly once per render from the weapon's pose declaration and held
/// constant across every layer draw of that render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stand {
    /// One-handed stance.
    One,
    /// Two-handed stance. The fallback when no weapon declares a pose.
    Two,
}

impl Stand {
    /// Numeric index used in metadata frames and image file names.
    pub fn index(self) -> u8 {
        match self {
            Stand::One => 1,
            Stand::Two => 2,
        }
    }

    /// Parse a declared pose value; only 1 and 2 are meaningful.
    pub fn from_index(v: u64) -> Option<Stand> {
        match v {
            1 => Some(Stand::One),
            2 => Some(Stand::Two),
            _ => None,
        }
    }
}

/// Per-render pose state consulted by every layer lookup.
#[derive(Clone, Debug)]
pub struct PoseState {
    /// Selected stand pose.
    pub stand: Stand,
    /// Accumulated visual-region tag string, seeded from the Cap's `vslot`.
    ///
    /// Hair and accessory layers consult it to suppress themselves when the
    /// cap already occupies their region.
    pub v_slot: String,
}

impl PoseState {
    /// State for a bare character: two-handed stance, nothing occupied.
    pub fn new(stand: Stand) -> Self {
        Self {
            stand,
            v_slot: String::new(),
        }
    }
}
