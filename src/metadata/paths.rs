//! Asset-path building rules for the hierarchical game-asset namespace:
//! `{Category}/{PaddedItemId}.img/{tag}.stand{n}.{layer}.png` for images and
//! `{Category}/{PaddedItemId}.img/coord.json` for metadata documents.

use crate::model::{Gender, PieceKind, SlotName, Stand};

/// Metadata document file name within an item folder.
pub const COORD_FILE: &str = "coord.json";

/// Weapons at or above this ID are non-rendering or special-cased and never
/// contribute a pose declaration.
pub const POSE_ITEM_CUTOFF: u32 = 1_700_000;

/// Shield-slot item IDs in this range represent a second weapon rather than
/// a true shield; weapon-layer resolution redirects to them.
pub const SECOND_WEAPON_IDS: std::ops::Range<u32> = 1_340_000..1_350_000;

/// Skin item base for body, arm, and hand parts; the skin tone is added.
pub const SKIN_BODY_BASE: u32 = 2_000;

/// Skin item base for the head part; the skin tone is added.
pub const SKIN_HEAD_BASE: u32 = 12_000;

/// Default coat rendered when the Coat slot is empty.
pub fn default_coat(gender: Gender) -> u32 {
    match gender {
        Gender::Male => 1_040_036,
        Gender::Female => 1_041_046,
    }
}

/// Default pants rendered when the Pants slot is empty.
pub fn default_pants(gender: Gender) -> u32 {
    match gender {
        Gender::Male => 1_060_026,
        Gender::Female => 1_061_039,
    }
}

fn slot_category(slot: SlotName) -> &'static str {
    match slot {
        SlotName::Cap => "Cap",
        SlotName::Mask | SlotName::Eyes | SlotName::Ears => "Accessory",
        SlotName::Coat => "Coat",
        SlotName::Pants => "Pants",
        SlotName::Shoes => "Shoes",
        SlotName::Glove => "Glove",
        SlotName::Cape => "Cape",
        SlotName::Shield => "Shield",
        SlotName::Weapon => "Weapon",
    }
}

/// Item folder for a piece, applying the slot-specific ID formatting rules:
/// hair and face pad to five digits behind the `000` category prefix, weapons
/// pad to eight digits with no prefix, and everything else takes a single
/// `0` prefix with seven-digit padding.
pub fn piece_folder(piece: PieceKind, item_id: u32) -> String {
    match piece {
        PieceKind::Hair => format!("Hair/000{item_id:05}.img"),
        PieceKind::Face => format!("Face/000{item_id:05}.img"),
        PieceKind::Slot(SlotName::Weapon) => format!("Weapon/{item_id:08}.img"),
        PieceKind::Slot(slot) => format!("{}/0{item_id:07}.img", slot_category(slot)),
    }
}

/// Skin folder for body, arm, and hand parts.
pub fn skin_body_folder(skin_tone: u8) -> String {
    format!("Skin/{:08}.img", SKIN_BODY_BASE + u32::from(skin_tone))
}

/// Skin folder for the head part.
pub fn skin_head_folder(skin_tone: u8) -> String {
    format!("Skin/{:08}.img", SKIN_HEAD_BASE + u32::from(skin_tone))
}

/// Image path for a sub-layer at a given stand.
pub fn layer_image_path(folder: &str, tag: &str, stand: Stand, layer: &str) -> String {
    format!("{folder}/{tag}.stand{}.{layer}.png", stand.index())
}

/// Image path for a skin base part.
pub fn skin_image_path(folder: &str, part: &str, stand: Stand) -> String {
    format!("{folder}/{part}.stand{}.png", stand.index())
}
