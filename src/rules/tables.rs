//! Hand-curated resolution tables.
//!
//! These tables replicate an established layering contract from static data:
//! per visual layer, the sub-layer tags an item document may define for it,
//! the anchor the layer positions against, and the suppression class it
//! belongs to. The tag lists are in priority order; the first tag whose
//! frame targets the layer being resolved wins.

use crate::model::Stand;

/// Head anchor point on the 200x200 canvas; head-relative layers position
/// against it.
pub const MAIN_ANCHOR: (i32, i32) = (100, 90);

/// Neck anchor point; body-relative layers position against it.
pub const NECK_ANCHOR: (i32, i32) = (100, 121);

/// Marker code within a cap's vslot string that claims the hair region.
pub const HAIR_COVER_MARKER: &str = "H3";

/// Candidate sub-layer tags for a visual layer, in priority order.
///
/// `None` means no item can contribute to this layer name; the resolver
/// produces no output for it.
pub fn candidate_tags(layer: &str) -> Option<&'static [&'static str]> {
    Some(match layer {
        "capBelowBody" | "capBelowAccessory" | "cap" | "capOverHair" => &["default", "defaultAc"],
        "capeBelowBody" | "capeBelowHead" | "cape" | "capeOverArm" => {
            &["cape", "capeArm", "default"]
        }
        "shieldBelowBody" | "shield" | "shieldOverArm" | "shieldOverHair" => {
            &["shield", "default"]
        }
        "weaponBelowBody" | "weaponOverBody" | "weaponBelowArm" | "weaponOverArm"
        | "weaponOverHand" | "weaponOverGlove" => &["weapon", "weaponFront", "default"],
        "hairShade" => &["hairShade"],
        "hairBelowBody" | "hair" | "hairBelowCap" | "hairOverHead" => {
            &["hair", "hairBelowBody", "hairOverHead"]
        }
        "face" => &["face", "default"],
        "accessoryFaceBelowFace" | "accessoryFace" | "accessoryEye" | "accessoryEyeOverCap"
        | "accessoryEar" | "accessoryEarOverHair" | "accessoryEarOverHairBelowCap" => {
            &["default", "defaultAc"]
        }
        "mail" | "mailChestOverPants" | "mailArm" => &["mail", "mailArm", "default"],
        "pants" | "pantsOverMail" => &["pants", "default"],
        "shoe" | "shoeOverPants" => &["shoe", "default"],
        "glove" | "gloveWristBelowBody" | "gloveOverHand" | "gloveWrist" => {
            &["glove", "gloveWrist", "default"]
        }
        _ => return None,
    })
}

/// Whether a layer positions against [`MAIN_ANCHOR`] (head-relative) rather
/// than [`NECK_ANCHOR`] (body-relative).
pub fn is_head_relative(layer: &str) -> bool {
    matches!(
        layer,
        "capBelowBody"
            | "capBelowAccessory"
            | "cap"
            | "capOverHair"
            | "hairShade"
            | "hairBelowBody"
            | "hair"
            | "hairBelowCap"
            | "hairOverHead"
            | "face"
            | "accessoryFaceBelowFace"
            | "accessoryFace"
            | "accessoryEye"
            | "accessoryEyeOverCap"
            | "accessoryEar"
            | "accessoryEarOverHair"
            | "accessoryEarOverHairBelowCap"
            | "shieldOverHair"
    )
}

/// Anchor point for a layer.
pub fn anchor_for(layer: &str) -> (i32, i32) {
    if is_head_relative(layer) {
        MAIN_ANCHOR
    } else {
        NECK_ANCHOR
    }
}

/// Hair layers are suppressed when the cap's vslot claims the hair region.
pub fn is_hair_layer(layer: &str) -> bool {
    matches!(
        layer,
        "hairShade" | "hairBelowBody" | "hair" | "hairBelowCap" | "hairOverHead"
    )
}

/// Accessory layers are suppressed when their own vslot is already occupied.
pub fn is_accessory_layer(layer: &str) -> bool {
    layer.starts_with("accessory")
}

/// Weapon layers are subject to the second-weapon shield redirect.
pub fn is_weapon_layer(layer: &str) -> bool {
    matches!(
        layer,
        "weaponBelowBody"
            | "weaponOverBody"
            | "weaponBelowArm"
            | "weaponOverArm"
            | "weaponOverHand"
            | "weaponOverGlove"
    )
}

/// Skin base parts, drawn from fixed filename patterns rather than metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkinPart {
    /// Torso, neck-relative.
    Body,
    /// Head, main-anchor-relative.
    Head,
    /// Near arm, neck-relative.
    Arm,
    /// Off hand, neck-relative, drawn only in the two-handed stance.
    Hand,
}

impl SkinPart {
    /// File name stem for this part.
    pub fn name(self) -> &'static str {
        match self {
            SkinPart::Body => "body",
            SkinPart::Head => "head",
            SkinPart::Arm => "arm",
            SkinPart::Hand => "hand",
        }
    }
}

/// Anchor for a skin part.
pub fn skin_anchor(part: SkinPart) -> (i32, i32) {
    match part {
        SkinPart::Head => MAIN_ANCHOR,
        _ => NECK_ANCHOR,
    }
}

/// Fixed draw offset of a skin part from its anchor, per stand.
pub fn skin_offset(part: SkinPart, stand: Stand) -> (i32, i32) {
    match (part, stand) {
        (SkinPart::Body, Stand::One) => (-16, -9),
        (SkinPart::Body, Stand::Two) => (-18, -7),
        (SkinPart::Head, _) => (-15, -12),
        (SkinPart::Arm, Stand::One) => (-9, -2),
        (SkinPart::Arm, Stand::Two) => (6, -4),
        (SkinPart::Hand, _) => (-22, 1),
    }
}
