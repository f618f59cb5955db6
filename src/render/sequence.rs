//! The fixed layer draw order.
//!
//! This sequence is a contract: it replicates an established z-ordering, and
//! reordering entries changes visible layering. Draws execute strictly in
//! this order; later draws paint over earlier ones. The same piece appears
//! many times under different layer names, and each call independently
//! checks applicability against the piece's metadata.

use crate::model::PieceKind::{self, Face, Hair, Slot};
use crate::model::SlotName::{
    Cap, Cape, Coat, Ears, Eyes, Glove, Mask, Pants, Shield, Shoes, Weapon,
};
use crate::rules::tables::SkinPart;

use DrawStep::{Piece, Skin};

/// One entry of the draw sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DrawStep {
    /// Draw a skin base part from its fixed filename pattern.
    Skin(SkinPart),
    /// Resolve a visual layer against a piece's metadata.
    Piece(PieceKind, &'static str),
}

/// The full back-to-front draw order for one render pass.
pub(crate) const DRAW_SEQUENCE: &[DrawStep] = &[
    Piece(Slot(Cape), "capeBelowBody"),
    Piece(Slot(Cape), "capeBelowHead"),
    Piece(Slot(Shield), "shieldBelowBody"),
    Piece(Slot(Weapon), "weaponBelowBody"),
    Piece(Slot(Cap), "capBelowBody"),
    Piece(Hair, "hairBelowBody"),
    Skin(SkinPart::Body),
    Piece(Slot(Glove), "gloveWristBelowBody"),
    Piece(Slot(Cape), "cape"),
    Piece(Slot(Shoes), "shoe"),
    Piece(Slot(Pants), "pants"),
    Piece(Slot(Coat), "mail"),
    Piece(Slot(Pants), "pantsOverMail"),
    Piece(Slot(Coat), "mailChestOverPants"),
    Piece(Slot(Shoes), "shoeOverPants"),
    Skin(SkinPart::Head),
    Piece(Hair, "hairShade"),
    Piece(Slot(Mask), "accessoryFaceBelowFace"),
    Piece(Face, "face"),
    Piece(Hair, "hair"),
    Piece(Hair, "hairBelowCap"),
    Piece(Slot(Mask), "accessoryFace"),
    Piece(Slot(Eyes), "accessoryEye"),
    Piece(Slot(Ears), "accessoryEar"),
    Piece(Slot(Ears), "accessoryEarOverHairBelowCap"),
    Piece(Slot(Cap), "capBelowAccessory"),
    Piece(Slot(Cap), "cap"),
    Piece(Hair, "hairOverHead"),
    Piece(Slot(Cap), "capOverHair"),
    Piece(Slot(Shield), "shieldOverHair"),
    Piece(Slot(Eyes), "accessoryEyeOverCap"),
    Piece(Slot(Ears), "accessoryEarOverHair"),
    Piece(Slot(Shield), "shield"),
    Piece(Slot(Weapon), "weaponOverBody"),
    Piece(Slot(Weapon), "weaponBelowArm"),
    Skin(SkinPart::Arm),
    Piece(Slot(Coat), "mailArm"),
    Piece(Slot(Cape), "capeOverArm"),
    Piece(Slot(Glove), "glove"),
    Piece(Slot(Weapon), "weaponOverArm"),
    Piece(Slot(Shield), "shieldOverArm"),
    Skin(SkinPart::Hand),
    Piece(Slot(Glove), "gloveOverHand"),
    Piece(Slot(Weapon), "weaponOverHand"),
    Piece(Slot(Glove), "gloveWrist"),
    Piece(Slot(Weapon), "weaponOverGlove"),
];
