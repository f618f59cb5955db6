//! Stand-pose selection.
//!
//! Runs exactly once per render, before any layer is drawn; the chosen stand
//! is held constant for every subsequent layer lookup of that render.

use crate::metadata::document::LayerDocument;
use crate::metadata::paths::POSE_ITEM_CUTOFF;
use crate::model::Stand;

/// Choose the full-body stand pose from the equipped weapon.
///
/// A weapon below [`POSE_ITEM_CUTOFF`] with a declared pose wins; a missing
/// weapon, missing document, missing declaration, or special-cased weapon ID
/// all fall back to [`Stand::Two`].
pub fn select_stand(weapon_id: Option<u32>, weapon_doc: Option<&LayerDocument>) -> Stand {
    let declared = match (weapon_id, weapon_doc) {
        (Some(id), Some(doc)) if id < POSE_ITEM_CUTOFF => doc.declared_stand,
        _ => None,
    };
    declared.unwrap_or(Stand::Two)
}
