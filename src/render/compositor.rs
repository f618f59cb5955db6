//! One full composition pass: resolve piece metadata, fix the pose, then
//! walk the draw sequence back to front onto a fresh canvas.

use std::sync::Arc;

use crate::metadata::pose::select_stand;
use crate::metadata::resolver::resolve_pieces;
use crate::model::{CharacterCosmetics, PieceKind, PoseState, SlotName};
use crate::render::sequence::{DRAW_SEQUENCE, DrawStep};
use crate::render::surface::Surface;
use crate::rules::engine::{DrawContext, draw_piece_layer, draw_skin_part};
use crate::store::{AssetCache, AssetStore};

/// Compose a full character frame at the canvas size.
///
/// Per-layer failures degrade to missing fragments rather than errors, so a
/// character with broken or ancient equipment still produces a frame.
pub(crate) async fn compose_character<S>(
    store: &Arc<S>,
    cache: &Arc<AssetCache>,
    cosmetics: &CharacterCosmetics,
) -> Surface
where
    S: AssetStore + 'static,
{
    let pieces = resolve_pieces(store, cache, cosmetics).await;

    let weapon_doc = pieces
        .get(PieceKind::Slot(SlotName::Weapon))
        .map(|p| p.doc.as_ref());
    let stand = select_stand(cosmetics.equipped(SlotName::Weapon), weapon_doc);
    let mut pose = PoseState::new(stand);
    pose.v_slot = pieces.cap_vslot();
    tracing::debug!(?stand, v_slot = %pose.v_slot, "composing character");

    let ctx = DrawContext {
        store: store.as_ref(),
        cache,
        pieces: &pieces,
        pose: &pose,
        skin_tone: cosmetics.skin_tone,
    };

    let mut surface = Surface::canvas();
    for step in DRAW_SEQUENCE {
        match step {
            DrawStep::Skin(part) => draw_skin_part(&ctx, &mut surface, *part).await,
            DrawStep::Piece(piece, layer) => {
                draw_piece_layer(&ctx, &mut surface, *piece, layer).await;
            }
        }
    }
    surface
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
