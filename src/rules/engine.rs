//! Per-layer resolution: decides, for one (visual layer, piece) call,
//! whether the piece contributes a sprite fragment, where it lands, and
//! which image file backs it. Every unresolvable lookup silently draws
//! nothing; a character with broken equipment renders with that equipment
//! missing.

use std::sync::Arc;

use crate::assets::decode::SpriteImage;
use crate::metadata::paths;
use crate::metadata::resolver::ResolvedPieces;
use crate::model::{PieceKind, PoseState, SlotName, Stand};
use crate::render::surface::Surface;
use crate::rules::tables;
use crate::store::{AssetCache, AssetStore};

/// Shared read-only state for one render pass.
pub(crate) struct DrawContext<'a, S: AssetStore> {
    /// Asset I/O boundary.
    pub store: &'a S,
    /// Process-wide memoization caches.
    pub cache: &'a AssetCache,
    /// Metadata resolved up front for every contributing piece.
    pub pieces: &'a ResolvedPieces,
    /// Stand pose and vslot accumulator, fixed for the whole pass.
    pub pose: &'a PoseState,
    /// Skin tone for base body parts.
    pub skin_tone: u8,
}

/// Resolve one visual layer against one piece and draw it if applicable.
pub(crate) async fn draw_piece_layer<S: AssetStore>(
    ctx: &DrawContext<'_, S>,
    surface: &mut Surface,
    piece: PieceKind,
    layer: &str,
) {
    let Some(tags) = tables::candidate_tags(layer) else {
        return;
    };

    if tables::is_hair_layer(layer) && ctx.pose.v_slot.contains(tables::HAIR_COVER_MARKER) {
        tracing::trace!(layer, "hair layer suppressed by cap vslot");
        return;
    }

    let source_piece = if tables::is_weapon_layer(layer) && ctx.pieces.second_weapon() {
        PieceKind::Slot(SlotName::Shield)
    } else {
        piece
    };
    let Some(source) = ctx.pieces.get(source_piece) else {
        return;
    };

    if tables::is_accessory_layer(layer) {
        if let Some(own) = source.doc.vslot.as_deref() {
            if !own.is_empty() && ctx.pose.v_slot.contains(own) {
                tracing::trace!(layer, vslot = own, "accessory suppressed by occupied vslot");
                return;
            }
        }
    }

    for tag in tags {
        let Some(node) = source.doc.node(tag) else {
            continue;
        };
        let Some(frame) = node.frame(ctx.pose.stand) else {
            continue;
        };
        // A sub-layer can exist but target a different visual layer for this
        // stand; only an exact z match contributes here.
        if frame.z != layer {
            continue;
        }

        let (ax, ay) = tables::anchor_for(layer);
        match load_layer_image(ctx, &source.folder, tag, layer).await {
            Some(img) => surface.blit(&img, ax + frame.x, ay + frame.y),
            None => tracing::trace!(layer, tag, "resolved layer has no image"),
        }
        return;
    }
}

/// Draw a skin base part from its fixed filename pattern.
pub(crate) async fn draw_skin_part<S: AssetStore>(
    ctx: &DrawContext<'_, S>,
    surface: &mut Surface,
    part: tables::SkinPart,
) {
    if part == tables::SkinPart::Hand && ctx.pose.stand != Stand::Two {
        return;
    }

    let folder = match part {
        tables::SkinPart::Head => paths::skin_head_folder(ctx.skin_tone),
        _ => paths::skin_body_folder(ctx.skin_tone),
    };
    let path = paths::skin_image_path(&folder, part.name(), ctx.pose.stand);
    if let Some(img) = ctx.cache.image(ctx.store, &path).await {
        let (ax, ay) = tables::skin_anchor(part);
        let (ox, oy) = tables::skin_offset(part, ctx.pose.stand);
        surface.blit(&img, ax + ox, ay + oy);
    }
}

/// Image backing a resolved sub-layer: the current stand's file when it
/// exists, otherwise the stand-1 file.
async fn load_layer_image<S: AssetStore>(
    ctx: &DrawContext<'_, S>,
    folder: &str,
    tag: &str,
    layer: &str,
) -> Option<Arc<SpriteImage>> {
    let primary = paths::layer_image_path(folder, tag, ctx.pose.stand, layer);
    if let Some(img) = ctx.cache.image(ctx.store, &primary).await {
        return Some(img);
    }
    if ctx.pose.stand != Stand::One {
        let fallback = paths::layer_image_path(folder, tag, Stand::One, layer);
        return ctx.cache.image(ctx.store, &fallback).await;
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/rules/engine.rs"]
mod tests;
