//! Parallel per-piece metadata resolution, run once at the start of every
//! render pass.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::metadata::document::LayerDocument;
use crate::metadata::paths;
use crate::model::{CharacterCosmetics, PieceKind, SlotName};
use crate::store::{AssetCache, AssetStore};

/// Metadata resolved for one contributing piece.
#[derive(Clone, Debug)]
pub struct ResolvedPiece {
    /// Item folder under the asset namespace.
    pub folder: String,
    /// Item ID this piece resolved from.
    pub item_id: u32,
    /// Parsed layer metadata.
    pub doc: Arc<LayerDocument>,
}

/// All piece metadata for one render.
///
/// Pieces whose metadata document is missing or unusable are absent here;
/// that is the normal outcome for older or invalid item IDs and simply means
/// the piece contributes no layers.
#[derive(Clone, Debug, Default)]
pub struct ResolvedPieces {
    pieces: HashMap<PieceKind, ResolvedPiece>,
    second_weapon: bool,
}

impl ResolvedPieces {
    /// Resolved metadata for a piece, if the item has any.
    pub fn get(&self, piece: PieceKind) -> Option<&ResolvedPiece> {
        self.pieces.get(&piece)
    }

    /// Whether the Shield slot holds a second weapon rather than a true
    /// shield.
    pub fn second_weapon(&self) -> bool {
        self.second_weapon
    }

    /// The Cap's visual-region tag, seeding the per-render vslot accumulator.
    pub fn cap_vslot(&self) -> String {
        self.get(PieceKind::Slot(SlotName::Cap))
            .and_then(|p| p.doc.vslot.clone())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn insert_for_test(&mut self, piece: PieceKind, resolved: ResolvedPiece) {
        self.pieces.insert(piece, resolved);
    }

    #[cfg(test)]
    pub(crate) fn set_second_weapon_for_test(&mut self, value: bool) {
        self.second_weapon = value;
    }
}

/// Pieces whose metadata a render needs: every populated equipment slot,
/// the hair and face attributes, and the gender-default coat and pants when
/// those slots are empty.
fn piece_requests(cosmetics: &CharacterCosmetics) -> Vec<(PieceKind, u32)> {
    let mut out = vec![
        (PieceKind::Hair, cosmetics.hair_id),
        (PieceKind::Face, cosmetics.face_id),
    ];
    for (slot, item_id) in &cosmetics.equipment {
        out.push((PieceKind::Slot(*slot), *item_id));
    }
    if cosmetics.equipped(SlotName::Coat).is_none() {
        out.push((
            PieceKind::Slot(SlotName::Coat),
            paths::default_coat(cosmetics.gender),
        ));
    }
    if cosmetics.equipped(SlotName::Pants).is_none() {
        out.push((
            PieceKind::Slot(SlotName::Pants),
            paths::default_pants(cosmetics.gender),
        ));
    }
    out
}

/// Fetch metadata for every contributing piece, all fetches in flight at
/// once. No piece's fetch depends on another's; completion order is
/// irrelevant because results land in a map keyed by piece.
pub async fn resolve_pieces<S>(
    store: &Arc<S>,
    cache: &Arc<AssetCache>,
    cosmetics: &CharacterCosmetics,
) -> ResolvedPieces
where
    S: AssetStore + 'static,
{
    let mut set = JoinSet::new();
    for (piece, item_id) in piece_requests(cosmetics) {
        let folder = paths::piece_folder(piece, item_id);
        let store = Arc::clone(store);
        let cache = Arc::clone(cache);
        set.spawn(async move {
            let doc = cache.document(store.as_ref(), &folder).await;
            (piece, item_id, folder, doc)
        });
    }

    let mut pieces = HashMap::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((piece, item_id, folder, Some(doc))) => {
                pieces.insert(piece, ResolvedPiece { folder, item_id, doc });
            }
            Ok((piece, item_id, folder, None)) => {
                tracing::debug!(?piece, item_id, folder, "piece has no metadata");
            }
            Err(e) => {
                tracing::warn!(error = %e, "metadata fetch task failed");
            }
        }
    }

    let second_weapon = cosmetics
        .equipped(SlotName::Shield)
        .is_some_and(|id| paths::SECOND_WEAPON_IDS.contains(&id));

    ResolvedPieces {
        pieces,
        second_weapon,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/resolver.rs"]
mod tests;
