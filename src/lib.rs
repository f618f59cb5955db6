//! Deterministic 2D character avatar compositor.
//!
//! `spriteloom` turns a cosmetic description of a character, a skin tone,
//! gender, hair, face, and a set of equipped item IDs, into a composed
//! 200x200 premultiplied-RGBA frame. Sprite fragments and their placement
//! metadata live in a hierarchical asset namespace behind the
//! [`AssetStore`] trait; everything fetched is memoized for the life of the
//! process, including confirmed absences.
//!
//! A render pass is a fixed pipeline:
//!
//! 1. resolve placement metadata for every contributing piece, all fetches
//!    in flight at once ([`resolve_pieces`]),
//! 2. pick the stand pose from the equipped weapon ([`select_stand`]),
//! 3. walk the fixed back-to-front draw sequence, resolving each visual
//!    layer against its piece's metadata and compositing the winning
//!    fragment onto the canvas,
//! 4. publish the finished frame atomically, fingerprinted so an unchanged
//!    character never triggers another pass.
//!
//! Broken or ancient items degrade to missing fragments, never to errors;
//! [`AvatarRenderer::render`] fails only on caller misuse.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use spriteloom::{AvatarRenderer, CharacterCosmetics, FsAssetStore, Gender, SlotName};
//!
//! # async fn demo() -> spriteloom::LoomResult<()> {
//! let store = Arc::new(FsAssetStore::new("/srv/assets"));
//! let renderer = AvatarRenderer::new(store);
//!
//! let mut cosmetics = CharacterCosmetics {
//!     skin_tone: 0,
//!     gender: Gender::Male,
//!     hair_id: 30_030,
//!     face_id: 20_000,
//!     equipment: Default::default(),
//! };
//! cosmetics.equipment.insert(SlotName::Weapon, 1_302_000);
//!
//! let frame = renderer.render(&cosmetics, 2.0).await?;
//! # let _ = frame;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod assets;
pub mod foundation;
pub mod metadata;
pub mod model;
pub mod render;
pub mod rules;
pub mod store;

pub use assets::decode::{SpriteImage, decode_image};
pub use foundation::error::{LoomError, LoomResult};
pub use metadata::document::{LayerDocument, SubLayer, SubLayerFrame};
pub use metadata::pose::select_stand;
pub use metadata::resolver::{ResolvedPiece, ResolvedPieces, resolve_pieces};
pub use model::{CharacterCosmetics, Gender, PieceKind, PoseState, SlotName, Stand};
pub use render::fingerprint::{CosmeticsFingerprint, fingerprint_cosmetics};
pub use render::pipeline::{AvatarRenderer, RendererOptions};
pub use render::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
pub use store::{AssetCache, AssetStore, FsAssetStore, MemoryAssetStore, normalize_asset_path};
