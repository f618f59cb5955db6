use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::{Gender, SlotName};
use crate::store::MemoryAssetStore;

struct CountingStore {
    inner: MemoryAssetStore,
    exists_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl CountingStore {
    fn new(inner: MemoryAssetStore) -> Self {
        Self {
            inner,
            exists_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    fn store_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst) + self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl AssetStore for CountingStore {
    fn exists(&self, path: &str) -> impl Future<Output = bool> + Send {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(path)
    }

    fn fetch(&self, path: &str) -> impl Future<Output = Option<Vec<u8>>> + Send {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(path)
    }
}

fn png_solid(px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, px.to_vec()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

const BODY: [u8; 4] = [255, 0, 0, 255];
const HEAD: [u8; 4] = [0, 255, 0, 255];
const ARM: [u8; 4] = [0, 0, 255, 255];
const HAND: [u8; 4] = [255, 255, 0, 255];
const HAIR: [u8; 4] = [255, 0, 255, 255];
const FACE: [u8; 4] = [0, 255, 255, 255];
const COAT: [u8; 4] = [128, 0, 0, 255];
const PANTS: [u8; 4] = [0, 128, 0, 255];

/// Assets for the base character: skin parts, hair, face, and the male
/// default coat and pants.
fn base_store() -> MemoryAssetStore {
    let mut store = MemoryAssetStore::new();
    store.insert("Skin/00002000.img/body.stand2.png", png_solid(BODY));
    store.insert("Skin/00012000.img/head.stand2.png", png_solid(HEAD));
    store.insert("Skin/00002000.img/arm.stand2.png", png_solid(ARM));
    store.insert("Skin/00002000.img/hand.stand2.png", png_solid(HAND));
    store.insert(
        "Hair/00030000.img/coord.json",
        br#"{ "hair": { "stand2": { "x": 0, "y": 0, "z": "hair" } } }"#.to_vec(),
    );
    store.insert("Hair/00030000.img/hair.stand2.hair.png", png_solid(HAIR));
    store.insert(
        "Face/00020000.img/coord.json",
        br#"{ "face": { "stand2": { "x": 0, "y": 10, "z": "face" } } }"#.to_vec(),
    );
    store.insert("Face/00020000.img/face.stand2.face.png", png_solid(FACE));
    store.insert(
        "Coat/01040036.img/coord.json",
        br#"{ "mail": { "stand2": { "x": 0, "y": 0, "z": "mail" } } }"#.to_vec(),
    );
    store.insert("Coat/01040036.img/mail.stand2.mail.png", png_solid(COAT));
    store.insert(
        "Pants/01060026.img/coord.json",
        br#"{ "pants": { "stand2": { "x": 0, "y": 5, "z": "pants" } } }"#.to_vec(),
    );
    store.insert("Pants/01060026.img/pants.stand2.pants.png", png_solid(PANTS));
    store
}

fn base_cosmetics() -> CharacterCosmetics {
    CharacterCosmetics {
        skin_tone: 0,
        gender: Gender::Male,
        hair_id: 30_000,
        face_id: 20_000,
        equipment: BTreeMap::new(),
    }
}

#[tokio::test(start_paused = true)]
async fn base_character_renders_skin_and_default_clothes() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let renderer = AvatarRenderer::new(Arc::new(base_store()));
    let frame = renderer.render(&base_cosmetics(), 1.0).await.unwrap();

    assert_eq!((frame.width(), frame.height()), (200, 200));
    // Skin parts at their fixed anchor-plus-offset positions.
    assert_eq!(frame.pixel(82, 114), BODY);
    assert_eq!(frame.pixel(85, 78), HEAD);
    assert_eq!(frame.pixel(106, 117), ARM);
    assert_eq!(frame.pixel(78, 122), HAND);
    // Hair and face from their metadata frames.
    assert_eq!(frame.pixel(100, 90), HAIR);
    assert_eq!(frame.pixel(100, 100), FACE);
    // Empty coat and pants slots fall back to the gender defaults.
    assert_eq!(frame.pixel(100, 121), COAT);
    assert_eq!(frame.pixel(100, 126), PANTS);
}

#[tokio::test(start_paused = true)]
async fn missing_hair_assets_degrade_to_an_absent_layer() {
    let mut store = base_store();
    store.insert("Hair/00030000.img/coord.json", b"not json".to_vec());
    let renderer = AvatarRenderer::new(Arc::new(store));

    let frame = renderer.render(&base_cosmetics(), 1.0).await.unwrap();
    assert_eq!(frame.pixel(100, 90), [0; 4]);
    assert_eq!(frame.pixel(82, 114), BODY);
}

#[tokio::test(start_paused = true)]
async fn unchanged_cosmetics_reuse_the_published_frame() {
    let store = Arc::new(CountingStore::new(base_store()));
    let renderer = AvatarRenderer::new(Arc::clone(&store));
    let c = base_cosmetics();

    let first = renderer.render(&c, 1.0).await.unwrap();
    let calls_after_first = store.store_calls();
    assert!(calls_after_first > 0);

    let second = renderer.render(&c, 1.0).await.unwrap();
    assert_eq!(store.store_calls(), calls_after_first);
    assert_eq!(second.data(), first.data());

    // A real change recomposes.
    let mut changed = c.clone();
    changed.equipment.insert(SlotName::Cap, 1_002_357);
    renderer.render(&changed, 1.0).await.unwrap();
    assert!(store.store_calls() > calls_after_first);
}

#[tokio::test(start_paused = true)]
async fn invalid_scale_is_rejected_and_keeps_the_published_frame() {
    let store = Arc::new(CountingStore::new(base_store()));
    let renderer = AvatarRenderer::new(Arc::clone(&store));
    let c = base_cosmetics();

    renderer.render(&c, 1.0).await.unwrap();
    let calls = store.store_calls();

    assert!(renderer.render(&c, 0.0).await.is_err());
    assert!(renderer.render(&c, -2.0).await.is_err());
    assert!(renderer.render(&c, f64::NAN).await.is_err());

    // The published frame survived; the retry is served from it.
    let frame = renderer.render(&c, 1.0).await.unwrap();
    assert_eq!(store.store_calls(), calls);
    assert_eq!(frame.pixel(82, 114), BODY);
}

#[tokio::test(start_paused = true)]
async fn scale_applies_to_the_returned_frame_only() {
    let renderer = AvatarRenderer::new(Arc::new(base_store()));
    let c = base_cosmetics();

    let scaled = renderer.render(&c, 2.0).await.unwrap();
    assert_eq!((scaled.width(), scaled.height()), (400, 400));
    assert_eq!(scaled.pixel(164, 228), BODY);

    // The published frame stays at canvas size.
    let unscaled = renderer.render(&c, 1.0).await.unwrap();
    assert_eq!((unscaled.width(), unscaled.height()), (200, 200));
}
