use std::collections::BTreeMap;

use super::*;
use crate::model::Gender;
use crate::store::MemoryAssetStore;

fn png_solid(px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, px.to_vec()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn cosmetics(equipment: BTreeMap<SlotName, u32>) -> CharacterCosmetics {
    CharacterCosmetics {
        skin_tone: 0,
        gender: Gender::Male,
        hair_id: 30_000,
        face_id: 20_000,
        equipment,
    }
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

#[tokio::test]
async fn later_sequence_steps_paint_over_earlier_ones() {
    let mut store = MemoryAssetStore::new();
    store.insert(
        "Cape/01102000.img/coord.json",
        br#"{ "cape": { "stand2": { "x": 0, "y": 0, "z": "cape" } } }"#.to_vec(),
    );
    store.insert("Cape/01102000.img/cape.stand2.cape.png", png_solid(RED));
    store.insert(
        "Coat/01040002.img/coord.json",
        br#"{ "mail": { "stand2": { "x": 0, "y": 0, "z": "mail" } } }"#.to_vec(),
    );
    store.insert("Coat/01040002.img/mail.stand2.mail.png", png_solid(GREEN));
    let store = Arc::new(store);
    let cache = Arc::new(AssetCache::new());

    let c = cosmetics(BTreeMap::from([
        (SlotName::Cape, 1_102_000u32),
        (SlotName::Coat, 1_040_002u32),
    ]));
    let surface = compose_character(&store, &cache, &c).await;

    // Both fragments land at the body anchor; the coat's "mail" step comes
    // after the cape's "cape" step.
    assert_eq!(surface.pixel(100, 121), GREEN);
}

#[tokio::test]
async fn weapon_declared_stand_selects_the_pass_pose() {
    let mut store = MemoryAssetStore::new();
    store.insert(
        "Weapon/01302000.img/coord.json",
        br#"{ "info": { "stand": 1 },
             "weapon": { "stand1": { "x": 0, "y": 0, "z": "weaponOverArm" } } }"#
            .to_vec(),
    );
    store.insert(
        "Weapon/01302000.img/weapon.stand1.weaponOverArm.png",
        png_solid(RED),
    );
    // A cape that only exists in the two-handed pose must not draw.
    store.insert(
        "Cape/01102000.img/coord.json",
        br#"{ "cape": { "stand2": { "x": -50, "y": -50, "z": "cape" } } }"#.to_vec(),
    );
    store.insert("Cape/01102000.img/cape.stand2.cape.png", png_solid(GREEN));
    store.insert("Skin/00002000.img/hand.stand1.png", png_solid(GREEN));
    store.insert("Skin/00002000.img/hand.stand2.png", png_solid(GREEN));
    let store = Arc::new(store);
    let cache = Arc::new(AssetCache::new());

    let c = cosmetics(BTreeMap::from([
        (SlotName::Weapon, 1_302_000u32),
        (SlotName::Cape, 1_102_000u32),
    ]));
    let surface = compose_character(&store, &cache, &c).await;

    assert_eq!(surface.pixel(100, 121), RED);
    assert_eq!(surface.pixel(50, 71), [0; 4]);
    // Hand base part is exclusive to the two-handed pose.
    assert_eq!(surface.pixel(78, 122), [0; 4]);
}

#[tokio::test]
async fn cap_region_tag_suppresses_hair_across_the_pass() {
    let mut store = MemoryAssetStore::new();
    store.insert(
        "Hair/00030000.img/coord.json",
        br#"{ "hair": { "stand2": { "x": 0, "y": 0, "z": "hair" } } }"#.to_vec(),
    );
    store.insert("Hair/00030000.img/hair.stand2.hair.png", png_solid(RED));
    store.insert(
        "Cap/01002357.img/coord.json",
        br#"{ "info": { "vslot": "CpH1H3H5" },
             "default": { "stand2": { "x": -40, "y": 0, "z": "cap" } } }"#
            .to_vec(),
    );
    store.insert("Cap/01002357.img/default.stand2.cap.png", png_solid(GREEN));
    let store = Arc::new(store);

    let covered = cosmetics(BTreeMap::from([(SlotName::Cap, 1_002_357u32)]));
    let surface = compose_character(&store, &Arc::new(AssetCache::new()), &covered).await;
    assert_eq!(surface.pixel(60, 90), GREEN);
    assert_eq!(surface.pixel(100, 90), [0; 4]);

    let bare = cosmetics(BTreeMap::new());
    let surface = compose_character(&store, &Arc::new(AssetCache::new()), &bare).await;
    assert_eq!(surface.pixel(100, 90), RED);
}
