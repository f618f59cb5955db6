//! Cosmetic change detection.

use crate::foundation::math::Fnv1a64;
use crate::model::{CharacterCosmetics, Gender};

/// 128-bit change-detection fingerprint over the cosmetic fields that affect
/// rendering.
///
/// The renderer compares it against the last completed render to skip a full
/// pass when the input is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CosmeticsFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

/// Fingerprint a cosmetic snapshot.
pub fn fingerprint_cosmetics(c: &CharacterCosmetics) -> CosmeticsFingerprint {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, u64::from(c.skin_tone));
    write_u8_pair(
        &mut a,
        &mut b,
        match c.gender {
            Gender::Male => 0,
            Gender::Female => 1,
        },
    );
    write_u64_pair(&mut a, &mut b, u64::from(c.hair_id));
    write_u64_pair(&mut a, &mut b, u64::from(c.face_id));

    write_u64_pair(&mut a, &mut b, c.equipment.len() as u64);
    for (slot, item_id) in &c.equipment {
        write_u8_pair(&mut a, &mut b, *slot as u8);
        write_u64_pair(&mut a, &mut b, u64::from(*item_id));
    }

    CosmeticsFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}
