//! Fixed lookup tables for the simplex noise engine.
//!
//! Every table is a `const` array, so lookups compile down to indexed loads
//! from read-only memory and any number of threads can sample concurrently.

/// Skew factor for 2D, 1/(1 + √3) = (√3 − 1)/2.
pub const F2: f64 = 0.366_025_403_784_438_65;
/// Unskew factor for 2D, 1/(3 + √3) = (3 − √3)/6.
pub const G2: f64 = 0.211_324_865_405_187_13;
/// Skew factor for 3D.
pub const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3D.
pub const G3: f64 = 1.0 / 6.0;
/// Skew factor for 4D, 1/(1 + √5) = (√5 − 1)/4.
pub const F4: f64 = 0.309_016_994_374_947_4;
/// Unskew factor for 4D, 1/(5 + √5) = (5 − √5)/20.
pub const G4: f64 = 0.138_196_601_125_010_5;

/// Ken Perlin's reference permutation of 0..=255.
///
/// Lattice coordinates index it after masking with `& 0xff`; chained lookups
/// mask again after every addition, so nothing ever reads past index 255.
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// `PERMUTATION[i] % 12`, the 3D gradient selector.
pub const PERM_MOD_12: [u8; 256] = build_perm_mod_12();

const fn build_perm_mod_12() -> [u8; 256] {
    let mut out = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        out[i] = PERMUTATION[i] % 12;
        i += 1;
    }
    out
}

/// 4D corner traversal order, indexed by the 6-bit comparison code
///
/// ```text
/// 32·(x0 > y0) + 16·(x0 > z0) + 8·(y0 > z0) + 4·(x0 > w0) + 2·(y0 > w0) + (z0 > w0)
/// ```
///
/// Each entry ranks the four axes from 0 (smallest offset) to 3 (largest).
/// Only 24 of the 64 codes are consistent orderings; the rest can't occur and
/// hold zeros.
pub const SIMPLEX_LOOKUP: [[u8; 4]; 64] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 0, 0, 0],
    [0, 2, 3, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 2, 3, 0],
    [0, 2, 1, 3],
    [0, 0, 0, 0],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 3, 2, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 2, 0, 3],
    [0, 0, 0, 0],
    [1, 3, 0, 2],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 0, 3, 1],
    [0, 0, 0, 0],
    [2, 1, 3, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 0, 1, 3],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [0, 0, 0, 0],
    [3, 1, 2, 0],
    [2, 1, 0, 3],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [3, 1, 0, 2],
    [0, 0, 0, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

/// Hash of a lattice coordinate.
#[inline]
pub fn perm(i: i32) -> i32 {
    PERMUTATION[(i & 0xff) as usize] as i32
}

/// 3D gradient index of a lattice coordinate.
#[inline]
pub fn perm_mod_12(i: i32) -> i32 {
    PERM_MOD_12[(i & 0xff) as usize] as i32
}
