use crate::noise::gradient::{gradient1d, gradient2d, gradient3d, gradient4d};
use crate::noise::tables::{perm, perm_mod_12, F2, F3, F4, G2, G3, G4, SIMPLEX_LOOKUP};
use crate::util::integer::floor32;

/*
Simplex Noise
=============

Gradient noise evaluated on a lattice of simplices (triangles in 2D,
tetrahedra in 3D, 5-cells in 4D) instead of hypercubes. An N-dimensional
point only ever touches the N + 1 corners of the simplex that contains it,
so the cost grows linearly with dimension rather than as 2^N.


Vocabulary
----------

  skew        Stretch space along the main diagonal so that the simplex
              grid lines up with the integer grid. After skewing, flooring
              each coordinate gives the cell that holds the point.

                  s  = (x + y + ...) · F
                  i  = floor(x + s), j = floor(y + s), ...

  unskew      Map the cell origin back to input space and take the offsets
              of the point from it:

                  t  = (i + j + ...) · G
                  x0 = x − (i − t), y0 = y − (j − t), ...

  corner      A simplex vertex. Its contribution falls off as
              (R − |offset|²)⁴ and is zero outside radius √R, so only
              nearby corners matter and the field stays continuous.

  traversal   The order in which the corners are visited, from the cell
              origin to the far corner (1, 1, ..., 1). Moving along the axis
              with the largest offset first keeps the walk inside the
              simplex that contains the point.


Corner Traversal by Dimension
-----------------------------

    2D    x0 > y0 ?          (0,0) → (1,0) → (1,1)
                             (0,0) → (0,1) → (1,1)

    3D    nested compares    six orderings of (x0, y0, z0), each giving
                             two intermediate corners

    4D    6-bit code         one bit per pairwise comparison; the lookup
                             table turns the code into axis ranks and the
                             intermediate corners take axes with rank ≥ 3,
                             ≥ 2, ≥ 1 in turn


Scaling
-------

    dim   radius R   scale   observed range
     1      1.0       0.25   about [-0.63, 0.60]
     2      0.5       40     about ±0.88
     3      0.6       32     about ±0.98
     4      0.6       27     about ±0.99

The 4D scale is empirical. It keeps sampled output inside [-1, 1] but has
not been derived from the true extreme of the 4D sum.
*/

const SCALE_1D: f64 = 0.25;
const SCALE_2D: f64 = 40.0;
const SCALE_3D: f64 = 32.0;
// Empirical, see above
const SCALE_4D: f64 = 27.0;

const RADIUS_2D: f64 = 0.5;
const RADIUS_3D: f64 = 0.6;
const RADIUS_4D: f64 = 0.6;

/// (R − d²)⁴, or zero outside the corner's support.
#[inline]
fn falloff(radius: f64, dist2: f64) -> f64 {
    let t = radius - dist2;
    if t < 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    t2 * t2
}

/// Map signed noise onto `[0, 1]`.
#[inline]
pub fn to_unipolar(signed: f64) -> f64 {
    signed * 0.5 + 0.5
}

/// 1D signed noise. Zero at every integer.
///
/// # Example
/// ```
/// use kmath::noise::signed_noise1d;
/// assert_eq!(signed_noise1d(3.0), 0.0);
/// ```
pub fn signed_noise1d(x: f64) -> f64 {
    let i0 = floor32(x);
    let x0 = x - i0 as f64;
    let x1 = x0 - 1.0;

    let n0 = falloff(1.0, x0 * x0) * gradient1d(perm(i0), x0);
    let n1 = falloff(1.0, x1 * x1) * gradient1d(perm(i0.wrapping_add(1)), x1);

    SCALE_1D * (n0 + n1)
}

/// 2D signed noise.
pub fn signed_noise2d(x: f64, y: f64) -> f64 {
    let s = (x + y) * F2;
    let i = floor32(x + s);
    let j = floor32(y + s);

    let t = (i as f64 + j as f64) * G2;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = i & 0xff;
    let jj = j & 0xff;
    let gi0 = perm(ii + perm(jj));
    let gi1 = perm(ii + i1 + perm(jj + j1));
    let gi2 = perm(ii + 1 + perm(jj + 1));

    let n0 = falloff(RADIUS_2D, x0 * x0 + y0 * y0) * gradient2d(gi0, x0, y0);
    let n1 = falloff(RADIUS_2D, x1 * x1 + y1 * y1) * gradient2d(gi1, x1, y1);
    let n2 = falloff(RADIUS_2D, x2 * x2 + y2 * y2) * gradient2d(gi2, x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

/// 3D signed noise.
pub fn signed_noise3d(x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let i = floor32(x + s);
    let j = floor32(y + s);
    let k = floor32(z + s);

    let t = (i as f64 + j as f64 + k as f64) * G3;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);

    let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
        if y0 >= z0 {
            ((1, 0, 0), (1, 1, 0))
        } else if x0 >= z0 {
            ((1, 0, 0), (1, 0, 1))
        } else {
            ((0, 0, 1), (1, 0, 1))
        }
    } else if y0 < z0 {
        ((0, 0, 1), (0, 1, 1))
    } else if x0 < z0 {
        ((0, 1, 0), (0, 1, 1))
    } else {
        ((0, 1, 0), (1, 1, 0))
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = i & 0xff;
    let jj = j & 0xff;
    let kk = k & 0xff;
    let hash = |di: i32, dj: i32, dk: i32| perm_mod_12(ii + di + perm(jj + dj + perm(kk + dk)));

    let n0 = falloff(RADIUS_3D, x0 * x0 + y0 * y0 + z0 * z0)
        * gradient3d(hash(0, 0, 0), x0, y0, z0);
    let n1 = falloff(RADIUS_3D, x1 * x1 + y1 * y1 + z1 * z1)
        * gradient3d(hash(i1, j1, k1), x1, y1, z1);
    let n2 = falloff(RADIUS_3D, x2 * x2 + y2 * y2 + z2 * z2)
        * gradient3d(hash(i2, j2, k2), x2, y2, z2);
    let n3 = falloff(RADIUS_3D, x3 * x3 + y3 * y3 + z3 * z3)
        * gradient3d(hash(1, 1, 1), x3, y3, z3);

    SCALE_3D * (n0 + n1 + n2 + n3)
}

/// 4D signed noise.
pub fn signed_noise4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    let s = (x + y + z + w) * F4;
    let i = floor32(x + s);
    let j = floor32(y + s);
    let k = floor32(z + s);
    let l = floor32(w + s);

    let t = (i as f64 + j as f64 + k as f64 + l as f64) * G4;
    let p0 = [
        x - (i as f64 - t),
        y - (j as f64 - t),
        z - (k as f64 - t),
        w - (l as f64 - t),
    ];
    let [x0, y0, z0, w0] = p0;

    let code = ((x0 > y0) as usize) << 5
        | ((x0 > z0) as usize) << 4
        | ((y0 > z0) as usize) << 3
        | ((x0 > w0) as usize) << 2
        | ((y0 > w0) as usize) << 1
        | (z0 > w0) as usize;
    let rank = SIMPLEX_LOOKUP[code];
    let step = |threshold: u8| rank.map(|r| (r >= threshold) as i32);
    let corners = [[0; 4], step(3), step(2), step(1), [1; 4]];

    let ii = i & 0xff;
    let jj = j & 0xff;
    let kk = k & 0xff;
    let ll = l & 0xff;

    let mut sum = 0.0;
    for (n, o) in corners.iter().enumerate() {
        let unskew = n as f64 * G4;
        let d = [
            p0[0] - o[0] as f64 + unskew,
            p0[1] - o[1] as f64 + unskew,
            p0[2] - o[2] as f64 + unskew,
            p0[3] - o[3] as f64 + unskew,
        ];
        let dist2 = d[0] * d[0] + d[1] * d[1] + d[2] * d[2] + d[3] * d[3];
        let attenuation = falloff(RADIUS_4D, dist2);
        if attenuation == 0.0 {
            continue;
        }
        let hash = perm(ii + o[0] + perm(jj + o[1] + perm(kk + o[2] + perm(ll + o[3]))));
        sum += attenuation * gradient4d(hash, d[0], d[1], d[2], d[3]);
    }

    SCALE_4D * sum
}

/// 1D noise mapped onto `[0, 1]`.
#[inline]
pub fn simplex_noise1d(x: f64) -> f64 {
    to_unipolar(signed_noise1d(x))
}

/// 2D noise mapped onto `[0, 1]`.
#[inline]
pub fn simplex_noise2d(x: f64, y: f64) -> f64 {
    to_unipolar(signed_noise2d(x, y))
}

/// 3D noise mapped onto `[0, 1]`.
#[inline]
pub fn simplex_noise3d(x: f64, y: f64, z: f64) -> f64 {
    to_unipolar(signed_noise3d(x, y, z))
}

/// 4D noise mapped onto `[0, 1]`.
#[inline]
pub fn simplex_noise4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    to_unipolar(signed_noise4d(x, y, z, w))
}

/// Render a strip of 1D signed noise, sample `i` at `start + i·step`.
pub fn fill_noise1d(buffer: &mut [f64], start: f64, step: f64) {
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample = signed_noise1d(start + i as f64 * step);
    }
}

/// Render a horizontal strip of 2D signed noise starting at `(x, y)`.
pub fn fill_noise2d(buffer: &mut [f64], x: f64, y: f64, dx: f64) {
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample = signed_noise2d(x + i as f64 * dx, y);
    }
}
