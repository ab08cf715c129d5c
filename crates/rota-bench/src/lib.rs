//! Seeded input generators for the rota benchmarks.

use rota::{Mat4, Quat, Scalar, Vec3};

/// xoshiro256** generator. Reproducible across runs and platforms.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // splitmix64 seeding
        let mut z = seed;
        let s = core::array::from_fn(|_| {
            z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            x ^ (x >> 31)
        });
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;
        let out = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);
        out
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        // top 53 bits give every representable step in [0, 1)
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }

    /// Uniform in `[-1, 1)`.
    pub fn signed(&mut self) -> f64 {
        self.range(-1.0, 1.0)
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0x0F1E_2D3C_4B5A_6978)
}

pub fn random_vec3<S: Scalar>(n: usize) -> Vec<Vec3<S>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let [x, y, z] = [rng.signed(), rng.signed(), rng.signed()].map(S::from_f64);
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Unit rotations about random axes by angles in `[-180, 180)` degrees.
pub fn random_quat<S: Scalar>(n: usize) -> Vec<Quat<S>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let axis = Vec3::new(rng.signed(), rng.signed(), rng.signed() + 2.0);
            let angle = rng.range(-180.0, 180.0);
            Quat::from_axis(axis, angle)
        })
        .map(|q: Quat<f64>| {
            let [x, y, z, w] = q.to_array().map(S::from_f64);
            Quat::new(x, y, z, w)
        })
        .collect()
}

/// Invertible model matrices: translate * rotate * scale with scales kept
/// away from zero.
pub fn random_model_mat4<S: Scalar>(n: usize) -> Vec<Mat4<S>> {
    let axes = random_vec3::<S>(n);
    let mut rng = make_rng();
    axes.into_iter()
        .map(|axis| {
            let mut c = || S::from_f64(rng.signed());
            let angle = S::from_f64(180.0) * c();
            let (sx, sy, sz) = (c().abs() + S::HALF, c().abs() + S::HALF, c().abs() + S::HALF);
            Mat4::multiply_all(&[
                Mat4::translate(c(), c(), c()),
                Mat4::rotate(angle, axis),
                Mat4::scale(sx, sy, sz),
            ])
        })
        .collect()
}

/// Flat xyz buffer of `n` points.
pub fn random_xyz<S: Scalar>(n: usize) -> Vec<S> {
    Vec3::flatten(&random_vec3::<S>(n))
}
