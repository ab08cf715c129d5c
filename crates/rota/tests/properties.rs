//! Algebraic properties of the kernel types, checked over a small sweep of
//! inputs rather than single hand-picked values.

use rota::{util, Mat3, Mat4, Quat, Transform, Vec3};

fn axes() -> Vec<Vec3<f64>> {
    vec![
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-2.0, 0.5, 3.0),
        Vec3::new(0.1, -0.7, 0.2),
    ]
}

fn angles() -> [f64; 6] {
    [-170.0, -45.0, 0.0, 12.5, 90.0, 179.0]
}

fn mat4_close(a: &Mat4<f64>, b: &Mat4<f64>, tol: f64) -> bool {
    a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() < tol)
}

fn quat_close(a: &Quat<f64>, b: &Quat<f64>, tol: f64) -> bool {
    a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() < tol)
}

#[test]
fn invertible_times_inverse_is_identity() {
    for axis in axes() {
        for angle in angles() {
            let m = Mat4::multiply_all(&[
                Mat4::translate(axis.z, -axis.x, 2.0),
                Mat4::rotate(angle, axis),
                Mat4::scale(1.5, 0.25, 3.0),
            ]);
            let inv = m.inverse().expect("invertible");
            assert!(mat4_close(&(m * inv), &Mat4::ID, 1e-9), "axis {axis} angle {angle}");

            let m3 = Mat3::from(m);
            let inv3 = m3.inverse().expect("invertible");
            let id = m3 * inv3;
            assert!(id.to_array().iter().zip(Mat3::<f64>::ID.to_array()).all(|(x, y)| (x - y).abs() < 1e-9));
        }
    }
}

#[test]
fn inverse_is_none_iff_determinant_is_exactly_zero() {
    let singular = Mat4::<f32>::new(
        1.0, 2.0, 3.0, 4.0,
        2.0, 4.0, 6.0, 8.0,
        0.0, 1.0, 0.0, 1.0,
        1.0, 0.0, 1.0, 0.0,
    );
    assert_eq!(singular.determinant(), 0.0);
    assert!(singular.inverse().is_none());

    // A determinant below the normalize tolerance is still invertible. The
    // inverse check compares against exact zero, unlike util::is_zero.
    let tiny = Mat4::<f32>::scale(1e-3, 1e-3, 1e-3);
    assert!(util::is_zero(tiny.determinant()));
    assert!(tiny.determinant() != 0.0);
    assert!(tiny.inverse().is_some());
}

#[test]
fn unit_quaternion_properties() {
    for axis in axes() {
        for angle in angles() {
            let q = Quat::from_axis(axis, angle);
            assert!((q.normalize().length() - 1.0).abs() < 1e-12);
            assert!(q.conjugate().post_multiply(&q).is_identity());

            let end = Quat::from_axis(Vec3::new(0.3, 1.0, -0.2), 60.0);
            assert!(quat_close(&q.slerp(&end, 0.0), &q, 1e-9));
            assert!(quat_close(&q.slerp(&end, 1.0), &end, 1e-9));
            for alpha in [0.0, 0.25, 0.7, 1.0] {
                assert!(quat_close(&q.slerp(&q, alpha), &q, 1e-12));
            }
        }
    }
}

#[test]
fn quaternion_and_matrix_rotate_alike() {
    let v = Vec3::new(0.4, -1.2, 2.5);
    for axis in axes() {
        for angle in angles() {
            let q = Quat::from_axis(axis, angle);
            let by_quat = q.transform(v);
            let by_mat = Mat4::rotate(angle, axis).transform(v);
            let by_conv = Mat4::from(q).transform(v);
            assert!((by_quat - by_mat).length() < 1e-9, "axis {axis} angle {angle}");
            assert!((by_quat - by_conv).length() < 1e-9);
        }
    }
}

#[test]
fn default_transform_is_identity() {
    let t = Transform::<f32>::default();
    assert_eq!(t.vertex_transform(), Mat4::ID);
    assert_eq!(t.normal_transform(), Some(Mat3::ID));
}

#[test]
fn infinite_far_plane() {
    for near in [0.01_f32, 0.5, 2.0] {
        let a = Mat4::perspective(-1.0, 1.0, -0.75, 0.75, near, f32::INFINITY);
        let b = Mat4::perspective_fov(45.0, 1.333, near, f32::INFINITY).unwrap();
        for m in [a, b] {
            assert_eq!(m.m22, -1.0);
            assert_eq!(m.m23, -2.0 * near);
        }
    }
}

#[test]
fn scenarios() {
    assert_eq!(Vec3::new(1.0_f32, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));

    let v = Mat4::<f32>::rotate(90.0, Vec3::Y).transform(Vec3::new(1.0, 0.0, 0.0));
    assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

    let aa = Quat::<f32>::from_axis(Vec3::X, 180.0).axis_angle();
    assert!((aa.truncate() - Vec3::X).length() < 1e-5);
    assert!((aa.w - 180.0).abs() < 1e-3);
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_keeps_layout() {
    let q = Quat::<f64>::from_axis(Vec3::Z, 30.0);
    let json = serde_json::to_string(&q).unwrap();
    assert!(json.starts_with("{\"x\":"));
    let back: Quat<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);

    let mut t = Transform::<f32>::new();
    t.set_translation(Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&t).unwrap();
    let back: Transform<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.translation(), t.translation());
    assert_eq!(back.vertex_transform(), t.vertex_transform());
}
