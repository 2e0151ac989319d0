// ============================================
// Rotation Math - Поворот вокруг произвольной оси
// ============================================
// Формула Родрига. Ось нормализуется внутри; нулевая ось - ошибка вызова.

use ultraviolet::{Mat3, Vec3};

use super::error::TreegenError;

#[inline]
fn unit_axis(axis: Vec3) -> Result<Vec3, TreegenError> {
    let mag = axis.mag();
    if !mag.is_finite() || mag <= f32::EPSILON {
        return Err(TreegenError::InvalidAxis);
    }
    Ok(axis / mag)
}

#[inline]
fn rodrigues(v: Vec3, k: Vec3, sin: f32, cos: f32) -> Vec3 {
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

/// Повернуть вектор на `angle` радиан вокруг `axis`
pub fn rotate_about_axis(v: Vec3, angle: f32, axis: Vec3) -> Result<Vec3, TreegenError> {
    let k = unit_axis(axis)?;
    let (sin, cos) = angle.sin_cos();
    Ok(rodrigues(v, k, sin, cos))
}

/// Матрица того же поворота (столбцы - повернутый базис)
pub fn rotation_matrix(axis: Vec3, angle: f32) -> Result<Mat3, TreegenError> {
    let k = unit_axis(axis)?;
    let (sin, cos) = angle.sin_cos();
    Ok(Mat3::new(
        rodrigues(Vec3::unit_x(), k, sin, cos),
        rodrigues(Vec3::unit_y(), k, sin, cos),
        rodrigues(Vec3::unit_z(), k, sin, cos),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).mag() < 1e-4
    }

    #[test]
    fn quarter_turn_about_z() {
        let v = rotate_about_axis(Vec3::unit_x(), FRAC_PI_2, Vec3::unit_z()).unwrap();
        assert!(close(v, Vec3::unit_y()));
    }

    #[test]
    fn rotation_then_inverse_is_identity() {
        let axes = [
            Vec3::unit_x(),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-7.0, 0.1, 4.0),
        ];
        let v = Vec3::new(1.5, -0.25, 3.0);
        for axis in axes {
            for deg in [1.0f32, 30.0, 90.0, 179.0, 333.0] {
                let a = deg.to_radians();
                let there = rotate_about_axis(v, a, axis).unwrap();
                let back = rotate_about_axis(there, -a, axis).unwrap();
                assert!(close(back, v), "axis {:?} angle {}", axis, deg);
            }
        }
    }

    #[test]
    fn axis_length_does_not_matter() {
        let v = Vec3::new(0.3, 1.0, -2.0);
        let a = rotate_about_axis(v, 0.7, Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let b = rotate_about_axis(v, 0.7, Vec3::new(0.0, 0.0, 25.0)).unwrap();
        assert!(close(a, b));
    }

    #[test]
    fn degenerate_axis_is_rejected() {
        assert_eq!(rotate_about_axis(Vec3::unit_x(), 1.0, Vec3::zero()), Err(TreegenError::InvalidAxis));
        assert_eq!(
            rotation_matrix(Vec3::new(f32::NAN, 0.0, 1.0), 1.0).err(),
            Some(TreegenError::InvalidAxis),
        );
    }

    #[test]
    fn matrix_agrees_with_vector_rotation() {
        let axis = Vec3::new(1.0, 1.0, 0.0);
        let v = Vec3::new(0.0, 2.0, 1.0);
        let m = rotation_matrix(axis, 1.1).unwrap();
        assert!(close(m * v, rotate_about_axis(v, 1.1, axis).unwrap()));
    }
}
