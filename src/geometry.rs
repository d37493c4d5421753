//! ランドマーク座標に対する純粋なジオメトリ関数

use crate::error::GeometryError;
use crate::pose::{Landmark, Vector3};

/// 腰幅の想定値（cm）。ワールド座標のスケール校正に使う
pub const DEFAULT_REFERENCE_HIP_CM: f64 = 20.0;

/// これ未満の長さはゼロベクトルとみなす
const DEGENERATE_EPSILON: f64 = 1e-12;

/// 3次元ユークリッド距離
pub fn distance_3d(a: Landmark, b: Landmark) -> f64 {
    vector_between(a, b).length()
}

/// 成分ごとの中点
pub fn midpoint(a: Landmark, b: Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// a - b のベクトル（向きは b → a）
pub fn vector_between(a: Landmark, b: Landmark) -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// 2ベクトルのなす角（度）
///
/// 浮動小数点誤差で cos が [-1, 1] をはみ出すことがあるのでクランプしてから acos する。
pub fn angle_between(u: Vector3, v: Vector3) -> Result<f64, GeometryError> {
    let u_len = u.length();
    let v_len = v.length();
    if u_len < DEGENERATE_EPSILON || v_len < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateVector("angle operand has zero length"));
    }
    let cos = (u.dot(v) / (u_len * v_len)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// 腰幅を基準にしたスケール係数（ワールド単位 → 概算cm）
pub fn scale_coefficient(
    hip_left: Landmark,
    hip_right: Landmark,
    reference_cm: f64,
) -> Result<f64, GeometryError> {
    let hip_distance = distance_3d(hip_left, hip_right);
    if hip_distance < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateVector("hip landmarks coincide"));
    }
    Ok(reference_cm / hip_distance)
}

/// 正規化座標をピクセル座標に変換
///
/// 範囲外の入力はキャンバス外の座標になる。クリップは描画側の責任。
pub fn project_to_pixel_space(landmark: Landmark, width: u32, height: u32) -> (i32, i32) {
    let px = round_half_up(landmark.x * width as f64) as i32;
    let py = round_half_up(landmark.y * height as f64) as i32;
    (px, py)
}

/// 0.5 は常に +∞ 方向に丸める（-2.5 → -2, 2.5 → 3）
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    fn samples() -> Vec<Landmark> {
        vec![
            Landmark::new(0.0, 0.0, 0.0),
            Landmark::new(1.0, 2.0, 3.0),
            Landmark::new(-0.3, 0.7, -1.25),
            Landmark::new(0.12, -0.08, 0.05),
        ]
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        for &a in &samples() {
            assert_eq!(distance_3d(a, a), 0.0);
            for &b in &samples() {
                assert!((distance_3d(a, b) - distance_3d(b, a)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_distance_value() {
        let d = distance_3d(Landmark::new(0.0, 0.0, 0.0), Landmark::new(2.0, 3.0, 6.0));
        assert!((d - 7.0).abs() < EPS);
    }

    #[test]
    fn test_midpoint_commutative_and_identity() {
        for &a in &samples() {
            assert_eq!(midpoint(a, a), a);
            for &b in &samples() {
                assert_eq!(midpoint(a, b), midpoint(b, a));
            }
        }
        let m = midpoint(Landmark::new(0.0, 0.0, 0.0), Landmark::new(20.0, -4.0, 2.0));
        assert_eq!(m, Landmark::new(10.0, -2.0, 1.0));
    }

    #[test]
    fn test_vector_between_direction() {
        let a = Landmark::new(5.0, 30.0, 0.0);
        let b = Landmark::new(5.0, 0.0, 0.0);
        assert_eq!(vector_between(a, b), Vector3::new(0.0, 30.0, 0.0));
        assert_eq!(vector_between(b, a), Vector3::new(0.0, -30.0, 0.0));
    }

    #[test]
    fn test_angle_same_and_opposite() {
        let vs = [
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.2, 0.01, 0.7),
        ];
        for v in vs {
            assert!(angle_between(v, v).unwrap().abs() < 0.05);
            assert!((angle_between(v, -v).unwrap() - 180.0).abs() < 0.05);
        }
    }

    #[test]
    fn test_angle_right_angle() {
        let a = angle_between(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert!((a - 90.0).abs() < EPS);
    }

    #[test]
    fn test_angle_degenerate() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        assert!(matches!(
            angle_between(Vector3::ZERO, v),
            Err(GeometryError::DegenerateVector(_))
        ));
        assert!(matches!(
            angle_between(v, Vector3::ZERO),
            Err(GeometryError::DegenerateVector(_))
        ));
    }

    #[test]
    fn test_angle_never_nan() {
        // ほぼ平行なベクトルで cos が 1 をわずかに超えるケース
        let u = Vector3::new(0.1, 0.2, 0.3);
        let v = Vector3::new(0.1 * 3.0, 0.2 * 3.0, 0.3 * 3.0);
        let a = angle_between(u, v).unwrap();
        assert!(!a.is_nan());
        assert!(a.abs() < 0.05);
    }

    #[test]
    fn test_scale_coefficient() {
        let left = Landmark::new(0.0, 0.0, 0.0);
        let right = Landmark::new(20.0, 0.0, 0.0);
        assert_eq!(scale_coefficient(left, right, DEFAULT_REFERENCE_HIP_CM).unwrap(), 1.0);

        let left = Landmark::new(0.1, 0.0, 0.0);
        let right = Landmark::new(-0.1, 0.0, 0.0);
        let expected = DEFAULT_REFERENCE_HIP_CM / distance_3d(left, right);
        assert_eq!(scale_coefficient(left, right, DEFAULT_REFERENCE_HIP_CM).unwrap(), expected);
    }

    #[test]
    fn test_scale_coefficient_degenerate() {
        let hip = Landmark::new(0.3, 0.1, -0.2);
        assert!(matches!(
            scale_coefficient(hip, hip, DEFAULT_REFERENCE_HIP_CM),
            Err(GeometryError::DegenerateVector(_))
        ));
    }

    #[test]
    fn test_project_to_pixel_space() {
        let lm = Landmark::new(0.5, 0.25, 0.9);
        assert_eq!(project_to_pixel_space(lm, 640, 480), (320, 120));
    }

    #[test]
    fn test_project_out_of_range() {
        let lm = Landmark::new(-0.1, 1.5, 0.0);
        assert_eq!(project_to_pixel_space(lm, 100, 100), (-10, 150));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }
}
