use nalgebra::{Point3, Unit, Vector3};

/// Point on a horizontal circle (in the xz-plane) around `center`.
/// The angle is in degrees, measured from +x towards +z.
pub fn circle_point(center: &Point3<f64>, radius: f64, degrees: f64) -> Point3<f64> {
    let theta = degrees.to_radians();
    center + Vector3::new(radius * theta.cos(), 0.0, radius * theta.sin())
}

/// Samples a horizontal circle every `step_degrees`, from 0 through 360 inclusive,
/// so the first and last points coincide and the polyline closes.
pub fn circle_points(center: &Point3<f64>, radius: f64, step_degrees: usize) -> Vec<Point3<f64>> {
    assert!(step_degrees > 0, "Step must be positive");
    (0..=360)
        .step_by(step_degrees)
        .map(|deg| circle_point(center, radius, deg as f64))
        .collect()
}

/// Intersects the ray `origin + t * dir` with a sphere, returning the smallest
/// non-negative `t`. If the origin is inside the sphere, the exit point is returned.
pub fn ray_sphere_intersection(
    origin: &Point3<f64>,
    dir: &Unit<Vector3<f64>>,
    center: &Point3<f64>,
    radius: f64,
) -> Option<f64> {
    // |o + t d - c|^2 = r^2, with |d| = 1
    let oc = origin - center;
    let b = oc.dot(dir.as_ref());
    let c = oc.norm_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let (near, far) = (-b - sqrt_disc, -b + sqrt_disc);
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Converts a camera "forward" direction into the eye position that looks at the origin
/// from `distance` away.
pub fn eye_from_forward(forward: &Vector3<f64>, distance: f64) -> Point3<f64> {
    Point3::from(-forward.normalize() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_circle_point_quadrants() {
        let center = Point3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(circle_point(&center, 2.0, 0.0), Point3::new(3.0, 2.0, 3.0));
        assert_relative_eq!(
            circle_point(&center, 2.0, 90.0),
            Point3::new(1.0, 2.0, 5.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            circle_point(&center, 2.0, 180.0),
            Point3::new(-1.0, 2.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_circle_points_closed() {
        let center = Point3::origin();
        let points = circle_points(&center, 5.0, 10);
        assert_eq!(points.len(), 37);
        assert_relative_eq!(points[0], points[36], epsilon = 1e-12);
        for p in points.iter() {
            assert_relative_eq!(p.coords.norm(), 5.0, epsilon = 1e-12);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_ray_sphere_hit_and_miss() {
        let origin = Point3::new(-10.0, 0.0, 0.0);
        let dir = Vector3::x_axis();

        let t = ray_sphere_intersection(&origin, &dir, &Point3::origin(), 2.0);
        assert_relative_eq!(t.unwrap(), 8.0);

        let t = ray_sphere_intersection(&origin, &dir, &Point3::new(0.0, 3.0, 0.0), 2.0);
        assert_eq!(t, None);

        // Sphere behind the origin
        let t = ray_sphere_intersection(&origin, &dir, &Point3::new(-20.0, 0.0, 0.0), 2.0);
        assert_eq!(t, None);

        // Origin inside the sphere
        let t = ray_sphere_intersection(&Point3::origin(), &dir, &Point3::origin(), 2.0);
        assert_relative_eq!(t.unwrap(), 2.0);
    }

    #[test]
    fn test_eye_from_forward() {
        let eye = eye_from_forward(&Vector3::new(-1.0, -1.0, -1.0), 3.0_f64.sqrt());
        assert_relative_eq!(eye, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }
}
