/// compute the difference between two vectors, a - b
pub fn subtract(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// compute the dot product between two vectors
pub fn vdot(a: [f64; 3], b: [f64; 3]) -> f64 {
    let mut out = 0f64;
    for i in 0..3 {
        out += a[i] * b[i]
    }
    out
}

/// compute the norm of a vector
pub fn norm(a: [f64; 3]) -> f64 {
    vdot(a, a).sqrt()
}

/// the largest absolute off-diagonal element of a matrix
pub fn max_off_diagonal(m: &[[f64; 3]; 3]) -> f64 {
    let mut out = 0f64;
    for (i, row) in m.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            if i != j {
                out = out.max(v.abs());
            }
        }
    }
    out
}

/// checks two values agree within a relative tolerance
pub fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utils_subtract() {
        assert_eq!(subtract([1., 2., 3.], [3., 2., 1.]), [-2., 0., 2.])
    }

    #[test]
    fn utils_vdot() {
        assert_eq!(vdot([1., 2., 3.], [1., 2., 3.]), 14.)
    }

    #[test]
    fn utils_norm() {
        assert_eq!(norm([3., 4., 12.]), 13.)
    }

    #[test]
    fn utils_max_off_diagonal() {
        let matrix = [[3., 0., 0.], [-2.5, 2., 0.], [0., 0.5, 5.]];
        assert_eq!(max_off_diagonal(&matrix), 2.5)
    }

    #[test]
    fn utils_max_off_diagonal_diagonal() {
        let matrix = [[3., 0., 0.], [0., 2., 0.], [0., 0., 5.]];
        assert_eq!(max_off_diagonal(&matrix), 0.)
    }

    #[test]
    fn utils_close() {
        assert!(close(1.0, 1.0 + 1E-9, 1E-6));
        assert!(!close(1.0, 1.1, 1E-6));
        assert!(close(0.0, 1E-9, 1E-6));
    }
}
