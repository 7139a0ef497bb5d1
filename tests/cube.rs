#[cfg(test)]
mod tests {
    use ctdiag::io::cube;

    #[test]
    fn cube_read() {
        let cube = match cube::read("tests/cube/water_ground.cube") {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(cube.atoms, 3);
        assert_eq!(cube.grid.origin, [-1.4, -1.2, -1.6]);
        assert_eq!(cube.grid.shape(), [8, 7, 9]);
        assert_eq!(cube.grid.spacing,
                   [[0.4, 0., 0.], [0., 0.4, 0.], [0., 0., 0.4]]);
        assert_eq!(cube.density.data()[0], 2.62093E-04);
        assert_eq!(cube.density.data()[503], 1.38566E-02);
    }

    #[test]
    fn cube_read_shape() {
        for filename in ["tests/cube/water_excited.cube",
                         "tests/cube/point_excited.cube",
                         "tests/cube/point_3x3x3.cube"]
        {
            let cube = cube::read(filename).unwrap();
            assert_eq!(cube.density.shape(), cube.grid.shape());
            assert_eq!(cube.density.len(),
                       cube.grid.shape().iter().product::<usize>());
        }
    }

    #[test]
    fn cube_read_row_major() {
        let cube = cube::read("tests/cube/water_excited.cube").unwrap();
        // 250 = (3 * 7 + 6) * 9 + 7
        assert_eq!(cube.density.get([3, 6, 7]), 2.29104E-02);
        assert_eq!(cube.density.data()[250], 2.29104E-02);
        assert_eq!(cube.grid.to_3d(250), [3, 6, 7]);
    }

    #[test]
    fn cube_read_point() {
        let cube = cube::read("tests/cube/point_excited.cube").unwrap();
        assert_eq!(cube.density.get([1, 1, 1]), 1.);
        assert_eq!(cube.density.sum(), 1.);
    }
}
