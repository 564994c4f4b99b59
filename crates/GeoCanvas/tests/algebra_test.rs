use geo_canvas::{CanvasError, Dimension, Matrix, Vector};

#[test]
fn test_vector_layout() {
    // Planar keeps (x, y, w); z is dropped.
    let v = Vector::point(3.0, 4.0, 99.0, Dimension::Planar);
    assert_eq!(v.as_slice(), &[3.0, 4.0, 1.0]);
    assert_eq!(v.z(), 0.0);
    assert_eq!(v.w(), 1.0);

    let s = Vector::point(3.0, 4.0, 5.0, Dimension::Spatial);
    assert_eq!(s.as_slice(), &[3.0, 4.0, 5.0, 1.0]);
    assert_eq!(s.z(), 5.0);

    let raw = Vector::new(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(raw.dimension(), Dimension::Planar);
    assert!(matches!(
        Vector::new(&[1.0, 2.0]),
        Err(CanvasError::InvalidLength {
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        Vector::new(&[0.0; 5]),
        Err(CanvasError::InvalidLength {
            expected: 4,
            found: 5
        })
    ));
}

#[test]
fn test_vector_index_errors() {
    let mut v = Vector::point(1.0, 2.0, 0.0, Dimension::Planar);
    assert_eq!(v.get(2).unwrap(), 1.0);
    assert!(matches!(
        v.get(3),
        Err(CanvasError::IndexOutOfRange { index: 3, .. })
    ));
    assert!(v.set(3, 7.0).is_err());

    v.set(0, 7.0).unwrap();
    assert_eq!(v.x(), 7.0);
}

#[test]
fn test_dot_dimension_mismatch() {
    let a = Vector::point(1.0, 2.0, 0.0, Dimension::Planar);
    let b = Vector::point(1.0, 2.0, 3.0, Dimension::Spatial);
    assert!(matches!(
        a.dot(&b),
        Err(CanvasError::DimensionMismatch { .. })
    ));

    // 1*3 + 2*4 + 1*1
    let c = Vector::point(3.0, 4.0, 0.0, Dimension::Planar);
    assert_eq!(a.dot(&c).unwrap(), 12.0);
}

#[test]
fn test_identity_is_neutral() {
    for dimension in [Dimension::Planar, Dimension::Spatial] {
        let v = Vector::homogeneous(2.5, -1.0, 4.0, 1.0, dimension);
        let id = Matrix::identity(dimension);
        assert_eq!(v * &id, v);
        assert!(id.is_identity(0.0));
    }
}

#[test]
fn test_matrix_product() {
    let a = Matrix::from_rows(&[
        Vector::new(&[1.0, 2.0, 0.0]).unwrap(),
        Vector::new(&[0.0, 1.0, 0.0]).unwrap(),
        Vector::new(&[0.0, 0.0, 1.0]).unwrap(),
    ])
    .unwrap();
    let b = Matrix::from_rows(&[
        Vector::new(&[2.0, 0.0, 0.0]).unwrap(),
        Vector::new(&[0.0, 3.0, 0.0]).unwrap(),
        Vector::new(&[5.0, 6.0, 1.0]).unwrap(),
    ])
    .unwrap();

    let ab = a.try_mul(&b).unwrap();
    assert_eq!(ab.row(0).unwrap().as_slice(), &[2.0, 6.0, 0.0]);
    assert_eq!(ab.row(1).unwrap().as_slice(), &[0.0, 3.0, 0.0]);
    assert_eq!(ab.row(2).unwrap().as_slice(), &[5.0, 6.0, 1.0]);

    // Row vectors: v × (A × B) == (v × A) × B
    let v = Vector::point(1.0, 1.0, 0.0, Dimension::Planar);
    assert_eq!(v * &ab, (v * &a) * &b);
}

#[test]
fn test_matrix_errors() {
    let planar = Matrix::identity(Dimension::Planar);
    let spatial = Matrix::identity(Dimension::Spatial);
    assert!(matches!(
        planar.try_mul(&spatial),
        Err(CanvasError::DimensionMismatch { .. })
    ));
    assert!(planar.get(3, 0).is_err());
    assert!(planar.row(3).is_err());

    // Rows must share one dimension and match their count.
    assert!(
        Matrix::from_rows(&[
            Vector::new(&[1.0, 0.0, 0.0]).unwrap(),
            Vector::new(&[0.0, 1.0, 0.0, 0.0]).unwrap(),
            Vector::new(&[0.0, 0.0, 1.0]).unwrap(),
        ])
        .is_err()
    );

    // Row count must match the dimension of the rows.
    let two_rows = [
        Vector::new(&[1.0, 0.0, 0.0]).unwrap(),
        Vector::new(&[0.0, 1.0, 0.0]).unwrap(),
    ];
    assert!(matches!(
        Matrix::from_rows(&two_rows),
        Err(CanvasError::InvalidLength {
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        Matrix::from_rows(&[]),
        Err(CanvasError::InvalidLength { found: 0, .. })
    ));

    let v = Vector::point(1.0, 2.0, 3.0, Dimension::Spatial);
    assert!(v.try_transform(&planar).is_err());
}

#[test]
fn test_transpose() {
    let mut m = Matrix::identity(Dimension::Planar);
    m.set(2, 0, 4.0).unwrap();
    let t = m.transpose();
    assert_eq!(t.get(0, 2).unwrap(), 4.0);
    assert_eq!(t.get(2, 0).unwrap(), 0.0);
}
