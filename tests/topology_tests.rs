use drapery::{ClothConfig, ClothError, ClothMesh};

#[test]
fn size_two_mesh_counts() {
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(2)).unwrap();

    assert_eq!(cloth.point_count(), 9);
    assert_eq!(cloth.triangle_count(), 8);
    assert_eq!(cloth.triangle_indices().len(), 24);
    assert_eq!(cloth.spring_count(), 16);
    assert_eq!(cloth.edge_indices().len(), 32);
}

#[test]
fn size_two_pinned_corners() {
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(2)).unwrap();

    for index in [0, 2, 6, 8] {
        assert!(cloth.is_pinned(index), "corner {} should be pinned", index);
    }
    for index in [1, 3, 4, 5, 7] {
        assert!(!cloth.is_pinned(index), "point {} should be free", index);
    }
}

#[test]
fn size_one_mesh_counts() {
    // A single cell is both last row and last column, so it closes its own
    // bottom and right boundary: top, diagonal, left, bottom, right.
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(1)).unwrap();

    assert_eq!(cloth.point_count(), 4);
    assert_eq!(cloth.triangle_count(), 2);
    assert_eq!(cloth.spring_count(), 5);
}

#[test]
fn size_one_all_corners_pinned() {
    // With 4 points the four corners are the whole mesh.
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(1)).unwrap();
    for index in 0..4 {
        assert!(cloth.is_pinned(index));
    }
}

#[test]
fn rejects_zero_grid_size() {
    let err = ClothMesh::new(&ClothConfig::<f32>::new(0)).unwrap_err();
    assert_eq!(err, ClothError::InvalidGridSize { size: 0 });
}

#[test]
fn rejects_non_finite_parameters() {
    let err = ClothMesh::new(&ClothConfig::<f32>::new(4).with_stiffness(f32::NAN)).unwrap_err();
    assert_eq!(err, ClothError::NonFiniteParameter { name: "stiffness" });

    let err = ClothMesh::new(&ClothConfig::<f32>::new(4).with_point_mass(f32::INFINITY)).unwrap_err();
    assert_eq!(err, ClothError::NonFiniteParameter { name: "point_mass" });
}

#[test]
fn rejects_damping_outside_unit_interval() {
    let err = ClothMesh::new(&ClothConfig::<f32>::new(4).with_damping(1.0)).unwrap_err();
    assert_eq!(err, ClothError::InvalidDamping);

    let err = ClothMesh::new(&ClothConfig::<f32>::new(4).with_damping(-0.1)).unwrap_err();
    assert_eq!(err, ClothError::InvalidDamping);
}

#[test]
fn points_span_the_bounds_row_major() {
    let cloth = ClothMesh::new(
        &ClothConfig::<f32>::new(2).with_bounds(-1.0, 1.0),
    )
    .unwrap();

    let pos = cloth.positions();
    assert_eq!(pos.len(), 27);

    // Row 0 sits at the top (y = max), column 0 at the left (x = min).
    assert_eq!(&pos[0..3], &[-1.0, 1.0, 0.0]); // point 0: top-left
    assert_eq!(&pos[6..9], &[1.0, 1.0, 0.0]); // point 2: top-right
    assert_eq!(&pos[12..15], &[0.0, 0.0, 0.0]); // point 4: center
    assert_eq!(&pos[24..27], &[1.0, -1.0, 0.0]); // point 8: bottom-right
}

#[test]
fn triangles_wind_per_cell() {
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(1)).unwrap();
    // One cell: corners a=0, b=1, c=2, d=3 -> (a,b,c) and (b,d,c).
    assert_eq!(cloth.triangle_indices(), &[0, 1, 2, 1, 3, 2]);
}

#[test]
fn edges_close_the_boundary_without_duplicates() {
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(1)).unwrap();
    // Top, diagonal, left, then bottom (last row) and right (last column).
    assert_eq!(cloth.edge_indices(), &[0, 1, 1, 2, 2, 0, 2, 3, 1, 3]);
}
