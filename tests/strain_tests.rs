use drapery::strain::update_colors;
use drapery::{ClothConfig, ClothMesh};

fn single_edge_colors(length: f32, rest: f32) -> [f32; 4] {
    let points = [0.0f32, 0.0, 0.0, length, 0.0, 0.0];
    let edges = [0u32, 1];
    let rest_lengths = [rest];
    let mut colors = [0.0f32; 4];
    update_colors(&mut colors, &edges, &rest_lengths, &points);
    colors
}

#[test]
fn red_is_zero_at_rest_length() {
    assert_eq!(single_edge_colors(1.0, 1.0), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn red_saturates_at_double_rest_length() {
    // ratio 2 -> (2 - 1) * 10 clamps to 1.
    assert_eq!(single_edge_colors(2.0, 1.0), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn red_is_proportional_below_saturation() {
    // ratio 1.05 -> red 0.5.
    let colors = single_edge_colors(1.05, 1.0);
    assert!((colors[0] - 0.5).abs() < 1e-5);
}

#[test]
fn compression_stays_black() {
    // Ratios below 1 clamp to 0; only stretch is visualized.
    assert_eq!(single_edge_colors(0.5, 1.0), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn fresh_mesh_has_zero_strain() {
    let cloth = ClothMesh::new(&ClothConfig::<f32>::new(4)).unwrap();

    for rgba in cloth.edge_colors().chunks(4) {
        assert_eq!(rgba, &[0.0, 0.0, 0.0, 1.0]);
    }
}

#[test]
fn stretch_shows_up_after_a_step() {
    // Freeze the physics (zero stiffness) so the perturbation survives the
    // step, then check that edges touching the displaced point turn red.
    let config = ClothConfig::<f32>::new(2)
        .with_stiffness(0.0)
        .with_damping(0.0);
    let mut cloth = ClothMesh::new(&config).unwrap();

    let center = cloth.center_index();
    cloth.set_point_z(center, 2.0).unwrap();
    cloth.advance(0.001).unwrap();

    let colors = cloth.edge_colors();
    let edges = cloth.edge_indices();
    for e in 0..cloth.spring_count() {
        let touches_center = edges[e * 2] as usize == center || edges[e * 2 + 1] as usize == center;
        if touches_center {
            assert!(colors[e * 4] > 0.0, "edge {} should show strain", e);
        }
        assert_eq!(colors[e * 4 + 1], 0.0);
        assert_eq!(colors[e * 4 + 2], 0.0);
        assert_eq!(colors[e * 4 + 3], 1.0);
    }
}
