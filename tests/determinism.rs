use drapery::{ClothConfig, ClothMesh, Vec3};

#[test]
fn cloth_deterministic() {
    let results: Vec<Vec<f32>> = (0..5)
        .map(|_| {
            let config = ClothConfig::<f32>::new(8)
                .with_gravity(Vec3::new(0.0, 0.0, -9.8));
            let mut cloth = ClothMesh::new(&config).unwrap();
            let center = cloth.center_index();
            for step in 0..120 {
                if step == 30 {
                    cloth.set_point_z(center, 0.1).unwrap();
                }
                cloth.advance(0.001).unwrap();
            }
            cloth.positions().to_vec()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a, b);
        }
    }
}
