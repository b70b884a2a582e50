use drapery::{ClothConfig, ClothMesh, Vec3};
use wasm_bindgen::prelude::*;

const GRAVITY: Vec3<f32> = Vec3 { x: 0.0, y: 0.0, z: -9.8 };

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothMesh<f32>,
    movement: bool,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<ClothDemo, JsError> {
        let config = ClothConfig::new(size).with_gravity(GRAVITY);
        let cloth = ClothMesh::new(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo {
            cloth,
            movement: true,
        })
    }

    /// Advance the simulation. `now` is elapsed time in seconds; when the
    /// movement flag is on, the center point's z follows `sin(now * 3) / 10`
    /// before the step.
    pub fn update(&mut self, dt: f32, now: f32) {
        if self.movement {
            let center = self.cloth.center_index();
            let _ = self.cloth.set_point_z(center, (now * 3.0).sin() / 10.0);
        }
        if dt > 0.0 {
            let _ = self.cloth.advance(dt);
        }
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.cloth
            .set_gravity(if enabled { GRAVITY } else { Vec3::zero() });
    }

    pub fn set_movement(&mut self, enabled: bool) {
        self.movement = enabled;
    }

    /// Flat [x0, y0, z0, x1, y1, z1, ...] positions in row-major order.
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.positions().to_vec()
    }

    /// Index buffer for shaded triangle rendering.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.cloth.triangle_indices().to_vec()
    }

    /// Index buffer for wireframe line rendering.
    pub fn line_indices(&self) -> Vec<u32> {
        self.cloth.edge_indices().to_vec()
    }

    /// Flat [r, g, b, a, ...] strain colors, one per line.
    pub fn line_colors(&self) -> Vec<f32> {
        self.cloth.edge_colors().to_vec()
    }

    pub fn point_count(&self) -> usize {
        self.cloth.point_count()
    }

    pub fn line_count(&self) -> usize {
        self.cloth.spring_count()
    }

    pub fn size(&self) -> usize {
        self.cloth.grid_size()
    }
}
