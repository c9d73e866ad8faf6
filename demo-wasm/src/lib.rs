use lash::{presets, Chain, TileGrid, Vec2};
use wasm_bindgen::prelude::*;

// ---- Whip Demo ----

#[wasm_bindgen]
pub struct WhipDemo {
    chain: Chain<f32>,
    tick: u64,
}

#[wasm_bindgen]
impl WhipDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Self {
        WhipDemo {
            chain: presets::whip(Vec2::new(300.0f32, 80.0), segments, 12.0),
            tick: 0,
        }
    }

    pub fn update(&mut self) {
        self.chain.update(self.tick);
        self.tick += 1;
    }

    /// Drag the handle to the pointer; the rest of the whip follows.
    pub fn move_handle(&mut self, x: f32, y: f32) {
        self.chain.set_start_anchor(Vec2::new(x, y));
    }

    /// Snap the tip toward the pointer for a crack.
    pub fn crack(&mut self, x: f32, y: f32) {
        let tip = self.chain.tip_position();
        let toward = (Vec2::new(x, y) - tip).normalize_or(Vec2::new(0.0, -1.0));
        self.chain.apply_impulse(self.chain.len() - 1, toward.scale(40.0));
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.chain.positions())
    }

    /// Returns per-particle sprite angles in radians
    pub fn rotations(&self) -> Vec<f32> {
        self.chain.segment_rotations()
    }

    pub fn particle_count(&self) -> usize {
        self.chain.len()
    }
}

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    chain: Chain<f32>,
    grid: TileGrid<f32>,
    floor_row: i32,
    tick: u64,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Self {
        RopeDemo {
            chain: presets::rope(Vec2::new(100.0f32, 50.0), Vec2::new(500.0, 50.0), segments),
            grid: TileGrid::new(16.0),
            floor_row: 28, // y = 448 at 16px cells
            tick: 0,
        }
    }

    pub fn update(&mut self) {
        self.chain.update(self.tick);
        let floor = self.floor_row;
        self.chain.apply_tile_collision(&self.grid, |_, y| y >= floor);
        self.tick += 1;
    }

    pub fn move_start(&mut self, x: f32, y: f32) {
        self.chain.set_start_anchor(Vec2::new(x, y));
    }

    pub fn explode(&mut self, x: f32, y: f32) {
        self.chain.apply_explosion_force(Vec2::new(x, y), 25.0, 120.0);
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.chain.positions())
    }

    pub fn particle_count(&self) -> usize {
        self.chain.len()
    }
}

// ---- Lightning Demo ----

#[wasm_bindgen]
pub struct LightningDemo {
    chain: Chain<f32>,
    tick: u64,
}

#[wasm_bindgen]
impl LightningDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Self {
        LightningDemo {
            chain: presets::lightning(Vec2::new(80.0f32, 240.0), Vec2::new(560.0, 240.0), segments),
            tick: 0,
        }
    }

    pub fn update(&mut self) {
        // Random-looking jitter driven by the arc's own tick keeps the
        // bolt alive while the anchors hold both ends.
        if self.tick % 4 == 0 {
            let along = 80.0 + (self.tick % 29) as f32 * 16.0;
            self.chain.apply_explosion_force(Vec2::new(along, 255.0), 8.0, 60.0);
        }
        self.chain.update(self.tick);
        self.tick += 1;
    }

    pub fn move_end(&mut self, x: f32, y: f32) {
        self.chain.set_end_anchor(Vec2::new(x, y));
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.chain.positions())
    }

    pub fn particle_count(&self) -> usize {
        self.chain.len()
    }
}

fn flatten(points: &[Vec2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}
