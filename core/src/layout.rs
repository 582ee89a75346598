use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthLevel {
    Base,
    Background,
    Content,
    Decoration,
    Overlay,
    Interactive,
    Floating,
    Tooltip,
}

impl DepthLevel {
    pub fn z_index(self) -> i32 {
        match self {
            DepthLevel::Base => 0,
            DepthLevel::Background => 5,
            DepthLevel::Content => 10,
            DepthLevel::Decoration => 15,
            DepthLevel::Overlay => 20,
            DepthLevel::Interactive => 30,
            DepthLevel::Floating => 40,
            DepthLevel::Tooltip => 50,
        }
    }
}

pub fn resolve_z_index(depth: DepthLevel, explicit: Option<i32>) -> i32 {
    explicit.unwrap_or_else(|| depth.z_index())
}

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ splitmix32(salt));
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

/// Placement of one collage item, in percent of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollagePlacement {
    pub x_pct: f32,
    pub y_pct: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub z_index: i32,
}

impl CollagePlacement {
    pub fn style(&self) -> String {
        format!(
            "position:absolute;left:{:.2}%;top:{:.2}%;z-index:{};transform:rotate({:.2}deg) scale({:.3});",
            self.x_pct, self.y_pct, self.z_index, self.rotation_deg, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub rotation: (f32, f32),
    pub scale: (f32, f32),
    pub seed: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            min_x: 5.0,
            max_x: 75.0,
            min_y: 5.0,
            max_y: 75.0,
            rotation: (-15.0, 15.0),
            scale: (0.9, 1.1),
            seed: 42,
        }
    }
}

pub fn scatter_layout(count: usize, config: &ScatterConfig) -> Vec<CollagePlacement> {
    (0..count)
        .map(|index| {
            let salt = (index as u32).wrapping_mul(4);
            CollagePlacement {
                x_pct: rand_range(config.seed, salt, config.min_x, config.max_x),
                y_pct: rand_range(config.seed, salt + 1, config.min_y, config.max_y),
                rotation_deg: rand_range(config.seed, salt + 2, config.rotation.0, config.rotation.1),
                scale: rand_range(config.seed, salt + 3, config.scale.0, config.scale.1),
                z_index: index as i32,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub gap_pct: f32,
    pub jitter: f32,
    pub seed: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            gap_pct: 5.0,
            jitter: 0.0,
            seed: 123,
        }
    }
}

pub fn grid_layout(count: usize, config: &GridConfig) -> Vec<CollagePlacement> {
    if count == 0 {
        return Vec::new();
    }
    let columns = config.columns.max(1);
    let rows = count.div_ceil(columns);
    let gap = config.gap_pct;
    let cell_width = (100.0 - gap * (columns as f32 + 1.0)) / columns as f32;
    let cell_height = (100.0 - gap * (rows as f32 + 1.0)) / rows as f32;
    (0..count)
        .map(|index| {
            let col = (index % columns) as f32;
            let row = (index / columns) as f32;
            let salt = (index as u32).wrapping_mul(3);
            let wobble = |k: u32| {
                if config.jitter > 0.0 {
                    rand_unit(config.seed, salt + k) - 0.5
                } else {
                    0.0
                }
            };
            CollagePlacement {
                x_pct: gap + col * (cell_width + gap) + wobble(0) * config.jitter * 2.0,
                y_pct: gap + row * (cell_height + gap) + wobble(1) * config.jitter * 2.0,
                rotation_deg: wobble(2) * config.jitter,
                scale: 1.0,
                z_index: index as i32,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TornEdge {
    Top,
    Right,
    Bottom,
    Left,
}

const TORN_DEPTH_MIN_PCT: f32 = 3.0;
const TORN_DEPTH_MAX_PCT: f32 = 9.0;

/// CSS `clip-path` polygon with a jagged, seeded tear along one edge.
pub fn torn_edge_clip_path(edge: TornEdge, seed: u32, teeth: usize) -> String {
    let teeth = teeth.max(2);
    let mut points = Vec::with_capacity(teeth + 3);
    for step in 0..=teeth {
        let along = step as f32 * 100.0 / teeth as f32;
        let depth = rand_range(seed, step as u32, TORN_DEPTH_MIN_PCT, TORN_DEPTH_MAX_PCT);
        points.push(match edge {
            TornEdge::Top => (along, depth),
            TornEdge::Bottom => (100.0 - along, 100.0 - depth),
            TornEdge::Left => (depth, 100.0 - along),
            TornEdge::Right => (100.0 - depth, along),
        });
    }
    let closing: [(f32, f32); 2] = match edge {
        TornEdge::Top => [(100.0, 100.0), (0.0, 100.0)],
        TornEdge::Bottom => [(0.0, 0.0), (100.0, 0.0)],
        TornEdge::Left => [(100.0, 0.0), (100.0, 100.0)],
        TornEdge::Right => [(0.0, 100.0), (0.0, 0.0)],
    };
    points.extend_from_slice(&closing);

    let mut path = String::from("polygon(");
    for (index, (x, y)) in points.iter().enumerate() {
        if index > 0 {
            path.push_str(", ");
        }
        let _ = write!(path, "{x:.1}% {y:.1}%");
    }
    path.push(')');
    path
}

/// Lightens or darkens a `#rrggbb` colour by `amount` per channel. Anything
/// that does not parse comes back unchanged.
pub fn shade_hex(hex: &str, amount: i32) -> String {
    let digits = hex.trim_start_matches('#');
    let Ok(value) = u32::from_str_radix(digits, 16) else {
        return hex.to_string();
    };
    if digits.len() != 6 {
        return hex.to_string();
    }
    let channel = |shift: u32| (((value >> shift) & 0xFF) as i32 + amount).clamp(0, 255) as u32;
    format!("#{:06x}", (channel(16) << 16) | (channel(8) << 8) | channel(0))
}

/// Scalloped ring for a lace doily as an SVG path: one quadratic curve per
/// petal, bulging out to `radius` between points at 85% of it.
pub fn doily_path(center: f32, radius: f32, petals: usize) -> String {
    let petals = petals.max(3);
    let step = std::f32::consts::TAU / petals as f32;
    let point = |angle: f32, reach: f32| {
        (
            center + angle.cos() * radius * reach,
            center + angle.sin() * radius * reach,
        )
    };
    let (start_x, start_y) = point(0.0, 0.85);
    let mut path = format!("M {start_x:.2} {start_y:.2}");
    for petal in 0..petals {
        let (cx, cy) = point((petal as f32 + 0.5) * step, 1.0);
        let (x, y) = point((petal as f32 + 1.0) * step, 0.85);
        let _ = write!(path, " Q {cx:.2} {cy:.2}, {x:.2} {y:.2}");
    }
    path.push_str(" Z");
    path
}
