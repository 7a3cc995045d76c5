use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed wireframe: unique vertices plus a line list over unique edges.
#[derive(Clone, Debug, Default)]
pub struct WireframeMesh {
    pub vertices: Vec<MeshVertex>,
    pub line_indices: Vec<u32>,
    pub triangle_count: usize,
}

impl WireframeMesh {
    pub fn edge_count(&self) -> usize {
        self.line_indices.len() / 2
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

// Integer barycentric weights over base corners; identical for a point no
// matter which face generated it.
type PointKey = [(u8, u32); 3];

fn point_key(corners: [usize; 3], weights: [u32; 3]) -> PointKey {
    let mut key = [(u8::MAX, 0u32); 3];
    for k in 0..3 {
        if weights[k] > 0 {
            key[k] = (corners[k] as u8, weights[k]);
        }
    }
    key.sort_unstable();
    key
}

/// Subdivided icosahedron projected onto a sphere of `radius`.
///
/// Each base face is split into `(detail + 1)^2` triangles, the same layout a
/// polyhedron geometry with `detail` subdivisions produces.
pub fn icosphere_wireframe(radius: f32, detail: u32) -> WireframeMesh {
    let corners = icosahedron_corners();
    let cols = detail + 1;
    let per_face = ((cols + 1) * (cols + 2) / 2) as usize;

    let mut lookup: FnvHashMap<PointKey, u32> = FnvHashMap::default();
    let mut vertices: Vec<MeshVertex> = Vec::new();
    let mut edges: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut triangle_count = 0usize;

    let mut intern = |face: [usize; 3], weights: [u32; 3], vertices: &mut Vec<MeshVertex>| {
        let key = point_key(face, weights);
        *lookup.entry(key).or_insert_with(|| {
            let p = (corners[face[0]] * weights[0] as f32
                + corners[face[1]] * weights[1] as f32
                + corners[face[2]] * weights[2] as f32)
                / cols as f32;
            let n = p.normalize();
            vertices.push(MeshVertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
            });
            (vertices.len() - 1) as u32
        })
    };

    let mut add_edge = |a: u32, b: u32| {
        edges.insert((a.min(b), a.max(b)));
    };

    for face in ICOSAHEDRON_FACES.iter() {
        // grid[i][j]: i steps from edge ab toward c, j steps from a toward b.
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(cols as usize + 1);
        for i in 0..=cols {
            let rows = cols - i;
            let mut row = Vec::with_capacity(rows as usize + 1);
            for j in 0..=rows {
                let weights = [rows - j, j, i];
                row.push(intern(*face, weights, &mut vertices));
            }
            grid.push(row);
        }
        debug_assert_eq!(grid.iter().map(Vec::len).sum::<usize>(), per_face);

        for i in 0..cols as usize {
            let rows = cols as usize - i;
            for j in 0..(2 * rows - 1) {
                let k = j / 2;
                let (a, b, c) = if j % 2 == 0 {
                    (grid[i][k + 1], grid[i + 1][k], grid[i][k])
                } else {
                    (grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k])
                };
                add_edge(a, b);
                add_edge(b, c);
                add_edge(c, a);
                triangle_count += 1;
            }
        }
    }

    let mut sorted: Vec<(u32, u32)> = edges.into_iter().collect();
    sorted.sort_unstable();
    let line_indices = sorted.into_iter().flat_map(|(a, b)| [a, b]).collect();

    WireframeMesh {
        vertices,
        line_indices,
        triangle_count,
    }
}
