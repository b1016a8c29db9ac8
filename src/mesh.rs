//! Pure geometry builders for the renderer: the centerpiece torus knot and
//! the wireframe box edges the grid squares are drawn with.

use glam::Vec3;

pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Point on the (p, q) torus-knot center curve at parameter `u`.
fn knot_curve_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * 0.5 * su,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tessellate a (p, q) torus knot into an indexed triangle mesh with smooth
/// normals. Vertex grid is (tubular + 1) x (radial + 1) with the seam rows
/// duplicated.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let vertex_count = ((tubular_segments + 1) * (radial_segments + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity((tubular_segments * radial_segments * 6) as usize);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * std::f32::consts::TAU;

        // Approximate the Frenet frame from two nearby curve points.
        let p1 = knot_curve_point(u, p, q, radius);
        let p2 = knot_curve_point(u + 0.01, p, q, radius);
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let bitangent = tangent.cross(normal).normalize();
        normal = bitangent.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();

            let pos = p1 + cx * normal + cy * bitangent;
            positions.push(pos);
            normals.push((pos - p1).normalize());
        }
    }

    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData {
        positions,
        normals,
        indices,
    }
}

/// Line-list vertices for the 12 edges of an axis-aligned box centered at
/// the origin: 24 points, two per edge.
pub fn box_edges(width: f32, height: f32, depth: f32) -> Vec<Vec3> {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut edges = Vec::with_capacity(24);

    // Four edges along each axis, indexed by the signs of the other two.
    for &sy in &[-1.0f32, 1.0] {
        for &sz in &[-1.0f32, 1.0] {
            edges.push(Vec3::new(-hw, sy * hh, sz * hd));
            edges.push(Vec3::new(hw, sy * hh, sz * hd));
        }
    }
    for &sx in &[-1.0f32, 1.0] {
        for &sz in &[-1.0f32, 1.0] {
            edges.push(Vec3::new(sx * hw, -hh, sz * hd));
            edges.push(Vec3::new(sx * hw, hh, sz * hd));
        }
    }
    for &sx in &[-1.0f32, 1.0] {
        for &sy in &[-1.0f32, 1.0] {
            edges.push(Vec3::new(sx * hw, sy * hh, -hd));
            edges.push(Vec3::new(sx * hw, sy * hh, hd));
        }
    }
    edges
}
