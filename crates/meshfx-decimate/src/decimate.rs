//! Core mesh decimation algorithm.
//!
//! Implements edge collapse with quadric error metrics (QEM).

// Mesh indices and counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Algorithm uses standard mathematical variable names
#![allow(clippy::many_single_char_names)]

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use meshfx_types::{Point3, TriangleMesh};
use tracing::{debug, info};

use crate::params::DecimateParams;
use crate::quadric::Quadric;
use crate::result::DecimationResult;

/// An edge collapse candidate in the priority queue.
#[derive(Debug, Clone)]
struct EdgeCollapse {
    /// The two vertex indices forming the edge.
    v1: u32,
    v2: u32,
    /// The error cost of this collapse.
    cost: f64,
    /// The position the merged vertex will take.
    optimal_pos: Point3<f64>,
}

impl PartialEq for EdgeCollapse {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for EdgeCollapse {}

impl PartialOrd for EdgeCollapse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCollapse {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the cheapest collapse first
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// Decimates a mesh by edge collapse with quadric error metrics.
///
/// Runs until the live face count reaches the target implied by `params`,
/// or until no valid collapse remains. Total function: empty meshes and
/// meshes already at or below the target are returned unchanged.
///
/// # Example
///
/// ```
/// use meshfx_types::unit_cube;
/// use meshfx_decimate::{decimate_mesh, DecimateParams};
///
/// let cube = unit_cube();
/// let result = decimate_mesh(&cube, &DecimateParams::with_target_ratio(0.5));
/// println!("{result}");
/// ```
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn decimate_mesh(mesh: &TriangleMesh, params: &DecimateParams) -> DecimationResult {
    let original_triangles = mesh.faces.len();

    if original_triangles == 0 {
        return DecimationResult {
            mesh: mesh.clone(),
            original_triangles: 0,
            final_triangles: 0,
            collapses_performed: 0,
            collapses_rejected: 0,
        };
    }

    let target = params
        .target_triangles
        .unwrap_or_else(|| ((original_triangles as f64) * params.target_ratio).ceil() as usize);

    if original_triangles <= target {
        return DecimationResult {
            mesh: mesh.clone(),
            original_triangles,
            final_triangles: original_triangles,
            collapses_performed: 0,
            collapses_rejected: 0,
        };
    }

    info!(
        original = original_triangles,
        target, "Starting mesh decimation"
    );

    // Working copies; collapsed entries become None
    let mut vertices: Vec<Option<Point3<f64>>> = mesh.vertices.iter().copied().map(Some).collect();
    let mut faces: Vec<Option<[u32; 3]>> = mesh.faces.iter().copied().map(Some).collect();
    let mut active_faces = original_triangles;

    let edge_counts = edge_face_counts(&mesh.faces);
    let mut quadrics = vertex_quadrics(mesh);
    let boundary_edges = boundary_edges(&edge_counts);

    let mut heap = initial_queue(mesh, &quadrics, &boundary_edges, params);

    // Maps collapsed vertex index -> surviving vertex index
    let mut vertex_remap: HashMap<u32, u32> = HashMap::new();

    let mut collapses_performed = 0;
    let mut collapses_rejected = 0;

    while active_faces > target {
        let Some(collapse) = heap.pop() else {
            break;
        };

        let v1 = resolve_vertex(collapse.v1, &vertex_remap);
        let v2 = resolve_vertex(collapse.v2, &vertex_remap);

        // Stale queue entry: an endpoint was merged away after queuing
        if v1 == v2 || vertices[v1 as usize].is_none() || vertices[v2 as usize].is_none() {
            continue;
        }

        if params.preserve_boundary && boundary_edges.contains(&normalize_edge(v1, v2)) {
            collapses_rejected += 1;
            continue;
        }

        if !is_collapse_valid(&vertices, &faces, v1, v2) {
            collapses_rejected += 1;
            continue;
        }

        // Merge v2 into v1 at the queued position
        vertices[v1 as usize] = Some(collapse.optimal_pos);
        let q2 = quadrics[v2 as usize];
        quadrics[v1 as usize] += q2;
        vertices[v2 as usize] = None;
        vertex_remap.insert(v2, v1);

        // Rewrite faces and drop the ones the collapse degenerated
        for face_opt in &mut faces {
            if let Some(face) = face_opt {
                for index in face.iter_mut() {
                    *index = resolve_vertex(*index, &vertex_remap);
                }
                if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                    *face_opt = None;
                    active_faces -= 1;
                }
            }
        }

        collapses_performed += 1;

        requeue_around(
            v1,
            &vertices,
            &faces,
            &quadrics,
            &boundary_edges,
            params,
            &mut heap,
        );
    }

    let final_mesh = rebuild_mesh(&vertices, &faces);

    info!(
        final_triangles = active_faces,
        collapses = collapses_performed,
        "Decimation complete"
    );

    DecimationResult {
        mesh: final_mesh,
        original_triangles,
        final_triangles: active_faces,
        collapses_performed,
        collapses_rejected,
    }
}

// ============================================================================
// Internal helper functions
// ============================================================================

const fn normalize_edge(v1: u32, v2: u32) -> (u32, u32) {
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Follows the remap chain to the surviving vertex.
fn resolve_vertex(mut v: u32, remap: &HashMap<u32, u32>) -> u32 {
    while let Some(&next) = remap.get(&v) {
        v = next;
    }
    v
}

/// Counts adjacent faces per undirected edge.
fn edge_face_counts(faces: &[[u32; 3]]) -> HashMap<(u32, u32), u32> {
    let mut counts: HashMap<(u32, u32), u32> = HashMap::new();
    for face in faces {
        for i in 0..3 {
            let edge = normalize_edge(face[i], face[(i + 1) % 3]);
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// Edges with exactly one adjacent face.
fn boundary_edges(edge_counts: &HashMap<(u32, u32), u32>) -> HashSet<(u32, u32)> {
    edge_counts
        .iter()
        .filter(|(_, &count)| count == 1)
        .map(|(&edge, _)| edge)
        .collect()
}

/// Accumulates each face's plane quadric onto its three corners.
fn vertex_quadrics(mesh: &TriangleMesh) -> Vec<Quadric> {
    let mut quadrics = vec![Quadric::default(); mesh.vertices.len()];

    for face in &mesh.faces {
        let v0 = mesh.vertices[face[0] as usize];
        let v1 = mesh.vertices[face[1] as usize];
        let v2 = mesh.vertices[face[2] as usize];

        // Degenerate faces contribute no plane
        let Some(normal) = (v1 - v0).cross(&(v2 - v0)).try_normalize(1e-10) else {
            continue;
        };
        let d = -normal.dot(&v0.coords);
        let q = Quadric::from_plane(normal, d);

        for &vi in face {
            quadrics[vi as usize] += q;
        }
    }

    quadrics
}

/// Scores one edge; `None` when the edge is protected by
/// `preserve_boundary`.
fn collapse_candidate(
    v1: u32,
    v2: u32,
    pos1: Point3<f64>,
    pos2: Point3<f64>,
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
) -> Option<EdgeCollapse> {
    let edge = normalize_edge(v1, v2);

    if params.preserve_boundary && boundary_edges.contains(&edge) {
        return None;
    }

    let mut combined = quadrics[v1 as usize];
    combined += quadrics[v2 as usize];

    // Fall back to the midpoint when the quadric is singular
    let midpoint = nalgebra::center(&pos1, &pos2);
    let optimal_pos = combined.optimal_point().unwrap_or(midpoint);
    let mut cost = combined.evaluate(optimal_pos);

    if boundary_edges.contains(&edge) {
        cost *= params.boundary_penalty;
    }

    Some(EdgeCollapse {
        v1,
        v2,
        cost,
        optimal_pos,
    })
}

/// Queues every unique edge of the input mesh.
fn initial_queue(
    mesh: &TriangleMesh,
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
) -> BinaryHeap<EdgeCollapse> {
    let mut heap = BinaryHeap::new();
    let mut seen = HashSet::new();

    for face in &mesh.faces {
        for i in 0..3 {
            let v1 = face[i];
            let v2 = face[(i + 1) % 3];
            if !seen.insert(normalize_edge(v1, v2)) {
                continue;
            }

            let pos1 = mesh.vertices[v1 as usize];
            let pos2 = mesh.vertices[v2 as usize];
            if let Some(candidate) =
                collapse_candidate(v1, v2, pos1, pos2, quadrics, boundary_edges, params)
            {
                heap.push(candidate);
            }
        }
    }

    heap
}

/// Link condition: a collapse keeps the surface manifold only if the edge's
/// endpoints share at most the two vertices of their common triangles.
fn is_collapse_valid(
    vertices: &[Option<Point3<f64>>],
    faces: &[Option<[u32; 3]>],
    v1: u32,
    v2: u32,
) -> bool {
    let mut v1_neighbors: HashSet<u32> = HashSet::new();
    let mut v2_neighbors: HashSet<u32> = HashSet::new();

    for face in faces.iter().flatten() {
        let has_v1 = face.contains(&v1);
        let has_v2 = face.contains(&v2);

        if has_v1 {
            for &vi in face {
                if vi != v1 && vi != v2 && vertices[vi as usize].is_some() {
                    v1_neighbors.insert(vi);
                }
            }
        }

        if has_v2 {
            for &vi in face {
                if vi != v1 && vi != v2 && vertices[vi as usize].is_some() {
                    v2_neighbors.insert(vi);
                }
            }
        }
    }

    v1_neighbors.intersection(&v2_neighbors).count() <= 2
}

/// Re-queues every live edge around a merged vertex with fresh costs.
fn requeue_around(
    v1: u32,
    vertices: &[Option<Point3<f64>>],
    faces: &[Option<[u32; 3]>],
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
    heap: &mut BinaryHeap<EdgeCollapse>,
) {
    let Some(pos1) = vertices[v1 as usize] else {
        return;
    };

    let mut neighbors: HashSet<u32> = HashSet::new();
    for face in faces.iter().flatten() {
        if face.contains(&v1) {
            for &vi in face {
                if vi != v1 && vertices[vi as usize].is_some() {
                    neighbors.insert(vi);
                }
            }
        }
    }

    for &v2 in &neighbors {
        let Some(pos2) = vertices[v2 as usize] else {
            continue;
        };
        if let Some(candidate) =
            collapse_candidate(v1, v2, pos1, pos2, quadrics, boundary_edges, params)
        {
            heap.push(candidate);
        }
    }
}

/// Compacts the surviving vertices and faces into a fresh mesh.
fn rebuild_mesh(vertices: &[Option<Point3<f64>>], faces: &[Option<[u32; 3]>]) -> TriangleMesh {
    let mut vertex_remap: HashMap<u32, u32> = HashMap::new();
    let mut new_vertices = Vec::new();

    for (old_index, vertex) in vertices.iter().enumerate() {
        if let Some(position) = vertex {
            vertex_remap.insert(old_index as u32, new_vertices.len() as u32);
            new_vertices.push(*position);
        }
    }

    let mut new_faces = Vec::new();
    for face in faces.iter().flatten() {
        if let (Some(&i0), Some(&i1), Some(&i2)) = (
            vertex_remap.get(&face[0]),
            vertex_remap.get(&face[1]),
            vertex_remap.get(&face[2]),
        ) {
            new_faces.push([i0, i1, i2]);
        }
    }

    debug!(
        vertices = new_vertices.len(),
        faces = new_faces.len(),
        "Built final decimated mesh"
    );

    TriangleMesh {
        vertices: new_vertices,
        faces: new_faces,
    }
}
