//! Topology analysis: lamina faces and UV shells.

use std::collections::HashMap;

/// Undirected edge set of a face, sorted, as a grouping key
fn edge_key(face: &[u32]) -> Option<Vec<(u32, u32)>> {
    let mut distinct = face.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 3 {
        return None;
    }

    let mut edges: Vec<(u32, u32)> = face
        .iter()
        .zip(face.iter().cycle().skip(1))
        .map(|(&a, &b)| if a < b { (a, b) } else { (b, a) })
        .filter(|(a, b)| a != b)
        .collect();
    edges.sort_unstable();
    edges.dedup();
    Some(edges)
}

/// Faces sharing all of their edges with at least one other face
///
/// Returns every member of each such group, ascending. Degenerate faces
/// (fewer than three distinct vertices) are ignored.
#[must_use]
pub fn lamina_faces(faces: &[Vec<u32>]) -> Vec<usize> {
    let mut groups: HashMap<Vec<(u32, u32)>, Vec<usize>> = HashMap::new();
    for (index, face) in faces.iter().enumerate() {
        if let Some(key) = edge_key(face) {
            groups.entry(key).or_default().push(index);
        }
    }

    let mut lamina: Vec<usize> =
        groups.into_values().filter(|g| g.len() > 1).flatten().collect();
    lamina.sort_unstable();
    lamina
}

/// Union-find over UV indices
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            },
        }
    }
}

/// Number of connected UV regions
///
/// UVs are connected when they belong to the same UV face. UVs not used by any
/// face do not form shells. Out-of-range indices are skipped.
#[must_use]
pub fn uv_shell_count(face_uvs: &[Vec<u32>], uv_count: usize) -> usize {
    let mut set = DisjointSet::new(uv_count);
    let mut used = vec![false; uv_count];

    for face in face_uvs {
        let indices: Vec<usize> =
            face.iter().map(|&i| i as usize).filter(|&i| i < uv_count).collect();
        for &i in &indices {
            used[i] = true;
        }
        for pair in indices.windows(2) {
            set.union(pair[0], pair[1]);
        }
    }

    let mut roots: Vec<usize> = (0..uv_count).filter(|&i| used[i]).map(|i| set.find(i)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}
