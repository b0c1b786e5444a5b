//! Simplices
//!
//! A k-simplex [v₀, ..., vₖ] is stored as its strictly increasing vertex
//! list. Simplices are ordered first by dimension and then
//! lexicographically by vertices; this order is total and is the
//! tie-break of every filtration order in the crate.

use std::cmp::Ordering;
use std::fmt;

/// A simplex represented by its sorted vertex indices
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Simplex {
    vertices: Vec<usize>,
}

impl Simplex {
    /// The 0-simplex [v]
    pub fn vertex(v: usize) -> Self {
        Self { vertices: vec![v] }
    }

    /// The 1-simplex on two distinct vertices, in either order
    pub fn edge(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "an edge needs two distinct vertices");
        let vertices = if a < b { vec![a, b] } else { vec![b, a] };
        Self { vertices }
    }

    /// Build from arbitrary vertices; sorts them and drops repeats
    ///
    /// Returns `None` for an empty vertex list.
    pub fn from_vertices(mut vertices: Vec<usize>) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        vertices.sort_unstable();
        vertices.dedup();
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Dimension = number of vertices - 1
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Face opposite the vertex at position `k`
    pub fn face(&self, k: usize) -> Simplex {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != k)
            .map(|(_, &v)| v)
            .collect();
        Simplex { vertices }
    }

    /// All codimension-one faces, in order of the removed position
    ///
    /// A vertex has no faces.
    pub fn boundary(&self) -> Vec<Simplex> {
        if self.dimension() == 0 {
            return Vec::new();
        }
        (0..self.vertices.len()).map(|k| self.face(k)).collect()
    }

    /// Simplex spanned by these vertices and `v`
    pub fn append_to(&self, v: usize) -> Simplex {
        let mut vertices = self.vertices.clone();
        match vertices.binary_search(&v) {
            Ok(_) => {}
            Err(pos) => vertices.insert(pos, v),
        }
        Simplex { vertices }
    }

    /// Whether every vertex of `self` is a vertex of `other`
    pub fn is_face_of(&self, other: &Simplex) -> bool {
        self.vertices
            .iter()
            .all(|v| other.vertices.binary_search(v).is_ok())
    }
}

impl Ord for Simplex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dimension()
            .cmp(&other.dimension())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Index<usize> for Simplex {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.vertices[index]
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_construction_sorts() {
        let s = Simplex::from_vertices(vec![4, 1, 3]).unwrap();
        assert_eq!(s.vertices(), &[1, 3, 4]);
        assert_eq!(s.dimension(), 2);
        assert_eq!(Simplex::edge(5, 2).vertices(), &[2, 5]);
        assert_eq!(s[0], 1);
    }

    #[test]
    fn test_boundary_faces() {
        for vertices in [vec![0, 1], vec![0, 2, 5], vec![1, 2, 3, 7], vec![0, 1, 2, 3, 4]] {
            let s = Simplex::from_vertices(vertices).unwrap();
            let boundary = s.boundary();
            let distinct: BTreeSet<_> = boundary.iter().cloned().collect();

            assert_eq!(boundary.len(), s.dimension() + 1);
            assert_eq!(distinct.len(), s.dimension() + 1);
            for face in &boundary {
                assert_eq!(face.dimension() + 1, s.dimension());
                assert!(face.is_face_of(&s));
            }
        }
        assert!(Simplex::vertex(3).boundary().is_empty());
    }

    #[test]
    fn test_face_removes_position() {
        let s = Simplex::from_vertices(vec![2, 4, 6]).unwrap();
        assert_eq!(s.face(0).vertices(), &[4, 6]);
        assert_eq!(s.face(1).vertices(), &[2, 6]);
        assert_eq!(s.face(2).vertices(), &[2, 4]);
    }

    #[test]
    fn test_append_to() {
        let s = Simplex::edge(1, 5).append_to(3);
        assert_eq!(s.vertices(), &[1, 3, 5]);
        assert_eq!(Simplex::vertex(2).append_to(0), Simplex::edge(0, 2));
    }

    #[test]
    fn test_ordering_dimension_first() {
        let v = Simplex::vertex(9);
        let e = Simplex::edge(0, 1);
        let t = Simplex::from_vertices(vec![0, 1, 2]).unwrap();

        assert!(v < e);
        assert!(e < t);
        assert!(Simplex::edge(0, 2) < Simplex::edge(1, 2));
        assert!(Simplex::edge(0, 1) < Simplex::edge(0, 2));
        assert_eq!(
            Simplex::edge(3, 4).cmp(&Simplex::edge(4, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_empty_vertex_list_is_rejected() {
        assert_eq!(Simplex::from_vertices(Vec::new()), None);
        assert_eq!(Simplex::from_vertices(vec![3, 3]), Some(Simplex::vertex(3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Simplex::from_vertices(vec![2, 0, 1]).unwrap().to_string(), "[0,1,2]");
    }
}
