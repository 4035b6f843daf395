use std::fmt::{Display, Formatter};

/// Position of an edge along the original line.
///
/// An edge built from the `i`-th segment of the line has the index `[i]`. When an edge is split, its `k`-th part gets
/// the index of the parent with `k` appended. Indices are compared lexicographically, so sorting edges by index
/// restores the order in which the original line visits them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(Vec<usize>);

impl EdgeIndex {
    /// Index of the `ordinal`-th segment of the line.
    pub fn segment(ordinal: usize) -> Self {
        Self(vec![ordinal])
    }

    /// Index of the `k`-th part of the edge with this index.
    pub fn child(&self, k: usize) -> Self {
        let mut parts = self.0.clone();
        parts.push(k);
        Self(parts)
    }

    /// Components of the index.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for EdgeIndex {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

impl Display for EdgeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_sort_between_parent_and_next_segment() {
        let mut indices = vec![
            EdgeIndex::segment(1),
            EdgeIndex::segment(0).child(1),
            EdgeIndex::segment(2),
            EdgeIndex::segment(0).child(0),
            EdgeIndex::segment(1).child(0).child(3),
        ];
        indices.sort();

        let slices: Vec<&[usize]> = indices.iter().map(EdgeIndex::as_slice).collect();
        assert_eq!(slices, vec![&[0, 0][..], &[0, 1], &[1], &[1, 0, 3], &[2]]);
        assert_eq!(EdgeIndex::segment(0).child(1).to_string(), "[0, 1]");
    }
}
