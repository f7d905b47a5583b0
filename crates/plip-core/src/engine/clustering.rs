use std::collections::HashMap;

/// Disjoint-set forest over the labels `0..n`, with union by rank and path
/// compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `i`. Panics if `i` is out of range.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `i` and `j`; returns `false` if they were already joined.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let (ri, rj) = (self.find(i), self.find(j));
        if ri == rj {
            return false;
        }
        match self.rank[ri].cmp(&self.rank[rj]) {
            std::cmp::Ordering::Less => self.parent[ri] = rj,
            std::cmp::Ordering::Greater => self.parent[rj] = ri,
            std::cmp::Ordering::Equal => {
                self.parent[rj] = ri;
                self.rank[ri] += 1;
            }
        }
        true
    }
}

/// Partitions the labels `0..n` into the connected components of `edges`.
///
/// Components touched by at least one edge come first, ordered by the first
/// edge that touches them; every untouched label then follows as a singleton
/// in ascending order. Labels inside a component are ascending. Edges must
/// only reference labels below `n`.
pub fn partition(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut sets = DisjointSet::new(n);
    for &(a, b) in edges {
        sets.union(a, b);
    }

    let mut touched = vec![false; n];
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    for &(a, b) in edges {
        touched[a] = true;
        touched[b] = true;
        let root = sets.find(a);
        let next = slot_of_root.len();
        slot_of_root.entry(root).or_insert(next);
    }

    let mut clusters = vec![Vec::new(); slot_of_root.len()];
    let mut singletons = Vec::new();
    for label in 0..n {
        if touched[label] {
            let root = sets.find(label);
            clusters[slot_of_root[&root]].push(label);
        } else {
            singletons.push(vec![label]);
        }
    }
    clusters.extend(singletons);
    clusters
}
