//! # UnionFind
//! Disjoint sets over the elements `0..n`, with path compression and union by rank.
//! For `m` operations on `n` elements the total cost is `O(m α(n))`, effectively linear.
//!
//! Indices outside `0..n` panic, the same as slice indexing.

use tracing::trace;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    // 子树高度的上界
    rank: Vec<u8>,
    // 只对根有效
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            sets: n,
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Takes `&mut self` because every call points the visited nodes straight at the
    /// root, which is what keeps repeated lookups cheap.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 路径压缩
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Unites the sets of `x` and `y`. Returns `false` if they were already one set.
    pub fn merge(&mut self, x: usize, y: usize) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }

        // 保证 y 是较高的树, 等高时 y 的高度加 1
        if self.rank[x] == self.rank[y] {
            self.rank[y] += 1;
        } else if self.rank[x] > self.rank[y] {
            std::mem::swap(&mut x, &mut y);
        }

        self.parent[x] = y;
        self.size[y] += self.size[x];
        self.sets -= 1;
        trace!(child = x, root = y, size = self.size[y], "merged sets");
        true
    }

    pub fn is_same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing `x`.
    pub fn part_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Total number of elements.
    pub fn whole_size(&self) -> usize {
        self.parent.len()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[test]
fn test_merge() {
    let mut uf = UnionFind::new(5);
    assert!(uf.merge(0, 1));
    assert!(!uf.merge(0, 1));
    assert!(!uf.merge(1, 0));
    assert_eq!(uf.part_size(0), 2);
    assert_eq!(uf.part_size(1), 2);
    assert_eq!(uf.part_size(4), 1);
    assert_eq!(uf.find(0), uf.find(1));
    assert_ne!(uf.find(0), uf.find(2));
    assert_eq!(uf.whole_size(), 5);
    assert_eq!(uf.set_count(), 4);
}

#[test]
fn test_chain() {
    let n = 1000;
    let mut uf = UnionFind::new(n);
    for i in 1..n {
        assert!(uf.merge(i - 1, i));
    }
    assert_eq!(uf.set_count(), 1);
    assert_eq!(uf.part_size(n / 2), n);
    let root = uf.find(0);
    assert!((0..n).all(|i| uf.find(i) == root));
    // 压缩后每个节点都直接指向根
    assert!(uf.parent.iter().all(|p| *p == root));
}

#[test]
fn test_union_by_rank() {
    let mut uf = UnionFind::new(8);
    for (x, y) in [(0, 1), (2, 3), (0, 2), (4, 5), (6, 7), (4, 6), (0, 4)] {
        assert!(uf.merge(x, y));
    }
    // 8 个元素两两合并, 树高不超过 log2(8)
    assert!(uf.rank.iter().all(|r| *r <= 3));
    assert_eq!(uf.part_size(7), 8);
    assert!(uf.is_same(1, 6));
}

#[test]
fn test_empty() {
    let uf = UnionFind::new(0);
    assert_eq!(uf.whole_size(), 0);
    assert_eq!(uf.set_count(), 0);
}

#[test]
#[should_panic]
fn test_out_of_range() {
    let mut uf = UnionFind::new(3);
    uf.find(3);
}
