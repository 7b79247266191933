use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

////////////////////////////////////////////////////////////////////////////////

/// Disjoint-set forest over ids `0..len` (weighted quick-union with
/// path compression).
///
/// `find` and `union` run in amortized O(α(len)).
///
/// # Panics
///
/// Every method taking an id panics if the id is `>= len()`, the same way
/// slice indexing does.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the number of ids.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the canonical representative of the set containing `x`.
    /// Every node on the way up is re-linked directly to the root.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.root(x);

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`, hanging the smaller tree
    /// under the root of the larger one.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;

        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of ids in the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Iterates over `(node, parent)` pointers as they are stored right now.
    /// Roots point at themselves.
    pub fn parents(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent.iter().copied().enumerate()
    }

    /// Groups all ids by their representative. Members are ascending.
    pub fn components(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for node in 0..self.len() {
            components.entry(self.root(node)).or_default().push(node);
        }
        components
    }

    /// Returns a printable view of the parent array and of every tree.
    pub fn forest(&self) -> Forest<'_> {
        Forest(self)
    }

    /// Walks up to the representative of `x` without touching any pointer.
    pub(crate) fn root(&self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Text dump of a [`UnionFind`]: the parent row, the child row, every tree
/// indented by depth, and the connected components.
pub struct Forest<'a>(&'a UnionFind);

impl Forest<'_> {
    fn write_tree(
        f: &mut fmt::Formatter<'_>,
        children: &[Vec<usize>],
        node: usize,
        depth: usize,
    ) -> fmt::Result {
        writeln!(f, "{:indent$}{node}", "", indent = depth * 2)?;
        for &child in &children[node] {
            Self::write_tree(f, children, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Display for Forest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uf = self.0;

        write!(f, "node parent:")?;
        for (_, parent) in uf.parents() {
            write!(f, " {parent}")?;
        }
        writeln!(f)?;
        write!(f, "child node: ")?;
        for (node, _) in uf.parents() {
            write!(f, " {node}")?;
        }
        writeln!(f)?;

        let mut children = vec![Vec::new(); uf.len()];
        for (node, parent) in uf.parents().filter(|(node, parent)| node != parent) {
            children[parent].push(node);
        }
        for (root, _) in uf.parents().filter(|(node, parent)| node == parent) {
            writeln!(f, "==========")?;
            Self::write_tree(f, &children, root, 0)?;
        }

        writeln!(f, "connected components:")?;
        for (root, members) in uf.components() {
            write!(f, "{root}:")?;
            for member in members {
                write!(f, " {member}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
