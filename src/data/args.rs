//! Randomized argument generation for tests and benchmarks.
//!
//! The generator owns its random source. Two generators built from the same
//! seed produce the same sequence of values regardless of what other code (or
//! other tests running in parallel) does with randomness.

use std::collections::BTreeMap;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;
use rand_distr::Bernoulli;

use crate::domain::Charset;
use crate::error::AppError;

/// Binary tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.len()) + self.right.as_ref().map_or(0, |n| n.len())
    }

    /// Values in breadth-first order.
    pub fn level_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            out.push(node.val);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }
}

/// Singly linked list node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i64,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i64) -> Self {
        Self { val, next: None }
    }

    /// Values from this node to the tail.
    pub fn to_vec(&self) -> Vec<i64> {
        let mut out = vec![self.val];
        let mut cur = self.next.as_deref();
        while let Some(node) = cur {
            out.push(node.val);
            cur = node.next.as_deref();
        }
        out
    }
}

/// Adjacency list keyed by node id (`0..n`).
pub type Graph = BTreeMap<usize, Vec<usize>>;

/// Seedable generator for common algorithm inputs.
#[derive(Debug, Clone)]
pub struct ArgumentGenerator {
    rng: StdRng,
}

impl ArgumentGenerator {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// `n` integers drawn from `[min, max]`.
    ///
    /// With `unique`, values are drawn without replacement and the length is
    /// capped at the size of the range.
    pub fn int_list(
        &mut self,
        n: usize,
        min: i64,
        max: i64,
        unique: bool,
    ) -> Result<Vec<i64>, AppError> {
        check_range(min, max)?;
        if !unique {
            return Ok((0..n).map(|_| self.rng.gen_range(min..=max)).collect());
        }

        let span = max.abs_diff(min);
        let pool = usize::try_from(span)
            .ok()
            .and_then(|s| s.checked_add(1))
            .unwrap_or(usize::MAX);
        let k = n.min(pool);
        let picks = index::sample(&mut self.rng, pool, k);
        // offset <= span, so two's-complement wrapping lands exactly on min + offset
        Ok(picks
            .into_iter()
            .map(|offset| min.wrapping_add(offset as i64))
            .collect())
    }

    /// Random string of `n` ASCII letters.
    pub fn string(&mut self, n: usize, charset: Charset) -> String {
        let alphabet: &[u8] = match charset {
            Charset::Lower => b"abcdefghijklmnopqrstuvwxyz",
            Charset::Upper => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Charset::Mixed => b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        };
        (0..n)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    /// `rows x cols` matrix of integers in `[min, max]`.
    pub fn matrix(
        &mut self,
        rows: usize,
        cols: usize,
        min: i64,
        max: i64,
    ) -> Result<Vec<Vec<i64>>, AppError> {
        check_range(min, max)?;
        Ok((0..rows)
            .map(|_| (0..cols).map(|_| self.rng.gen_range(min..=max)).collect())
            .collect())
    }

    /// Binary tree with `n` nodes filled in level order (a complete tree).
    pub fn binary_tree(
        &mut self,
        n: usize,
        min: i64,
        max: i64,
    ) -> Result<Option<Box<TreeNode>>, AppError> {
        check_range(min, max)?;
        let values: Vec<i64> = (0..n).map(|_| self.rng.gen_range(min..=max)).collect();
        Ok(build_complete_tree(&values, 0))
    }

    /// Singly linked list with `n` nodes.
    pub fn linked_list(
        &mut self,
        n: usize,
        min: i64,
        max: i64,
    ) -> Result<Option<Box<ListNode>>, AppError> {
        check_range(min, max)?;
        let values: Vec<i64> = (0..n).map(|_| self.rng.gen_range(min..=max)).collect();
        let mut head: Option<Box<ListNode>> = None;
        for &val in values.iter().rev() {
            head = Some(Box::new(ListNode { val, next: head }));
        }
        Ok(head)
    }

    /// Random graph on nodes `0..n`.
    ///
    /// Every ordered pair `(i, j)` with `i != j` gets an edge with probability
    /// `edge_probability`. Undirected graphs mirror each edge and drop
    /// duplicates; neighbour lists are sorted.
    pub fn graph(
        &mut self,
        n: usize,
        edge_probability: f64,
        directed: bool,
    ) -> Result<Graph, AppError> {
        let coin = Bernoulli::new(edge_probability).map_err(|_| {
            AppError::invalid_argument(format!(
                "Edge probability must be within [0, 1], got {edge_probability}."
            ))
        })?;

        let mut graph: Graph = (0..n).map(|i| (i, Vec::new())).collect();
        for i in 0..n {
            for j in 0..n {
                if i == j || !coin.sample(&mut self.rng) {
                    continue;
                }
                if let Some(out) = graph.get_mut(&i) {
                    out.push(j);
                }
                if !directed {
                    if let Some(back) = graph.get_mut(&j) {
                        back.push(i);
                    }
                }
            }
        }

        if !directed {
            for neighbours in graph.values_mut() {
                neighbours.sort_unstable();
                neighbours.dedup();
            }
        }
        Ok(graph)
    }
}

fn check_range(min: i64, max: i64) -> Result<(), AppError> {
    if min > max {
        return Err(AppError::invalid_argument(format!(
            "Invalid value range: min={min} > max={max}."
        )));
    }
    Ok(())
}

fn build_complete_tree(values: &[i64], idx: usize) -> Option<Box<TreeNode>> {
    let val = *values.get(idx)?;
    Some(Box::new(TreeNode {
        val,
        left: build_complete_tree(values, 2 * idx + 1),
        right: build_complete_tree(values, 2 * idx + 2),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        let a = ArgumentGenerator::seeded(42).int_list(50, 0, 1000, false).unwrap();
        let b = ArgumentGenerator::seeded(42).int_list(50, 0, 1000, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn int_list_respects_bounds() {
        let mut g = ArgumentGenerator::seeded(1);
        let v = g.int_list(200, -5, 5, false).unwrap();
        assert_eq!(v.len(), 200);
        assert!(v.iter().all(|x| (-5..=5).contains(x)));
    }

    #[test]
    fn unique_list_is_capped_and_distinct() {
        let mut g = ArgumentGenerator::seeded(7);
        let mut v = g.int_list(50, 10, 19, true).unwrap();
        assert_eq!(v.len(), 10);
        v.sort_unstable();
        assert_eq!(v, (10..=19).collect::<Vec<_>>());
    }

    #[test]
    fn unique_list_over_full_i64_range_does_not_overflow() {
        for seed in 0..8 {
            let mut g = ArgumentGenerator::seeded(seed);
            let mut v = g.int_list(4, i64::MIN, i64::MAX, true).unwrap();
            assert_eq!(v.len(), 4);
            v.sort_unstable();
            v.dedup();
            assert_eq!(v.len(), 4, "seed {seed}");
        }
    }

    #[test]
    fn unique_list_spanning_zero_stays_in_bounds() {
        let mut g = ArgumentGenerator::seeded(11);
        let v = g.int_list(64, i64::MIN, 0, true).unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x <= 0));
    }

    #[test]
    fn inverted_range_is_invalid() {
        let mut g = ArgumentGenerator::seeded(0);
        assert!(g.int_list(3, 5, 1, false).unwrap_err().is_invalid_argument());
        assert!(g.matrix(2, 2, 5, 1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn string_uses_requested_alphabet() {
        let mut g = ArgumentGenerator::seeded(3);
        let lower = g.string(64, Charset::Lower);
        let upper = g.string(64, Charset::Upper);
        let mixed = g.string(64, Charset::Mixed);
        assert_eq!(lower.len(), 64);
        assert!(lower.chars().all(|c| c.is_ascii_lowercase()));
        assert!(upper.chars().all(|c| c.is_ascii_uppercase()));
        assert!(mixed.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn matrix_shape() {
        let mut g = ArgumentGenerator::seeded(3);
        let m = g.matrix(3, 4, 0, 9).unwrap();
        assert_eq!(m.len(), 3);
        assert!(m.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn tree_is_complete_in_level_order() {
        let mut g = ArgumentGenerator::seeded(9);
        assert!(g.binary_tree(0, 0, 10).unwrap().is_none());

        let root = g.binary_tree(6, 0, 10).unwrap().unwrap();
        assert_eq!(root.len(), 6);
        // levels: 1, 2, 3 nodes; the third level fills left to right
        let left = root.left.as_ref().unwrap();
        let right = root.right.as_ref().unwrap();
        assert!(left.left.is_some() && left.right.is_some());
        assert!(right.left.is_some() && right.right.is_none());
    }

    #[test]
    fn linked_list_length() {
        let mut g = ArgumentGenerator::seeded(11);
        assert!(g.linked_list(0, 0, 1).unwrap().is_none());
        let head = g.linked_list(5, 0, 100).unwrap().unwrap();
        assert_eq!(head.to_vec().len(), 5);
    }

    #[test]
    fn undirected_graph_is_symmetric_without_duplicates() {
        let mut g = ArgumentGenerator::seeded(5);
        let graph = g.graph(12, 0.4, false).unwrap();
        assert_eq!(graph.len(), 12);
        for (&i, neighbours) in &graph {
            let mut sorted = neighbours.clone();
            sorted.dedup();
            assert_eq!(&sorted, neighbours);
            for &j in neighbours {
                assert_ne!(i, j);
                assert!(graph[&j].contains(&i));
            }
        }
    }

    #[test]
    fn graph_extremes() {
        let mut g = ArgumentGenerator::seeded(5);
        let empty = g.graph(5, 0.0, true).unwrap();
        assert!(empty.values().all(Vec::is_empty));

        let full = g.graph(5, 1.0, true).unwrap();
        assert!(full.values().all(|n| n.len() == 4));

        assert!(g.graph(5, 1.5, false).unwrap_err().is_invalid_argument());
    }
}
