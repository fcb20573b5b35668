use std::cmp::Ordering;
use std::collections::BinaryHeap;

use aligned_vec::AVec;
use bitvec::vec::BitVec;
use tracing::debug;

use crate::engine::heuristics::centroid_distance;
use crate::graph::{MeshGraph, PointLocator};
use crate::models::{Endpoint, TriangleId};

const NO_PARENT: u32 = u32::MAX;

#[derive(Clone, Copy, Debug)]
struct QueueNode {
    id: TriangleId,
    f: f64,
    h: f64,
    seq: u64,
}

impl PartialEq for QueueNode { fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal } }
impl Eq for QueueNode {}
impl PartialOrd for QueueNode { fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) } }
impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other.f.total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub found: bool,
    pub path: Vec<TriangleId>,
    pub cost: f64,
    pub expanded: u64,
}

impl SearchResult {
    fn not_found(expanded: u64) -> Self {
        SearchResult { found: false, path: Vec::new(), cost: f64::INFINITY, expanded }
    }
}

/// Per-query scratch state, indexed by triangle id.
///
/// Owned by the caller and never by the graph, so any number of queries can
/// run over one `MeshGraph` at the same time as long as each brings its own
/// context. g-scores and parents are generation-stamped: bumping the
/// generation invalidates every entry without touching the arrays.
pub struct SearchContext {
    g: AVec<f64>,
    parent: AVec<u32>,
    visited_gen: AVec<u32>,
    closed: BitVec,
    generation: u32,
    open: BinaryHeap<QueueNode>,
    seq: u64,
}

impl SearchContext {
    pub fn new(nodes: usize) -> Self {
        Self {
            g: AVec::__from_elem(64, f64::INFINITY, nodes),
            parent: AVec::__from_elem(64, NO_PARENT, nodes),
            visited_gen: AVec::__from_elem(64, 0, nodes),
            closed: BitVec::repeat(false, nodes),
            generation: 1,
            open: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn reset(&mut self, nodes: usize) {
        if self.g.len() != nodes {
            *self = Self::new(nodes);
        } else {
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                self.visited_gen.fill(0);
                self.generation = 1;
            }
            self.closed.fill(false);
            self.open.clear();
            self.seq = 0;
        }
    }

    #[inline(always)]
    fn get_g(&self, u: usize) -> f64 {
        if self.visited_gen[u] == self.generation { self.g[u] } else { f64::INFINITY }
    }

    #[inline(always)]
    fn set_g(&mut self, u: usize, val: f64) {
        if self.visited_gen[u] != self.generation {
            self.visited_gen[u] = self.generation;
            self.parent[u] = NO_PARENT;
        }
        self.g[u] = val;
    }

    #[inline(always)]
    fn set_parent(&mut self, u: usize, p: u32) {
        // set_g stamps the generation first
        self.parent[u] = p;
    }

    #[inline(always)]
    fn get_parent(&self, u: usize) -> u32 {
        if self.visited_gen[u] == self.generation { self.parent[u] } else { NO_PARENT }
    }

    #[inline(always)]
    fn push(&mut self, id: TriangleId, g: f64, h: f64) {
        self.seq += 1;
        self.open.push(QueueNode { id, f: g + h, h, seq: self.seq });
    }
}

/// A* over the triangle adjacency graph.
///
/// Step cost and heuristic are both centroid distances. Improved triangles are
/// pushed again instead of re-keyed; stale heap entries are dropped when they
/// surface after their triangle has been closed.
#[derive(Clone, Copy)]
pub struct AStarSearch<'a> {
    graph: &'a MeshGraph,
}

impl<'a> AStarSearch<'a> {
    pub fn new(graph: &'a MeshGraph) -> Self { Self { graph } }

    /// Triangle path from `start` to `goal`, empty when either endpoint cannot
    /// be located or no route exists.
    pub fn search(&self, start: Endpoint, goal: Endpoint) -> Vec<TriangleId> {
        let mut ctx = SearchContext::new(self.graph.len());
        self.search_with(start, goal, &mut ctx).path
    }

    pub fn search_with(&self, start: Endpoint, goal: Endpoint, ctx: &mut SearchContext) -> SearchResult {
        let locator = PointLocator::new(self.graph);
        match (locator.locate(start), locator.locate(goal)) {
            (Some(s), Some(g)) => self.search_ids(s, g, ctx),
            _ => SearchResult::not_found(0),
        }
    }

    /// Unknown ids are treated as unreachable.
    pub fn search_ids(&self, start: TriangleId, goal: TriangleId, ctx: &mut SearchContext) -> SearchResult {
        let graph = self.graph;
        if graph.triangle(start).is_none() || graph.triangle(goal).is_none() {
            debug!(start, goal, "astar called with unknown triangle");
            return SearchResult::not_found(0);
        }
        let triangles = graph.triangles();
        ctx.reset(triangles.len());

        let s = start as usize;
        ctx.set_g(s, 0.0);
        ctx.push(start, 0.0, centroid_distance(graph, start, goal));

        let mut expanded: u64 = 0;
        while let Some(QueueNode { id, .. }) = ctx.open.pop() {
            let u = id as usize;
            // Discard stale
            if ctx.closed[u] { continue; }
            ctx.closed.set(u, true);
            expanded += 1;

            if id == goal {
                let path = reconstruct(ctx, start, goal);
                let cost = ctx.get_g(u);
                debug!(start, goal, expanded, path_len = path.len(), cost, "astar found path");
                return SearchResult { found: true, path, cost, expanded };
            }

            let gcur = ctx.get_g(u);
            for (_, v_id) in triangles[u].adjacent() {
                let v = v_id as usize;
                if ctx.closed[v] { continue; }
                let ng = gcur + centroid_distance(graph, id, v_id);
                if ng < ctx.get_g(v) {
                    ctx.set_g(v, ng);
                    ctx.set_parent(v, id);
                    ctx.push(v_id, ng, centroid_distance(graph, v_id, goal));
                }
            }
        }

        debug!(start, goal, expanded, "astar exhausted open set");
        SearchResult::not_found(expanded)
    }
}

fn reconstruct(ctx: &SearchContext, start: TriangleId, goal: TriangleId) -> Vec<TriangleId> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = ctx.get_parent(cur as usize);
        if cur == NO_PARENT { break; }
        path.push(cur);
    }
    path.reverse();
    path
}
