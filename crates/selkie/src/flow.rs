//! Minimum-cost flow with node demands and arc lower bounds.
//!
//! The compaction networks are tiny (one node per face), so this solver
//! favors clarity over asymptotics: lower bounds are folded away through
//! the standard super source/sink reduction, then successive shortest
//! augmenting paths are found with Bellman-Ford on the residual graph.

use rustc_hash::FxHashMap;
use selkie_dcel::FaceId;

/// Finite sentinel standing in for an unbounded capacity or demand.
pub(crate) const BIG: i64 = 1 << 32;

/// Identity of a network node: a face of the embedding, or the dedicated
/// sink that represents the external face on the arc-head side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FlowNode {
    Face(FaceId),
    Sink,
}

#[derive(Debug, Clone, Copy)]
struct Arc {
    tail: usize,
    head: usize,
    lower: i64,
    capacity: i64,
    cost: i64,
}

#[derive(Debug, Default)]
pub(crate) struct FlowNet {
    keys: Vec<FlowNode>,
    index: FxHashMap<FlowNode, usize>,
    demand: Vec<i64>,
    arcs: Vec<Arc>,
}

impl FlowNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a node, returning its dense index.
    pub fn node(&mut self, key: FlowNode) -> usize {
        if let Some(&ix) = self.index.get(&key) {
            return ix;
        }
        let ix = self.keys.len();
        self.keys.push(key);
        self.demand.push(0);
        self.index.insert(key, ix);
        ix
    }

    /// Negative demand supplies flow, positive demand consumes it.
    pub fn set_demand(&mut self, node: usize, demand: i64) {
        self.demand[node] = demand;
    }

    pub fn add_arc(&mut self, tail: usize, head: usize, lower: i64, capacity: i64, cost: i64) -> usize {
        let ix = self.arcs.len();
        self.arcs.push(Arc {
            tail,
            head,
            lower,
            capacity,
            cost,
        });
        ix
    }

    /// Solve for a feasible minimum-cost flow. Returns the flow value per
    /// arc (in `add_arc` order), or `None` when no assignment satisfies
    /// conservation, lower bounds and capacities.
    pub fn min_cost_flow(&self) -> Option<Vec<i64>> {
        let n = self.keys.len();
        let s = n;
        let t = n + 1;

        // Residual arcs in forward/reverse pairs: edge 2i+1 mirrors 2i.
        let mut tails: Vec<usize> = Vec::new();
        let mut heads: Vec<usize> = Vec::new();
        let mut caps: Vec<i64> = Vec::new();
        let mut costs: Vec<i64> = Vec::new();
        let push = |tails: &mut Vec<usize>,
                        heads: &mut Vec<usize>,
                        caps: &mut Vec<i64>,
                        costs: &mut Vec<i64>,
                        u: usize,
                        v: usize,
                        cap: i64,
                        cost: i64| {
            tails.push(u);
            heads.push(v);
            caps.push(cap);
            costs.push(cost);
            tails.push(v);
            heads.push(u);
            caps.push(0);
            costs.push(-cost);
        };

        // Force the lower bounds and fold them into the node imbalances.
        let mut balance: Vec<i64> = self.demand.iter().map(|d| -d).collect();
        for arc in &self.arcs {
            if arc.capacity < arc.lower {
                return None;
            }
            balance[arc.tail] -= arc.lower;
            balance[arc.head] += arc.lower;
            push(
                &mut tails,
                &mut heads,
                &mut caps,
                &mut costs,
                arc.tail,
                arc.head,
                arc.capacity - arc.lower,
                arc.cost,
            );
        }

        // Imbalances must cancel overall; a one-sided surplus can never
        // satisfy conservation no matter how flow is routed.
        if balance.iter().sum::<i64>() != 0 {
            return None;
        }

        let mut need = 0i64;
        for v in 0..n {
            if balance[v] > 0 {
                push(&mut tails, &mut heads, &mut caps, &mut costs, s, v, balance[v], 0);
                need += balance[v];
            } else if balance[v] < 0 {
                push(&mut tails, &mut heads, &mut caps, &mut costs, v, t, -balance[v], 0);
            }
        }

        // Successive shortest paths from s to t.
        let m = tails.len();
        let mut shipped = 0i64;
        while shipped < need {
            let mut dist = vec![i64::MAX; n + 2];
            let mut prev = vec![usize::MAX; n + 2];
            dist[s] = 0;
            for _ in 0..n + 2 {
                let mut changed = false;
                for e in 0..m {
                    if caps[e] <= 0 || dist[tails[e]] == i64::MAX {
                        continue;
                    }
                    let relaxed = dist[tails[e]] + costs[e];
                    if relaxed < dist[heads[e]] {
                        dist[heads[e]] = relaxed;
                        prev[heads[e]] = e;
                        changed = true;
                    }
                }
                if !changed {
                    break;
                }
            }
            if dist[t] == i64::MAX {
                return None;
            }

            let mut delta = i64::MAX;
            let mut v = t;
            while v != s {
                let e = prev[v];
                delta = delta.min(caps[e]);
                v = tails[e];
            }
            let mut v = t;
            while v != s {
                let e = prev[v];
                caps[e] -= delta;
                caps[e ^ 1] += delta;
                v = tails[e];
            }
            shipped += delta;
        }

        // Flow on arc i is its lower bound plus whatever the reverse
        // residual edge accumulated.
        Some(
            self.arcs
                .iter()
                .enumerate()
                .map(|(i, arc)| arc.lower + caps[2 * i + 1])
                .collect(),
        )
    }
}
