//! Wait-cost policies
//!
//! A wait cost is the extra delay charged when a route crosses an
//! intersection. The scheduler asks the policy once per relaxed edge,
//! passing the node being left, the edge, and the departure/arrival times.
//! Policies must return a non-negative cost, otherwise label-setting
//! correctness is lost and the query fails with `InvalidWeight`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Edge, NodeId};

/// Everything a policy may depend on for one edge traversal.
///
/// `node` and `departure` refer to the intersection being left
/// (`edge.src`), `arrival` to the one being entered (`edge.dst`), so
/// `PerNodeWait` tables are keyed by the node a vehicle leaves and
/// `SignalWait` models the signal at the node it enters.
#[derive(Debug, Clone, Copy)]
pub struct WaitContext<'a> {
    /// The intersection being crossed (the edge's source)
    pub node: NodeId,
    pub edge: &'a Edge,
    /// Settled distance of `node`
    pub departure: f64,
    /// `departure + edge.weight`
    pub arrival: f64,
}

/// Extra delay charged for traversing an edge
pub trait WaitCost {
    fn wait_cost(&self, ctx: &WaitContext<'_>) -> f64;
}

impl<F> WaitCost for F
where
    F: Fn(&WaitContext<'_>) -> f64,
{
    fn wait_cost(&self, ctx: &WaitContext<'_>) -> f64 {
        self(ctx)
    }
}

/// Plain Dijkstra: no extra delay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoWait;

impl WaitCost for NoWait {
    fn wait_cost(&self, _ctx: &WaitContext<'_>) -> f64 {
        0.0
    }
}

/// The same delay at every intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantWait(pub f64);

impl WaitCost for ConstantWait {
    fn wait_cost(&self, _ctx: &WaitContext<'_>) -> f64 {
        self.0
    }
}

/// Delay for a single node in a per-node table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDelay {
    pub node: NodeId,
    pub delay: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PerNodeWaitRepr {
    #[serde(default)]
    default: f64,
    #[serde(default)]
    delays: Vec<NodeDelay>,
}

/// A fixed delay per node, `default` for nodes without an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PerNodeWaitRepr", into = "PerNodeWaitRepr")]
pub struct PerNodeWait {
    default: f64,
    delays: BTreeMap<NodeId, f64>,
}

impl PerNodeWait {
    pub fn new(default: f64) -> Self {
        PerNodeWait {
            default,
            delays: BTreeMap::new(),
        }
    }

    pub fn with_delay(mut self, node: NodeId, delay: f64) -> Self {
        self.delays.insert(node, delay);
        self
    }

    pub fn delay(&self, node: NodeId) -> f64 {
        self.delays.get(&node).copied().unwrap_or(self.default)
    }

    fn validate(&self) -> Result<()> {
        check_non_negative("per_node default delay", self.default)?;
        for (node, delay) in &self.delays {
            check_non_negative(&format!("per_node delay for node {}", node), *delay)?;
        }
        Ok(())
    }
}

impl From<PerNodeWaitRepr> for PerNodeWait {
    fn from(repr: PerNodeWaitRepr) -> Self {
        PerNodeWait {
            default: repr.default,
            delays: repr.delays.into_iter().map(|d| (d.node, d.delay)).collect(),
        }
    }
}

impl From<PerNodeWait> for PerNodeWaitRepr {
    fn from(wait: PerNodeWait) -> Self {
        PerNodeWaitRepr {
            default: wait.default,
            delays: wait
                .delays
                .into_iter()
                .map(|(node, delay)| NodeDelay { node, delay })
                .collect(),
        }
    }
}

impl WaitCost for PerNodeWait {
    fn wait_cost(&self, ctx: &WaitContext<'_>) -> f64 {
        self.delay(ctx.node)
    }
}

/// Periodic traffic signal at the end of every edge.
///
/// Time `offset` starts a cycle of length `cycle` whose first `green` units
/// are green. Arriving during red costs the time left until the next green.
/// The wait depends on the arrival time, and later arrivals never leave
/// earlier, so label-setting stays correct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWait {
    pub cycle: f64,
    pub green: f64,
    #[serde(default)]
    pub offset: f64,
}

impl SignalWait {
    pub fn new(cycle: f64, green: f64) -> Self {
        SignalWait {
            cycle,
            green,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Time left until green for a vehicle arriving at `time`
    pub fn delay_at(&self, time: f64) -> f64 {
        let phase = (time - self.offset).rem_euclid(self.cycle);
        if phase < self.green {
            0.0
        } else {
            self.cycle - phase
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.cycle.is_finite() && self.cycle > 0.0) {
            bail_invalid!("signal cycle", self.cycle);
        }
        if !(self.green > 0.0 && self.green <= self.cycle) {
            bail_invalid!(
                "signal green phase",
                format!("{} (must be in (0, {}])", self.green, self.cycle)
            );
        }
        if !self.offset.is_finite() {
            bail_invalid!("signal offset", self.offset);
        }
        Ok(())
    }
}

impl WaitCost for SignalWait {
    fn wait_cost(&self, ctx: &WaitContext<'_>) -> f64 {
        self.delay_at(ctx.arrival)
    }
}

/// Configurable wait policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaitPolicy {
    #[default]
    None,
    Constant {
        value: f64,
    },
    PerNode(PerNodeWait),
    Signal(SignalWait),
}

impl WaitPolicy {
    pub fn constant(value: f64) -> Self {
        WaitPolicy::Constant { value }
    }

    /// Reject policies that could produce negative or undefined costs
    pub fn validate(&self) -> Result<()> {
        match self {
            WaitPolicy::None => Ok(()),
            WaitPolicy::Constant { value } => check_non_negative("constant wait", *value),
            WaitPolicy::PerNode(wait) => wait.validate(),
            WaitPolicy::Signal(wait) => wait.validate(),
        }
    }
}

impl WaitCost for WaitPolicy {
    fn wait_cost(&self, ctx: &WaitContext<'_>) -> f64 {
        match self {
            WaitPolicy::None => NoWait.wait_cost(ctx),
            WaitPolicy::Constant { value } => ConstantWait(*value).wait_cost(ctx),
            WaitPolicy::PerNode(wait) => wait.wait_cost(ctx),
            WaitPolicy::Signal(wait) => wait.wait_cost(ctx),
        }
    }
}

fn check_non_negative(context: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        bail_invalid!(context, value);
    }
    Ok(())
}
