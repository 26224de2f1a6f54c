//! Proximity clustering of bodies around the wheel.
//!
//! Bodies are chained through sorted longitude: a body joins the open cluster
//! when it is within the threshold of its predecessor, so a cluster can span
//! more than the threshold end to end. One wrap-around pass joins the last
//! cluster onto the first when they meet across 0°.

use crate::chart::types::Body;
use crate::error::{Result, WheelError};
use crate::geometry::angle::{normalize, FULL_CIRCLE};
use std::collections::HashMap;

/// Bodies close enough to overlap when drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub members: Vec<Body>,
}

impl Cluster {
    fn starting_with(body: Body) -> Self {
        Self {
            members: vec![body],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn first(&self) -> Option<&Body> {
        self.members.first()
    }

    pub fn last(&self) -> Option<&Body> {
        self.members.last()
    }

    /// Zero-based position of `label` in this cluster
    pub fn position(&self, label: &str) -> Option<usize> {
        self.members.iter().position(|b| b.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|b| b.label.as_str())
    }
}

/// Partition `bodies` into chains of neighbours at most `threshold_deg` apart.
///
/// Longitudes are normalized on the way in. An empty slice gives an empty
/// result.
pub fn cluster_by_proximity(bodies: &[Body], threshold_deg: f64) -> Vec<Cluster> {
    let mut sorted: Vec<Body> = bodies
        .iter()
        .map(|b| b.with_lon(normalize(b.lon)))
        .collect();
    sorted.sort_by(|a, b| a.lon.total_cmp(&b.lon));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut clusters = Vec::new();
    let mut prev_lon = first.lon;
    let mut current = Cluster::starting_with(first);

    for body in iter {
        if body.lon - prev_lon <= threshold_deg {
            prev_lon = body.lon;
            current.members.push(body);
        } else {
            prev_lon = body.lon;
            clusters.push(std::mem::replace(&mut current, Cluster::starting_with(body)));
        }
    }
    clusters.push(current);

    merge_across_zero(&mut clusters, threshold_deg);

    log::debug!(
        "Clustered {} bodies into {} clusters (threshold {}°)",
        bodies.len(),
        clusters.len(),
        threshold_deg
    );

    clusters
}

/// Join the last cluster onto the front of the first one when they touch
/// across 0°. Only the outermost pair is examined.
fn merge_across_zero(clusters: &mut Vec<Cluster>, threshold_deg: f64) {
    if clusters.len() < 2 {
        return;
    }

    let (Some(head), Some(tail)) = (
        clusters.first().and_then(Cluster::first),
        clusters.last().and_then(Cluster::last),
    ) else {
        return;
    };

    if (head.lon + FULL_CIRCLE) - tail.lon <= threshold_deg {
        if let Some(mut wrapped) = clusters.pop() {
            wrapped.members.append(&mut clusters[0].members);
            clusters[0] = wrapped;
        }
    }
}

/// Position of `label` within whichever cluster holds it.
///
/// Returns `None` when no cluster contains the label.
pub fn index_within_cluster(clusters: &[Cluster], label: &str) -> Option<usize> {
    clusters.iter().find_map(|c| c.position(label))
}

/// Where a body sits among the clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSlot {
    pub cluster: usize,
    pub index: usize,
    pub cluster_len: usize,
}

/// Label lookup built once per clustering
#[derive(Debug, Clone, Default)]
pub struct ClusterIndex {
    slots: HashMap<String, ClusterSlot>,
}

impl ClusterIndex {
    pub fn new(clusters: &[Cluster]) -> Self {
        let mut slots = HashMap::new();
        for (cluster_idx, cluster) in clusters.iter().enumerate() {
            for (index, body) in cluster.members.iter().enumerate() {
                // first occurrence wins, matching index_within_cluster
                slots.entry(body.label.clone()).or_insert(ClusterSlot {
                    cluster: cluster_idx,
                    index,
                    cluster_len: cluster.len(),
                });
            }
        }
        Self { slots }
    }

    pub fn slot(&self, label: &str) -> Option<ClusterSlot> {
        self.slots.get(label).copied()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.slot(label).map(|s| s.index)
    }

    /// Like [`index_of`](Self::index_of) but absent labels are an error
    pub fn require(&self, label: &str) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| WheelError::UnknownLabel(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
