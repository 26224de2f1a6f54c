pub mod assembler;
pub mod cluster;

pub use assembler::{
    AngleMarker, AspectChord, AssembledWheel, CuspSpoke, PlanetPlacement, SignSector, Spoke,
    WheelAssembler,
};
pub use cluster::{
    cluster_by_proximity, index_within_cluster, Cluster, ClusterIndex, ClusterSlot,
};
