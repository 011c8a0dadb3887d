pub mod affinity;
pub mod indicator;
