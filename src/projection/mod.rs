mod params;
mod projector;

pub(crate) use params::{
    INPUT_K_MAX, INPUT_K_MIN, OUTPUT_K_MAX, OUTPUT_K_MIN, QUERIES_MAX, QUERIES_MIN, QueryParams,
    RETENTION_MAX, RETENTION_MIN,
};
pub(crate) use projector::{CostPoint, Projection, project};
