use std::fmt::Write;

use crate::projection::Projection;

/// One row per query count; costs keep six decimals
pub(crate) fn output_projection_csv(projection: &Projection) -> String {
    let mut out = String::from("queries,normal_cost,cache_cost,savings\n");
    for point in &projection.points {
        let _ = writeln!(
            out,
            "{},{:.6},{:.6},{:.6}",
            point.queries,
            point.normal_cost,
            point.cache_cost,
            point.savings(),
        );
    }
    out
}
