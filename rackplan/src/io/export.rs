use crate::entities::{PlacementSolution, Rack};
use crate::io::ext_repr::{ExtPoint, ExtRack, ExtSolution};

pub fn export_solution(solution: &PlacementSolution, run_time_ms: u64) -> ExtSolution {
    ExtSolution {
        racks: solution.racks.iter().map(export_rack).collect(),
        score: solution.score,
        metrics: solution.metrics.clone(),
        run_time_ms,
    }
}

pub fn export_rack(rack: &Rack) -> ExtRack {
    ExtRack {
        id: rack.id().to_string(),
        rack_type: rack.rack_type(),
        width: rack.width(),
        height: rack.height(),
        capacity: rack.capacity(),
        position: rack.position().map(|p| ExtPoint { x: p.x(), y: p.y() }),
    }
}
