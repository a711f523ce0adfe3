use std::collections::BTreeMap;
use std::fmt::Write;

use itertools::Itertools;
use rackplan::entities::{FacilityLayout, PlacementSolution, Rack, RackType};
use rackplan::eval::ScoreResult;
use thousands::Separable;

pub const EXCELLENT_SCORE: f64 = 80.0;
pub const GOOD_SCORE: f64 = 60.0;

/// Aggregated figures of the placed racks of a single type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeBreakdown {
    pub count: usize,
    pub total_capacity: u64,
    /// Average distance of the rack centers to the entrance
    pub avg_distance_to_entrance: f64,
}

/// Placed racks grouped per type, in catalog order. Types without placed racks are absent.
pub fn type_breakdown(
    solution: &PlacementSolution,
    layout: &FacilityLayout,
) -> BTreeMap<RackType, TypeBreakdown> {
    solution
        .placed()
        .into_group_map_by(|r| r.rack_type())
        .into_iter()
        .map(|(rack_type, racks)| (rack_type, breakdown_of(&racks, layout)))
        .collect()
}

fn breakdown_of(racks: &[&Rack], layout: &FacilityLayout) -> TypeBreakdown {
    let distances = racks
        .iter()
        .filter_map(|r| r.center())
        .map(|c| c.distance(&layout.entrance))
        .collect_vec();
    let avg_distance_to_entrance = match distances.is_empty() {
        true => 0.0,
        false => distances.iter().sum::<f64>() / distances.len() as f64,
    };
    TypeBreakdown {
        count: racks.len(),
        total_capacity: racks.iter().map(|r| r.capacity() as u64).sum(),
        avg_distance_to_entrance,
    }
}

/// Verdict and advice lines for a score, the first line being the verdict.
pub fn recommendations(score: &ScoreResult) -> Vec<&'static str> {
    if score.total_score >= EXCELLENT_SCORE {
        vec![
            "Excellent optimization achieved:",
            "- Layout is highly efficient and well-optimized",
            "- Consider this configuration for implementation",
        ]
    } else if score.total_score >= GOOD_SCORE {
        let mut lines = vec!["Good optimization with room for improvement:"];
        if score.layout_efficiency < 0.4 {
            lines.push("- Consider adding more racks to improve space utilization");
        }
        if score.accessibility < 0.6 {
            lines.push("- Relocate high-turnover racks closer to the entrance or loading dock");
        }
        if score.workflow < 0.6 {
            lines.push("- Improve rack arrangement regularity for better workflow");
        }
        lines
    } else {
        vec![
            "Optimization needs significant improvement:",
            "- Review layout constraints and rack requirements",
            "- Consider alternative rack configurations",
            "- Evaluate if the facility dimensions are appropriate",
        ]
    }
}

/// Human readable summary of a solution. Distances are in the units of the layout (feet).
pub fn detailed_report(solution: &PlacementSolution, layout: &FacilityLayout) -> String {
    let mut report = String::new();
    // writing to a String cannot fail
    let _ = write_report(&mut report, solution, layout);
    report
}

fn write_report(
    out: &mut String,
    solution: &PlacementSolution,
    layout: &FacilityLayout,
) -> std::fmt::Result {
    let score = &solution.score;
    let metrics = &solution.metrics;

    writeln!(out, "RACK PLACEMENT OPTIMIZATION REPORT")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    header(out, "EXECUTIVE SUMMARY")?;
    writeln!(out, "Overall Optimization Score: {:.1}/100", score.total_score)?;
    writeln!(
        out,
        "Racks Successfully Placed: {}/{}",
        metrics.total_racks,
        solution.racks.len()
    )?;
    writeln!(
        out,
        "Total Storage Capacity: {} units",
        metrics.total_capacity.separate_with_commas()
    )?;
    writeln!(out, "Floor Space Utilization: {}", percent(metrics.area_utilization))?;
    writeln!(out)?;

    header(out, "PERFORMANCE BREAKDOWN")?;
    writeln!(out, "- Layout Efficiency:    {}", percent(score.layout_efficiency))?;
    writeln!(out, "- Accessibility Score:  {}", percent(score.accessibility))?;
    writeln!(out, "- Workflow Efficiency:  {}", percent(score.workflow))?;
    writeln!(out)?;

    header(out, "OPERATIONAL METRICS")?;
    writeln!(out, "- Unplaced Racks: {}", metrics.unplaced_racks)?;
    writeln!(
        out,
        "- Average Distance To Entrance: {:.2}ft",
        metrics.average_distance_to_entrance
    )?;
    writeln!(
        out,
        "- Average Distance To Dock: {:.2}ft",
        metrics.average_distance_to_dock
    )?;
    writeln!(out, "- Area Utilization: {}", percent(metrics.area_utilization))?;
    writeln!(out, "- Aisle Efficiency: {}", percent(metrics.aisle_efficiency))?;
    writeln!(out)?;

    header(out, "RACK DISTRIBUTION")?;
    for (rack_type, breakdown) in type_breakdown(solution, layout) {
        writeln!(out, "- {}:", title_case(rack_type.as_str()))?;
        writeln!(out, "  Count: {} racks", breakdown.count)?;
        writeln!(
            out,
            "  Total Capacity: {} units",
            breakdown.total_capacity.separate_with_commas()
        )?;
        writeln!(
            out,
            "  Avg Distance to Entrance: {:.1}ft",
            breakdown.avg_distance_to_entrance
        )?;
    }
    writeln!(out)?;

    header(out, "RECOMMENDATIONS")?;
    for line in recommendations(score) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn header(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// `high_density` -> `High Density`
fn title_case(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}
