use anyhow::{Context, Result, ensure};
use crate::entities::{FacilityLayout, FixedObstacle, RackCounts, RackType};
use crate::geometry::primitives::{Point, Rect};
use crate::io::ext_repr::{ExtLayout, ExtPoint, ExtProblem, ExtRect};

/// Converts an external problem into rack counts and a validated facility layout.
pub fn import_problem(ext_problem: &ExtProblem) -> Result<(RackCounts, FacilityLayout)> {
    let counts = import_rack_counts(&ext_problem.rack_counts)
        .with_context(|| format!("invalid rack counts in problem {:?}", ext_problem.name))?;
    let layout = import_layout(&ext_problem.layout)
        .with_context(|| format!("invalid layout in problem {:?}", ext_problem.name))?;
    Ok((counts, layout))
}

/// Rejects unknown rack types and negative counts.
pub fn import_rack_counts<'a>(
    ext_counts: impl IntoIterator<Item = (&'a String, &'a i64)>,
) -> Result<RackCounts> {
    ext_counts
        .into_iter()
        .map(|(type_id, &count)| {
            let rack_type = type_id.parse::<RackType>()?;
            ensure!(
                count >= 0,
                "negative rack count for type {type_id}: {count}"
            );
            Ok((rack_type, count as usize))
        })
        .collect::<Result<RackCounts>>()
}

pub fn import_layout(ext_layout: &ExtLayout) -> Result<FacilityLayout> {
    let mut layout = FacilityLayout::new(
        ext_layout.width,
        ext_layout.height,
        import_point(&ext_layout.entrance),
        import_point(&ext_layout.loading_dock),
    );

    if !ext_layout.sections.is_empty() {
        let sections = ext_layout
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| import_rect(s).with_context(|| format!("section {i}")))
            .collect::<Result<Vec<_>>>()?;
        layout = layout.with_sections(sections);
    }

    for ext_obstacle in &ext_layout.obstacles {
        let rect = import_rect(&ext_obstacle.rect)
            .with_context(|| format!("obstacle {:?}", ext_obstacle.name))?;
        layout = layout.with_obstacle(FixedObstacle::new(
            ext_obstacle.name.clone(),
            ext_obstacle.kind,
            rect,
        ));
    }

    layout.validate()?;
    Ok(layout)
}

fn import_rect(ext_rect: &ExtRect) -> Result<Rect> {
    let ExtRect {
        x,
        y,
        width,
        height,
    } = *ext_rect;
    Rect::try_new(x, y, x + width, y + height)
}

fn import_point(ext_point: &ExtPoint) -> Point {
    Point(ext_point.x, ext_point.y)
}
