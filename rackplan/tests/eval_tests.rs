#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rackplan::entities::{FacilityLayout, Rack, RackCounts, RackType, generate_racks};
    use rackplan::eval::{
        DEFAULT_DENSITY_PLACEHOLDER, IDEAL_AISLE_RATIO, ScoreResult, Scorer, aggregate_metrics,
    };
    use rackplan::geometry::primitives::{Point, Rect};
    use rackplan::util::assertions::score_is_in_range;
    use test_case::test_case;

    fn layout_40x30() -> FacilityLayout {
        FacilityLayout::new(40.0, 30.0, Point(0.0, 0.0), Point(40.0, 30.0))
    }

    fn standard_racks_at(positions: &[(f64, f64)]) -> Vec<Rack> {
        generate_racks(&RackCounts::new().with(RackType::Standard, positions.len()))
            .iter()
            .zip(positions)
            .map(|(r, p)| r.placed_at((*p).into()))
            .collect()
    }

    #[test]
    fn empty_set_scores_zero() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(&[], &layout_40x30()), ScoreResult::default());

        let unplaced = generate_racks(&RackCounts::new().with(RackType::Freezer, 3));
        assert_eq!(scorer.score(&unplaced, &layout_40x30()), ScoreResult::default());
    }

    #[test]
    fn single_rack_in_unit_facility() {
        let racks = standard_racks_at(&[(0.0, 0.0)]);
        let layout = layout_40x30();
        let score = Scorer::default().score(&racks, &layout);

        assert!(approx_eq!(f64, score.layout_efficiency, 32.0 / 1200.0, ulps = 4));
        assert_eq!(score.workflow, 1.0);

        // rack center (2, 4), diagonal 50
        let entrance = 1.0 - 20.0f64.sqrt() / 50.0;
        let dock = 1.0 - 2120.0f64.sqrt() / 50.0;
        let accessibility = (entrance + dock) / 2.0;
        assert!(approx_eq!(f64, score.accessibility, accessibility, ulps = 4));

        let total = (32.0 / 1200.0) * 30.0
            + accessibility * 25.0
            + 25.0
            + DEFAULT_DENSITY_PLACEHOLDER * 20.0;
        assert!(approx_eq!(f64, score.total_score, total, epsilon = 1e-9));
    }

    #[test]
    fn density_placeholder_is_configurable() {
        let racks = standard_racks_at(&[(0.0, 0.0)]);
        let layout = layout_40x30();
        let base = Scorer { density_placeholder: 0.2 }.score(&racks, &layout);
        let higher = Scorer { density_placeholder: 0.3 }.score(&racks, &layout);
        assert!(approx_eq!(f64, higher.total_score - base.total_score, 2.0, epsilon = 1e-9));
    }

    #[test_case(&[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)], 1.0; "even grid")]
    #[test_case(&[(0.0, 0.0), (10.0, 10.0), (30.0, 30.0)], 1.0 / 51.0; "irregular spacing")]
    #[test_case(&[(0.0, 0.0), (12.0, 0.0)], 0.5; "single row")]
    #[test_case(&[(0.0, 0.0), (0.0, 12.0), (0.0, 24.0)], 0.5; "single column")]
    #[test_case(&[(4.0, 4.0)], 1.0; "single rack")]
    fn workflow_rewards_regular_spacing(positions: &[(f64, f64)], expected: f64) {
        let racks = standard_racks_at(positions);
        let layout = FacilityLayout::new(100.0, 100.0, Point(0.0, 0.0), Point(100.0, 100.0));
        let score = Scorer::default().score(&racks, &layout);
        assert!(approx_eq!(f64, score.workflow, expected, ulps = 4));
    }

    #[test]
    fn zero_area_facility_does_not_produce_nan() {
        let racks = standard_racks_at(&[(0.0, 0.0)]);
        let layout = FacilityLayout::new(0.0, 30.0, Point(0.0, 0.0), Point(0.0, 30.0));
        let score = Scorer::default().score(&racks, &layout);
        assert_eq!(score.layout_efficiency, 0.0);
        assert!(score.total_score.is_finite());
        assert!(score_is_in_range(&score));

        let metrics = aggregate_metrics(&racks, &layout);
        assert_eq!(metrics.area_utilization, 0.0);
        assert_eq!(metrics.aisle_efficiency, 0.0);

        let flat = FacilityLayout::new(0.0, 0.0, Point(0.0, 0.0), Point(0.0, 0.0));
        let score = Scorer::default().score(&racks, &flat);
        assert_eq!(score.accessibility, 0.0);
        assert!(score_is_in_range(&score));
    }

    #[test]
    fn usable_area_sums_the_sections() {
        let layout = layout_40x30().with_sections(vec![
            Rect::new(0.0, 0.0, 40.0, 10.0),
            Rect::new(0.0, 10.0, 10.0, 30.0),
        ]);
        assert_eq!(layout.usable_area(), 600.0);
        let racks = standard_racks_at(&[(0.0, 0.0)]);
        let score = Scorer::default().score(&racks, &layout);
        assert!(approx_eq!(f64, score.layout_efficiency, 32.0 / 600.0, ulps = 4));
    }

    #[test]
    fn far_away_access_points_keep_accessibility_in_range() {
        let racks = standard_racks_at(&[(0.0, 0.0), (20.0, 20.0)]);
        let layout = FacilityLayout::new(40.0, 30.0, Point(500.0, 500.0), Point(-500.0, 0.0));
        let score = Scorer::default().score(&racks, &layout);
        assert_eq!(score.accessibility, 0.0);
        assert!(score_is_in_range(&score));
    }

    #[test]
    fn metrics_of_empty_set_are_zero() {
        let unplaced = generate_racks(&RackCounts::new().with(RackType::Bulk, 2));
        let metrics = aggregate_metrics(&unplaced, &layout_40x30());
        assert_eq!(metrics.total_racks, 0);
        assert_eq!(metrics.unplaced_racks, 2);
        assert_eq!(metrics.total_capacity, 0);
        assert_eq!(metrics.average_distance_to_entrance, 0.0);
        assert_eq!(metrics.average_distance_to_dock, 0.0);
        assert_eq!(metrics.area_utilization, 0.0);
        assert!(metrics.placed_by_type.is_empty());
    }

    #[test]
    fn metrics_only_count_placed_racks() {
        let mut racks = standard_racks_at(&[(0.0, 0.0), (20.0, 0.0)]);
        racks.extend(generate_racks(&RackCounts::new().with(RackType::Freezer, 1)));
        let layout = layout_40x30();
        let metrics = aggregate_metrics(&racks, &layout);

        assert_eq!(metrics.total_racks, 2);
        assert_eq!(metrics.unplaced_racks, 1);
        assert_eq!(metrics.total_capacity, 400);
        assert_eq!(metrics.placed_by_type.get(&RackType::Standard), Some(&2));
        assert!(approx_eq!(f64, metrics.area_utilization, 64.0 / 1200.0, ulps = 4));

        // centers (2, 4) and (22, 4)
        let to_entrance = (20.0f64.sqrt() + 500.0f64.sqrt()) / 2.0;
        assert!(approx_eq!(f64, metrics.average_distance_to_entrance, to_entrance, ulps = 4));

        let aisle_ratio = (1200.0 - 64.0) / 1200.0;
        let aisle_efficiency =
            (1.0 - (aisle_ratio - IDEAL_AISLE_RATIO).abs() / IDEAL_AISLE_RATIO).max(0.0);
        assert!(approx_eq!(f64, metrics.aisle_efficiency, aisle_efficiency, ulps = 4));
    }
}
