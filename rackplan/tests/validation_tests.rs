#[cfg(test)]
mod tests {
    use rackplan::entities::{
        FacilityLayout, FixedObstacle, ObstacleKind, Rack, RackCounts, RackType, generate_racks,
    };
    use rackplan::geometry::kernel::point_in_footprint;
    use rackplan::geometry::primitives::{Point, Rect};
    use rackplan::validation::{
        PlacementAttempt, PlacementValidator, Violation, first_valid, has_adequate_aisles,
        required_clearance,
    };
    use test_case::test_case;

    const AISLE: f64 = 6.0;

    fn layout_40x30() -> FacilityLayout {
        FacilityLayout::new(40.0, 30.0, Point(0.0, 0.0), Point(40.0, 30.0))
    }

    fn standard_racks(n: usize) -> Vec<Rack> {
        generate_racks(&RackCounts::new().with(RackType::Standard, n))
    }

    #[test_case(Point(0.0, 0.0), true; "origin")]
    #[test_case(Point(36.0, 22.0), true; "top right corner flush")]
    #[test_case(Point(36.5, 0.0), false; "sticks out right")]
    #[test_case(Point(0.0, 22.5), false; "sticks out top")]
    #[test_case(Point(-0.1, 0.0), false; "negative x")]
    fn bounds_are_checked(pos: Point, valid: bool) {
        let validator = PlacementValidator::new(AISLE);
        let rack = &standard_racks(1)[0];
        assert_eq!(
            validator.is_valid_placement(rack, pos, &layout_40x30(), &[]),
            valid
        );
    }

    #[test]
    fn obstacles_are_avoided_but_may_be_touched() {
        let layout = layout_40x30().with_obstacle(FixedObstacle::new(
            "office",
            ObstacleKind::Office,
            Rect::new(0.0, 0.0, 8.0, 8.0),
        ));
        let validator = PlacementValidator::new(AISLE);
        let rack = &standard_racks(1)[0];
        assert_eq!(
            validator.first_violation(rack, Point(4.0, 0.0), &layout, std::iter::empty()),
            Some(Violation::ObstacleOverlap("office".to_string()))
        );
        assert!(validator.is_valid_placement(rack, Point(8.0, 0.0), &layout, &[]));
    }

    #[test]
    fn overlap_is_reported_before_aisle_clearance() {
        let racks = standard_racks(2);
        let placed = vec![racks[0].placed_at(Point(0.0, 0.0))];
        let validator = PlacementValidator::new(AISLE);
        let layout = layout_40x30();
        assert_eq!(
            validator.first_violation(&racks[1], Point(2.0, 0.0), &layout, placed.iter()),
            Some(Violation::RackOverlap("standard_1".to_string()))
        );
        assert_eq!(
            validator.first_violation(&racks[1], Point(4.0, 0.0), &layout, placed.iter()),
            Some(Violation::InsufficientAisle("standard_1".to_string()))
        );
    }

    #[test]
    fn clearance_boundary_is_inclusive() {
        let racks = standard_racks(2);
        // 6 + (4 + 8 + 4 + 8) / 4 = 12
        let required = required_clearance(racks[0].dims(), racks[1].dims(), AISLE);
        assert_eq!(required, 12.0);

        let placed = vec![racks[0].placed_at(Point(0.0, 0.0))];
        assert!(has_adequate_aisles(&racks[1], Point(12.0, 0.0), &placed, AISLE));
        assert!(!has_adequate_aisles(&racks[1], Point(11.99, 0.0), &placed, AISLE));
        assert!(!has_adequate_aisles(&racks[1], Point(12.0 - 5e-10, 0.0), &placed, AISLE));

        // diagonal: centers 3-4-5 scaled to exactly 12 apart
        assert!(has_adequate_aisles(&racks[1], Point(7.2, 9.6), &placed, AISLE));
    }

    #[test]
    fn unplaced_racks_are_ignored() {
        let racks = standard_racks(2);
        let validator = PlacementValidator::new(AISLE);
        assert!(validator.is_valid_placement(&racks[1], Point(0.0, 0.0), &layout_40x30(), &racks[..1]));
    }

    #[test]
    fn multi_section_footprint_requires_all_corners_inside() {
        // L-shaped floor: a wide bottom strip and a narrow left column
        let layout = FacilityLayout::new(40.0, 30.0, Point(0.0, 0.0), Point(40.0, 0.0))
            .with_sections(vec![
                Rect::new(0.0, 0.0, 40.0, 10.0),
                Rect::new(0.0, 10.0, 10.0, 30.0),
            ]);
        let validator = PlacementValidator::new(AISLE);
        let rack = &standard_racks(1)[0];

        // spans both sections, all corners covered
        assert!(validator.is_valid_placement(rack, Point(0.0, 6.0), &layout, &[]));
        // top corners in the notch
        assert_eq!(
            validator.first_violation(rack, Point(20.0, 6.0), &layout, std::iter::empty()),
            Some(Violation::OutsideFootprint)
        );
    }

    #[test]
    fn single_section_smaller_than_bounds_restricts_placement() {
        let layout = layout_40x30().with_sections(vec![Rect::new(0.0, 0.0, 10.0, 10.0)]);
        assert!(layout.has_restricted_footprint());
        let validator = PlacementValidator::new(AISLE);
        let rack = &standard_racks(1)[0];

        assert!(validator.is_valid_placement(rack, Point(6.0, 2.0), &layout, &[]));
        assert_eq!(
            validator.first_violation(rack, Point(12.0, 0.0), &layout, std::iter::empty()),
            Some(Violation::OutsideFootprint)
        );
    }

    #[test]
    fn section_equal_to_bounds_is_unrestricted() {
        let layout = layout_40x30().with_sections(vec![Rect::new(0.0, 0.0, 40.0, 30.0)]);
        assert!(!layout.has_restricted_footprint());
        assert!(!layout_40x30().has_restricted_footprint());
        assert!(!layout_40x30().with_sections(vec![]).has_restricted_footprint());
    }

    #[test]
    fn corner_check_is_an_approximation_on_concave_unions() {
        // two towers separated by a 3 wide notch that is not usable floor
        let layout = FacilityLayout::new(30.0, 30.0, Point(0.0, 0.0), Point(30.0, 0.0))
            .with_sections(vec![
                Rect::new(0.0, 0.0, 10.0, 30.0),
                Rect::new(13.0, 0.0, 30.0, 30.0),
            ]);
        let bulk = &generate_racks(&RackCounts::new().with(RackType::Bulk, 1))[0];
        let validator = PlacementValidator::new(AISLE);

        // 7x5 rack spanning x 7..14: left corners in the left tower, right corners in the right one
        let pos = Point(7.0, 10.0);
        assert!(validator.is_valid_placement(bulk, pos, &layout, &[]));
        // even though its center lies in the notch
        let center = Point(10.5, 12.5);
        assert!(!point_in_footprint(center, &layout.footprint));

        // a rack with a corner in the notch is rejected
        assert!(!validator.is_valid_placement(bulk, Point(4.0, 10.0), &layout, &[]));
    }

    #[test]
    fn first_valid_respects_the_attempt_cap() {
        let positions = (0..).map(|i| Point(i as f64, 0.0));
        let mut n_checked = 0;
        let attempt = first_valid(positions, 5, |p| {
            n_checked += 1;
            p.x() >= 10.0
        });
        assert_eq!(attempt, PlacementAttempt::Unplaced);
        assert_eq!(n_checked, 5);

        let attempt = first_valid((0..).map(|i| Point(i as f64, 0.0)), 100, |p| p.x() >= 10.0);
        assert_eq!(attempt, PlacementAttempt::Placed(Point(10.0, 0.0)));
    }
}
