#[cfg(test)]
mod tests {
    use rackplan::entities::{PlacementSolution, RackType, generate_racks};
    use rackplan::eval::Scorer;
    use rackplan::geometry::primitives::Point;
    use rackplan::io::ext_repr::ExtProblem;
    use rackplan::io::{export_solution, import_problem};

    const PROBLEM: &str = r#"{
        "name": "small",
        "layout": {
            "width": 60.0,
            "height": 40.0,
            "obstacles": [
                { "name": "office", "kind": "office", "x": 0.0, "y": 0.0, "width": 8.0, "height": 8.0 }
            ],
            "entrance": { "x": 60.0, "y": 0.0 },
            "loading_dock": { "x": 0.0, "y": 40.0 }
        },
        "rack_counts": { "standard": 3, "bulk": 1 }
    }"#;

    #[test]
    fn problem_is_imported() {
        let ext_problem: ExtProblem = serde_json::from_str(PROBLEM).unwrap();
        let (counts, layout) = import_problem(&ext_problem).unwrap();
        assert_eq!(counts.get(RackType::Standard), 3);
        assert_eq!(counts.get(RackType::Bulk), 1);
        assert_eq!(counts.get(RackType::Freezer), 0);
        assert_eq!(layout.obstacles.len(), 1);
        assert!(!layout.has_restricted_footprint());
        assert_eq!(layout.usable_area(), 2400.0);
        assert_eq!(layout.entrance, Point(60.0, 0.0));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut ext_problem: ExtProblem = serde_json::from_str(PROBLEM).unwrap();
        ext_problem.rack_counts.insert("freezer".to_string(), -1);
        let err = import_problem(&ext_problem).unwrap_err();
        assert!(format!("{err:#}").contains("negative rack count"));
    }

    #[test]
    fn unknown_rack_types_are_rejected() {
        let mut ext_problem: ExtProblem = serde_json::from_str(PROBLEM).unwrap();
        ext_problem.rack_counts.insert("pallet".to_string(), 2);
        assert!(import_problem(&ext_problem).is_err());
    }

    #[test]
    fn zero_area_layouts_are_rejected() {
        let mut ext_problem: ExtProblem = serde_json::from_str(PROBLEM).unwrap();
        ext_problem.layout.width = 0.0;
        assert!(import_problem(&ext_problem).is_err());
    }

    #[test]
    fn unplaced_racks_are_exported_without_position() {
        let ext_problem: ExtProblem = serde_json::from_str(PROBLEM).unwrap();
        let (counts, layout) = import_problem(&ext_problem).unwrap();
        let mut racks = generate_racks(&counts);
        racks[0] = racks[0].placed_at(Point(10.0, 10.0));

        let solution = PlacementSolution::evaluate(racks.into(), &layout, &Scorer::default());
        let ext_solution = export_solution(&solution, 12);
        assert_eq!(ext_solution.racks.len(), 4);
        assert!(ext_solution.racks[0].position.is_some());
        assert!(ext_solution.racks[1].position.is_none());

        let json = serde_json::to_value(&ext_solution).unwrap();
        assert!(json["racks"][1].get("position").is_none());
        assert_eq!(json["metrics"]["placed_by_type"]["standard"], 1);
    }
}
