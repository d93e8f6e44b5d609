//! End-to-end flows: parse, filter, aggregate, export.

mod support;

use costs_rust::api::{
    aggregate, AggregateSnapshot, CorrectionFactorSettings, CostGroup, FilterCriteria,
    ProjectRecord, TypeMatchMode,
};
use costs_rust::export;
use costs_rust::parsing;
use support::{excluded, record, with_cost, with_types};

#[test]
fn test_reference_scenario() {
    // A contributes KG220 corrected by the 2000 factor; B's KG220 is the
    // absence sentinel but B still counts toward the area mean.
    let records = vec![
        with_cost(record("A", 100, 2000), CostGroup::Kg220, 200),
        record("B", 200, 2020),
    ];

    let mut factors = CorrectionFactorSettings::create_default();
    factors.set_factor(2000, 1.5);

    let snapshot = aggregate(&records, &FilterCriteria::default(), &factors);

    assert_eq!(snapshot.overall.area, 150.0);
    let summary = snapshot.summary_for(CostGroup::Kg220).unwrap();
    assert_eq!(summary.average, 300.0);
    assert_eq!(summary.min, 300.0);
    assert_eq!(summary.max, 300.0);
    assert_eq!(summary.std_dev, 0.0);
    assert_eq!(snapshot.group_average(CostGroup::Kg220), 300.0);
}

#[test]
fn test_all_types_sentinel_equals_no_type_filter() {
    let records = vec![
        with_types(with_cost(record("P1", 100, 2020), CostGroup::Kg420, 80), &["Office"]),
        with_cost(record("P2", 300, 2020), CostGroup::Kg420, 120),
    ];
    let factors = CorrectionFactorSettings::empty();

    let unfiltered = aggregate(&records, &FilterCriteria::default(), &factors);

    let empty_selection = FilterCriteria {
        selected_types: Default::default(),
        match_mode: TypeMatchMode::All,
        ..FilterCriteria::default()
    };
    assert_eq!(aggregate(&records, &empty_selection, &factors), unfiltered);

    let sentinel_selection = FilterCriteria {
        selected_types: [costs_rust::api::ALL_TYPES.to_string(), "Office".to_string()]
            .into_iter()
            .collect(),
        match_mode: TypeMatchMode::All,
        ..FilterCriteria::default()
    };
    assert_eq!(aggregate(&records, &sentinel_selection, &factors), unfiltered);
}

#[test]
fn test_csv_to_snapshot_flow() {
    let csv = "\
Include,Project ID,Title,Types,Area,KG220,KG420,KG440,Year
TRUE,P001,Office Tower,\"Office, Retail\",1000,100,200,150,2010
TRUE,P002,City Hotel,Hotel,2000,300,0,250,2020
FALSE,P003,Warehouse,Logistics,5000,999,999,999,2015
";
    let records = parsing::parse_csv(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);

    let mut factors = CorrectionFactorSettings::create_default();
    factors.set_factor(2010, 2.0);

    let snapshot = aggregate(&records, &FilterCriteria::default(), &factors);

    // P003 is excluded in the file; P001 and P002 remain.
    assert_eq!(snapshot.included_count, 2);
    assert_eq!(snapshot.overall.area, 1500.0);

    let kg220 = snapshot.summary_for(CostGroup::Kg220).unwrap();
    // P001: 100 * 2.0 = 200, P002: 300 * 1.0 = 300.
    assert_eq!(kg220.average, 250.0);
    assert_eq!(kg220.min, 200.0);
    assert_eq!(kg220.max, 300.0);

    // P002's KG420 is the sentinel: only P001 contributes.
    let kg420 = snapshot.summary_for(CostGroup::Kg420).unwrap();
    assert_eq!(kg420.average, 400.0);
    assert_eq!(kg420.std_dev, 0.0);
}

#[test]
fn test_load_aggregate_export_round() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("costs.csv");
    std::fs::write(
        &input,
        "Include,Project ID,Title,Types,Area,KG220,KG550,Year\n\
         TRUE,P001,School,Education,1500,180,40,2012\n\
         TRUE,P002,Clinic,Health,800,220,0,2016\n",
    )
    .unwrap();

    let records = parsing::load_csv(&input).unwrap();
    let factors = CorrectionFactorSettings::create_default();
    let criteria = FilterCriteria::default();
    let snapshot = aggregate(&records, &criteria, &factors);
    let working: Vec<&ProjectRecord> = records.iter().collect();

    let records_out = dir.path().join("records_out.csv");
    export::export_records(&records_out, &working, &factors).unwrap();
    let summary_out = dir.path().join("summary_out.csv");
    export::export_summary(&summary_out, &snapshot.cost_group_summaries).unwrap();

    let records_csv = std::fs::read_to_string(&records_out).unwrap();
    assert!(records_csv.contains("P001"));
    assert!(records_csv.contains("School"));

    let summary_csv = std::fs::read_to_string(&summary_out).unwrap();
    assert!(summary_csv.contains("KG220,Site Clearance & Preparation,200.00,180.00,220.00"));
    // KG550 has one contributor; KG440 none at all.
    assert!(summary_csv.contains("KG550"));
    assert!(!summary_csv.contains("KG440"));

    let mut report = Vec::new();
    export::write_report(&mut report, &snapshot, &working).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("Included records: 2"));
    assert!(report.contains("Average Area: 1150.0 sqm"));

    let json = export::snapshot_to_json(&snapshot).unwrap();
    let parsed: AggregateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_excluded_and_filtered_drop_to_empty_snapshot() {
    let records = vec![
        excluded(with_cost(record("P1", 100, 2020), CostGroup::Kg220, 100)),
        with_cost(record("P2", 50, 2020), CostGroup::Kg220, 100),
    ];
    let criteria = FilterCriteria {
        min_area: Some(80),
        ..FilterCriteria::default()
    };

    let snapshot = aggregate(&records, &criteria, &CorrectionFactorSettings::empty());

    assert_eq!(snapshot, AggregateSnapshot::empty());
}

#[test]
fn test_mixed_type_filtering_end_to_end() {
    let records = vec![
        with_types(with_cost(record("P1", 100, 2020), CostGroup::Kg220, 100), &["Office"]),
        with_types(
            with_cost(record("P2", 200, 2020), CostGroup::Kg220, 200),
            &["Office", "Retail", "Hotel"],
        ),
        with_types(with_cost(record("P3", 300, 2020), CostGroup::Kg220, 300), &["Retail"]),
    ];
    let factors = CorrectionFactorSettings::empty();

    let any_mode = FilterCriteria {
        selected_types: ["Office".to_string(), "Retail".to_string()]
            .into_iter()
            .collect(),
        match_mode: TypeMatchMode::Any,
        ..FilterCriteria::default()
    };
    let snapshot = aggregate(&records, &any_mode, &factors);
    assert_eq!(snapshot.included_count, 3);

    let all_mode = FilterCriteria {
        match_mode: TypeMatchMode::All,
        ..any_mode
    };
    let snapshot = aggregate(&records, &all_mode, &factors);
    // Only P2 carries both selected types.
    assert_eq!(snapshot.included_count, 1);
    assert_eq!(snapshot.summary_for(CostGroup::Kg220).unwrap().average, 200.0);
}
