use drawing_ingest::{decode_file_list, parse_index_text};
use drawing_map::{
    build_mappings, build_mappings_with, detect_alignment_offset, detect_offset_for,
    normalize_sheet_number,
};
use drawing_model::{AlignmentPolicy, DecodedFilename, IndexEntry};

fn drawing_set(count: u64) -> Vec<DecodedFilename> {
    let names: Vec<String> = (1..=count).map(|i| format!("525_101_{i:03}.pdf")).collect();
    decode_file_list(&names).recognized
}

#[test]
fn normalizer_scenarios() {
    assert_eq!(normalize_sheet_number("A-2.05"), "A_2_05");
    assert_eq!(normalize_sheet_number("a3.5"), "A_3_5");
}

#[test]
fn leading_pages_keep_original_names() {
    let files = drawing_set(5);
    let entries = vec![
        IndexEntry::new("G-001", "Cover"),
        IndexEntry::new("G-002", "Index"),
        IndexEntry::new("A-1.01", "Plan"),
    ];
    let mappings = build_mappings(&files, &entries, Some(3));

    assert_eq!(mappings[0].new_name, "525_101_001.pdf");
    assert_eq!(mappings[1].new_name, "525_101_002.pdf");
    assert_eq!(mappings[2].new_name, "525_101_003_G_001.pdf");
    assert_eq!(mappings[2].sheet_title.as_deref(), Some("Cover"));
    assert_eq!(mappings[4].new_name, "525_101_005_A_1_01.pdf");
    assert_eq!(mappings[4].sheet_number.as_deref(), Some("A-1.01"));
}

#[test]
fn undetermined_offset_renames_nothing() {
    let files = drawing_set(3);
    let mappings = build_mappings(&files, &[], None);
    assert_eq!(mappings.len(), 3);
    for mapping in &mappings {
        assert_eq!(mapping.new_name, mapping.file.original_name);
        assert!(mapping.sheet_number.is_none());
        assert!(mapping.sheet_title.is_none());
    }
}

#[test]
fn more_files_than_entries() {
    let files = drawing_set(10);
    let entries = vec![IndexEntry::new("A-1.01", "Plan")];
    let mappings = build_mappings(&files, &entries, Some(3));

    assert!(mappings[2].sheet_number.is_some());
    assert!(mappings[3].sheet_number.is_none());
    assert_eq!(mappings.iter().filter(|m| m.is_renamed()).count(), 1);
}

#[test]
fn policies_disagree_on_gaps() {
    // Page 005 is missing from the set.
    let names = [
        "525_101_001.pdf",
        "525_101_002.pdf",
        "525_101_003.pdf",
        "525_101_004.pdf",
        "525_101_006.pdf",
    ];
    let files = decode_file_list(&names).recognized;
    let entries = vec![
        IndexEntry::new("A1", "One"),
        IndexEntry::new("A2", "Two"),
        IndexEntry::new("A3", "Three"),
        IndexEntry::new("A4", "Four"),
    ];

    let by_order = build_mappings(&files, &entries, Some(2));
    assert_eq!(by_order[4].sheet_number, None);
    assert_eq!(by_order[3].sheet_number.as_deref(), Some("A3"));

    let by_position = build_mappings_with(&files, &entries, Some(1), AlignmentPolicy::Position);
    assert_eq!(by_position[4].sheet_number.as_deref(), Some("A4"));
    assert_eq!(by_position[4].new_name, "525_101_006_A_4.pdf");
}

#[test]
fn end_to_end_with_detected_offset() {
    let files = drawing_set(5);
    let text = "\
DRAWING INDEX
SHEET NO.      SHEET TITLE
A-1.01         First Floor Plan
A-1.02         Second Floor Plan
FP-1.01        fire sprinkler plan
";
    let entries = parse_index_text(text);
    let offset = detect_alignment_offset(&files, &entries);
    assert_eq!(offset, Some(3));

    let mappings = build_mappings(&files, &entries, offset);
    let names: Vec<&str> = mappings.iter().map(|m| m.new_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "525_101_001.pdf",
            "525_101_002.pdf",
            "525_101_003_A_1_01.pdf",
            "525_101_004_A_1_02.pdf",
            "525_101_005_FP_1_01.pdf",
        ]
    );
    assert_eq!(
        mappings[4].sheet_title.as_deref(),
        Some("Fire Sprinkler Plan")
    );

    let position_offset = detect_offset_for(AlignmentPolicy::Position, &files, &entries);
    let by_position = build_mappings_with(&files, &entries, position_offset, AlignmentPolicy::Position);
    assert_eq!(by_position, mappings);
}
