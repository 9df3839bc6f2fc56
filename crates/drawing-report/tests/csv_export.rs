//! Integration tests for CSV export and renames.

use drawing_model::{DecodedFilename, IndexEntry, Mapping};
use drawing_report::{ExportMetadata, apply_renames, build_records, write_csv, write_csv_to};
use tempfile::TempDir;

fn file(order: &str) -> DecodedFilename {
    DecodedFilename {
        location_number: "525".to_string(),
        drawing_set_number: "101".to_string(),
        print_order: order.to_string(),
        print_order_value: order.parse().unwrap(),
        extension: ".pdf".to_string(),
        original_name: format!("525_101_{order}.pdf"),
    }
}

fn sample_mappings() -> Vec<Mapping> {
    vec![
        Mapping::unmatched(file("001")),
        Mapping::matched(
            file("002"),
            &IndexEntry::new("A1.01", "Floor Plan"),
            "525_101_002_A_1_01.pdf".to_string(),
        ),
        Mapping::matched(
            file("003"),
            &IndexEntry::new("Z9", "Misc, Details"),
            "525_101_003_Z_9.pdf".to_string(),
        ),
    ]
}

fn sample_metadata() -> ExportMetadata {
    ExportMetadata {
        project_title: "Test Project".to_string(),
        drawing_date: "2024".to_string(),
        keywords: "test".to_string(),
        notes: "Some notes here".to_string(),
        contract_number: "C-99887".to_string(),
    }
}

#[test]
fn csv_matches_table_schema() {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, &sample_mappings(), &sample_metadata()).expect("write csv");
    let output = String::from_utf8(buffer)
        .expect("utf8 csv")
        .replace("\r\n", "\n");

    insta::assert_snapshot!(output.trim_end(), @r#"
    NewName,LocationNumber,DrawingNumber,ProjectTitle,DrawingDate,SheetTitle,Keywords,SheetNumber,Discipline,Notes,ContractNumber
    525_101_001.pdf,525,101.0,Test Project,2024,,test,,Unknown,Some notes here,C-99887
    525_101_002_A_1_01.pdf,525,101.0,Test Project,2024,Floor Plan,test,A1.01,Architectural,Some notes here,C-99887
    525_101_003_Z_9.pdf,525,101.0,Test Project,2024,"Misc, Details",test,Z9,Unknown,Some notes here,C-99887
    "#);
}

#[test]
fn long_metadata_is_truncated() {
    let metadata = ExportMetadata {
        notes: "n".repeat(600),
        contract_number: "K".repeat(45),
        ..ExportMetadata::default()
    };
    let records = build_records(&sample_mappings(), &metadata);
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.notes.chars().count(), 500);
        assert_eq!(record.contract_number.chars().count(), 30);
    }
}

#[test]
fn writes_csv_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.csv");
    write_csv(&path, &sample_mappings(), &sample_metadata()).expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.len(), 11);
    assert_eq!(&headers[0], "NewName");
    assert_eq!(&headers[10], "ContractNumber");
    assert_eq!(reader.records().count(), 3);
}

#[test]
fn renames_changed_files_and_skips_existing_targets() {
    let dir = TempDir::new().expect("temp dir");
    for name in ["525_101_001.pdf", "525_101_002.pdf", "525_101_003.pdf"] {
        std::fs::write(dir.path().join(name), name).expect("write drawing");
    }
    std::fs::write(dir.path().join("525_101_003_Z_9.pdf"), "older").expect("write target");

    let report = apply_renames(dir.path(), &sample_mappings()).expect("apply renames");

    assert_eq!(
        report.renamed,
        vec![(
            "525_101_002.pdf".to_string(),
            "525_101_002_A_1_01.pdf".to_string()
        )]
    );
    assert_eq!(report.skipped_existing, vec!["525_101_003_Z_9.pdf".to_string()]);
    assert!(dir.path().join("525_101_001.pdf").exists());
    assert!(!dir.path().join("525_101_002.pdf").exists());
    assert!(dir.path().join("525_101_003.pdf").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("525_101_003_Z_9.pdf")).unwrap(),
        "older"
    );
}
