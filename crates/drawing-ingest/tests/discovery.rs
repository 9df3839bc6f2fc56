//! Tests for drawing folder discovery.

use drawing_ingest::{find_index_page, read_file_list, scan_folder};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("drawing_ingest_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "%PDF-1.4\n").expect("write file");
    path
}

#[test]
fn scans_drawings_and_skips_other_files() {
    let dir = temp_dir();
    for order in 1..=12 {
        let _ = touch(&dir, &format!("525_101_{order:03}.pdf"));
    }
    let _ = touch(&dir, "525_101_index.pdf");
    let _ = touch(&dir, "cover notes.pdf");
    let _ = touch(&dir, "525_101_013.txt");
    let _ = touch(&dir, "Thumbs.db");

    let scan = scan_folder(&dir).expect("scan folder");

    assert_eq!(scan.recognized.len(), 12);
    assert_eq!(scan.recognized[0].print_order, "001");
    assert_eq!(scan.recognized[11].print_order, "012");
    assert_eq!(
        scan.unrecognized,
        vec!["525_101_index.pdf".to_string(), "cover notes.pdf".to_string()]
    );

    let index_page = find_index_page(&scan.recognized, 2).expect("index page");
    assert_eq!(index_page.original_name, "525_101_002.pdf");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn reads_file_list_document() {
    let dir = temp_dir();
    let list = dir.join("files.txt");
    fs::write(
        &list,
        "# pages exported from set 101\r\n525_101_001.pdf\r\n\r\n525_101_002.pdf\r\n",
    )
    .expect("write list");

    let names = read_file_list(&list).expect("read list");
    assert_eq!(
        names,
        vec!["525_101_001.pdf".to_string(), "525_101_002.pdf".to_string()]
    );

    assert!(read_file_list(&dir.join("missing.txt")).is_err());

    fs::remove_dir_all(&dir).expect("cleanup");
}
