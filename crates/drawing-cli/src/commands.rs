use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use drawing_cli::pipeline::{FolderRequest, reconcile_documents, run_folder};
use drawing_ingest::SystemExtractor;
use drawing_model::DISCIPLINES;
use drawing_report::{ExportMetadata, apply_renames, write_csv};

use crate::cli::{ExportArgs, ReconcileArgs, RenameArgs};
use crate::summary::{apply_table_style, header_cell, print_rename_report, print_summary};

pub fn run_disciplines() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Discipline")]);
    apply_table_style(&mut table);
    for (code, name) in DISCIPLINES.iter() {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_rename(args: &RenameArgs) -> Result<()> {
    let request = FolderRequest {
        folder: args.folder.clone(),
        index_page: args.index_page,
        index_file: args.index_file.clone(),
        first_drawing: args.first_drawing,
        policy: args.alignment.into(),
    };
    let result = run_folder(&request, &SystemExtractor::new())?;

    if args.show_text {
        let text = result.index_text.as_deref().unwrap_or_default();
        eprintln!("--- index text ---\n{text}\n--- end index text ---");
    }
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize result")?;
        println!("{json}");
    } else {
        print_summary(&result);
    }

    if let Some(path) = &args.csv {
        write_csv(path, &result.mappings, &export_metadata(&args.export))?;
        if !args.json {
            println!("CSV written to {}", path.display());
        }
    }

    if args.rename {
        let report = apply_renames(&result.folder, &result.mappings)?;
        if !args.json {
            print_rename_report(&report);
        }
    } else if !args.json && result.rename_count() > 0 {
        println!("Dry run: pass --rename to apply");
    }
    Ok(())
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<()> {
    let response = reconcile_documents(
        &args.index,
        &args.files,
        args.first_drawing,
        args.alignment.into(),
        &SystemExtractor::new(),
    )?;
    let json = serde_json::to_string_pretty(&response).context("serialize response")?;
    println!("{json}");
    Ok(())
}

fn export_metadata(args: &ExportArgs) -> ExportMetadata {
    ExportMetadata {
        project_title: args.project_title.clone(),
        drawing_date: args.drawing_date.clone(),
        keywords: args.keywords.clone(),
        notes: args.notes.clone(),
        contract_number: args.contract_number.clone(),
    }
}
