use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use custclean_cli::types::{CheckRunResult, CleanRunResult, FileSummary};

pub fn print_clean_summary(result: &CleanRunResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if !result.files.is_empty() {
        println!("{}", clean_table(&result.files));
    }
    print_errors(&result.errors);
}

fn clean_table(files: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
        header_cell("Duplicates"),
        header_cell("Incomplete"),
        header_cell("Corrections"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);

    let mut total_in = 0usize;
    let mut total_out = 0usize;
    let mut total_dropped = 0usize;
    let mut total_duplicates = 0usize;
    let mut total_incomplete = 0usize;
    let mut total_corrections = 0usize;
    for summary in files {
        let report = &summary.report;
        total_in += report.rows_input;
        total_out += report.rows_output;
        total_dropped += report.rows_dropped;
        total_duplicates += report.duplicates_removed;
        total_incomplete += report.rows_dropped_na;
        total_corrections += report.corrections();
        table.add_row(vec![
            Cell::new(summary.file_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(report.rows_input),
            Cell::new(report.rows_output),
            count_cell(report.rows_dropped, Color::Red),
            count_cell(report.duplicates_removed, Color::Yellow),
            count_cell(report.rows_dropped_na, Color::Yellow),
            count_cell(report.corrections(), Color::Yellow),
            written_cell(summary.outputs.is_some()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_in).add_attribute(Attribute::Bold),
        Cell::new(total_out).add_attribute(Attribute::Bold),
        count_cell(total_dropped, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_duplicates, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_incomplete, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_corrections, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn print_check_summary(result: &CheckRunResult) {
    println!("Checked: {}", result.dir.display());
    if !result.reports.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("File"),
            header_cell("Rows"),
            header_cell("Issues"),
            header_cell("Violations"),
        ]);
        apply_summary_table_style(&mut table);
        for index in 1..=3 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for report in &result.reports {
            table.add_row(vec![
                Cell::new(&report.source)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(report.rows),
                count_cell(report.issues.len(), Color::Red),
                count_cell(report.violation_count(), Color::Red),
            ]);
        }
        println!("{table}");
    }
    print_issue_table(result);
    print_errors(&result.errors);
}

fn print_issue_table(result: &CheckRunResult) {
    if result.reports.iter().all(|report| report.is_clean()) {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Code"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Rule"),
        header_cell("Examples"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in &result.reports {
        for issue in &report.issues {
            let examples = if issue.examples.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(issue.examples.join(", "))
            };
            table.add_row(vec![
                Cell::new(&report.source).fg(Color::Blue),
                Cell::new(issue.rule.code()).fg(Color::Red),
                Cell::new(&issue.column),
                Cell::new(issue.count).fg(Color::Red),
                Cell::new(issue.rule.description()),
                examples,
            ]);
        }
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in errors {
        eprintln!("- {error}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
