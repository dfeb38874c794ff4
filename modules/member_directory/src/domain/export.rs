//! Roster spreadsheet export

use crate::contract::Member;
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

const SHEET_NAME: &str = "Members";

/// Longest string an XLSX cell can hold, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

/// Header row of the exported sheet
pub const EXPORT_COLUMNS: [&str; 12] = [
    "S/N",
    "IDNumber",
    "FullName",
    "PhoneNumber",
    "Email",
    "Department",
    "DateOfBirth",
    "StateOfOrigin",
    "Interests",
    "Hobbies",
    "BestEngineeringQuote",
    "SubmittedAt",
];

/// `"<org> members list - YYYY-MM-DD.xlsx"`
pub fn export_file_name(org_name: &str, exported_on: NaiveDate) -> String {
    format!(
        "{} members list - {}.xlsx",
        org_name,
        exported_on.format("%Y-%m-%d")
    )
}

/// Render members into an XLSX buffer with a bold header row
pub fn build_roster_workbook(members: &[Member]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(EXPORT_COLUMNS) {
        sheet.write_string_with_format(0, col, title, &bold)?;
    }

    for (row, member) in (1u32..).zip(members) {
        sheet.write_number(row, 0, f64::from(row))?;

        let cells = [
            member.id_number.clone(),
            member.full_name.clone(),
            member.phone_number.clone(),
            member.email.clone(),
            member.department.clone(),
            member.date_of_birth.format("%Y-%m-%d").to_string(),
            member.state_of_origin.clone(),
            member.interests.clone(),
            member.hobbies.clone(),
            member.best_engineering_quote.clone(),
            member.submitted_at.to_rfc3339(),
        ];
        for (col, value) in (1u16..).zip(cells) {
            sheet.write_string(row, col, cell_text(&value))?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Clip `value` to [`MAX_CELL_CHARS`] on a char boundary
pub fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
