//! Textual rendering of location reports.
//!
//! Color is governed by the global `colored` override, set once from the
//! `--color` flag; with the override off the same layout renders plain.

use crate::domain::model::LocationReport;
use colored::Colorize;
use std::fmt::Write;

pub fn render_reports(reports: &[LocationReport]) -> String {
    let mut out = String::new();
    for report in reports {
        render_one(&mut out, report);
    }
    out
}

fn render_one(out: &mut String, report: &LocationReport) {
    let _ = writeln!(
        out,
        "\n{}",
        format!("Report for Location: {}", report.location)
            .bold()
            .blue()
    );

    let _ = writeln!(out, "\n{}", "Phones:".bold().green());
    for phone in &report.phones {
        let _ = writeln!(
            out,
            "{} {}, {} {}, {} {}",
            "Name:".bold().cyan(),
            phone.name,
            "Description:".bold().cyan(),
            phone.description,
            "Device Pool:".bold().cyan(),
            phone.device_pool
        );
    }

    let _ = writeln!(out, "\n{}", "Users:".bold().green());
    for user in &report.users {
        let _ = writeln!(
            out,
            "{} {}, {} {} {}",
            "User ID:".bold().cyan(),
            user.user_id,
            "Name:".bold().cyan(),
            user.first_name,
            user.last_name
        );
    }

    let _ = writeln!(out, "\n{}", "Directory Numbers:".bold().green());
    for dn in &report.directory_numbers {
        let _ = writeln!(
            out,
            "{} {}, {} {}",
            "Pattern:".bold().cyan(),
            dn.pattern,
            "Description:".bold().cyan(),
            dn.description.as_deref().unwrap_or("")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DirectoryNumber, Phone, User};

    fn sample_report() -> LocationReport {
        LocationReport {
            location: "Campus A".to_string(),
            phones: vec![Phone {
                name: "SEP001122334455".to_string(),
                description: "Campus A - John Smith - 1001".to_string(),
                device_pool: "Default".to_string(),
            }],
            users: vec![User {
                user_id: "jsmith".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
            }],
            directory_numbers: vec![DirectoryNumber {
                pattern: "1001".to_string(),
                description: Some("Campus A - John Smith - 1001".to_string()),
            }],
        }
    }

    #[test]
    fn renders_all_sections() {
        colored::control::set_override(false);
        let out = render_reports(&[sample_report()]);
        assert!(out.contains("Report for Location: Campus A"));
        assert!(out.contains("Name: SEP001122334455"));
        assert!(out.contains("User ID: jsmith, Name: John Smith"));
        assert!(out.contains("Pattern: 1001"));
    }

    #[test]
    fn renders_missing_description_as_blank() {
        colored::control::set_override(false);
        let mut report = sample_report();
        report.directory_numbers[0].description = None;
        let out = render_reports(&[report]);
        assert!(out.contains("Pattern: 1001, Description: \n"));
    }

    #[test]
    fn empty_report_list_renders_nothing() {
        assert!(render_reports(&[]).is_empty());
    }
}
