//! Plain-text table rendering for record listings.

use std::fmt;

use domain::{Instructor, Student};

/// Message printed in place of an empty table.
pub const EMPTY_TABLE: &str = "No records found.";

const COLUMN_GAP: &str = "  ";

/// Column-aligned text table.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", EMPTY_TABLE);
        }

        let widths = self.widths();
        write_line(f, self.headers.iter().copied(), &widths)?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(f, rule.iter().map(String::as_str), &widths)?;

        for row in &self.rows {
            write_line(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

pub fn students(students: &[Student]) -> Table {
    let mut table = Table::new(vec!["ID", "Name", "Age", "CPF", "Contact", "Course", "Phase"]);
    for s in students {
        table.push(vec![
            s.id.to_string(),
            s.name.clone(),
            s.age.to_string(),
            s.cpf.formatted(),
            s.contact.formatted(),
            s.course.clone(),
            s.phase.to_string(),
        ]);
    }
    table
}

pub fn instructors(instructors: &[Instructor]) -> Table {
    let mut table = Table::new(vec![
        "ID", "Name", "Age", "CPF", "Contact", "Campus", "Title", "Salary",
    ]);
    for i in instructors {
        table.push(vec![
            i.id.to_string(),
            i.name.clone(),
            i.age.to_string(),
            i.cpf.formatted(),
            i.contact.formatted(),
            i.campus.clone(),
            i.title.clone(),
            format!("{:.2}", i.salary),
        ]);
    }
    table
}
