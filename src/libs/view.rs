use super::student::{Student, COURSES, TABLE_HEADERS};
use prettytable::{Cell, Row, Table};
use std::collections::HashSet;

pub struct View {}

impl View {
    /// Builds the students table; rows whose id is in `highlighted` are bold green.
    pub fn students_table(students: &[Student], highlighted: &HashSet<i64>) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(TABLE_HEADERS.iter().map(|h| Cell::new(h).style_spec("b")).collect()));
        for student in students {
            let id = student.id.to_string();
            let cells: [&str; 4] = [id.as_str(), &student.name, &student.course, &student.mobile];
            let row = if highlighted.contains(&student.id) {
                Row::new(cells.iter().map(|c| Cell::new(c).style_spec("bFg")).collect())
            } else {
                Row::new(cells.iter().map(|c| Cell::new(c)).collect())
            };
            table.add_row(row);
        }

        table
    }

    pub fn students(students: &[Student]) {
        Self::students_table(students, &HashSet::new()).printstd();
    }

    pub fn students_highlighted(students: &[Student], highlighted: &HashSet<i64>) {
        Self::students_table(students, highlighted).printstd();
    }

    pub fn courses() {
        let mut table = Table::new();
        for course in &COURSES[1..] {
            table.add_row(Row::new(vec![Cell::new(course)]));
        }
        table.printstd();
    }
}
