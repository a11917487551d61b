use crate::Mechanism::species::{NSP, SPECIES_NAMES};
use prettytable::{Cell, Row, Table, row};

/// table of state variables and their time derivatives, one row per variable
pub fn derivative_table(state: &[f64; NSP], dy: &[f64; NSP]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["variable", "value", "d/dt"]);
    table.add_row(row!["T", format!("{:.6}", state[0]), format!("{:.6e}", dy[0])]);
    for i in 1..NSP {
        table.add_row(Row::new(vec![
            Cell::new(&format!("Y_{}", SPECIES_NAMES[i - 1])),
            Cell::new(&format!("{:.6e}", state[i])),
            Cell::new(&format!("{:.6e}", dy[i])),
        ]));
    }
    table
}

pub fn print_derivative_table(state: &[f64; NSP], dy: &[f64; NSP]) {
    derivative_table(state, dy).printstd();
}
