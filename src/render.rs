use comfy_table::Table;

use crate::pipeline::HEADER;

/// Lays the ordered rows out as a bordered text table under the fixed
/// header. Presentation only; row order is the pipeline's.
pub fn build_table(rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.set_header(HEADER.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table
}
