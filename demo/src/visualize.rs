use minestep_core::Grid;

/// Renders a grid as text: column indices, a rule, then `row|cells`.
///
/// Column indices are printed modulo 10 so every cell stays one character wide.
pub fn visualize(grid: &Grid) -> String {
    let width = usize::from(grid.width());
    let label_width = (usize::from(grid.height()) - 1).to_string().len();
    let indent = " ".repeat(label_width + 1);

    let header: Vec<String> = (0..width).map(|x| (x % 10).to_string()).collect();
    let separator = "─".repeat(width * 2 - 1);

    let mut out = format!("\n{indent}{}\n{indent}{}\n", header.join(" "), separator);
    for (y, row) in grid.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
        out.push_str(&format!("{:>label_width$}|{}\n", y, cells.join(" ")));
    }
    out
}
