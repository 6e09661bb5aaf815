#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Picture output: plain text, ANSI-coloured text and (X)HTML tables.
//!
//! The text renderers draw the clue margins around a box-bordered grid,
//! two characters per cell. Cells still undetermined render as `<>` so a
//! partial picture remains readable.

use crate::solver::clue::Clue;
use crate::solver::{Cell, Clues, Grid};

const LIGHT: &str = "\x1B[1;37;45m";
const LIGHT2: &str = "\x1B[1;37;46m";
const RESET: &str = "\x1B[0m";

/// Output flavour selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Plain layout with alternating column backgrounds.
    Color,
    Html,
    Xhtml,
}

/// Renders `grid` with its clue margins in the requested style.
#[must_use]
pub fn render(grid: &Grid, clues: &Clues, style: Style) -> String {
    match style {
        Style::Plain => render_text(grid, clues, false),
        Style::Color => render_text(grid, clues, true),
        Style::Html => render_html(grid, clues, false),
        Style::Xhtml => render_html(grid, clues, true),
    }
}

/// Widest clue in `clues`, and at least one so the margin never vanishes.
fn margin(clues: &[Clue]) -> usize {
    clues.iter().map(Clue::len).max().unwrap_or(0).max(1)
}

fn render_text(grid: &Grid, clues: &Clues, color: bool) -> String {
    let lmax = margin(clues.rows());
    let tmax = margin(clues.cols());
    let mut out = String::new();

    // Column index picks the background so adjacent columns stay apart.
    let paint = |out: &mut String, col: usize, text: &str| {
        if color {
            out.push_str(if col & 1 == 1 { LIGHT } else { LIGHT2 });
            out.push_str(text);
            out.push_str(RESET);
        } else {
            out.push_str(text);
        }
    };

    for i in 0..tmax {
        for _ in 0..=2 * lmax {
            out.push(' ');
        }
        for (j, clue) in clues.cols().iter().enumerate() {
            match clue.runs().get(i) {
                Some(block) => paint(&mut out, j, &format!("{block:2}")),
                None => paint(&mut out, j, "  "),
            }
        }
        out.push('\n');
    }

    out.push_str(&" ".repeat(2 * lmax));
    out.push('+');
    out.push_str(&"--".repeat(grid.cols()));
    out.push_str("+\n");

    for (r, clue) in clues.rows().iter().enumerate() {
        for j in 0..lmax {
            match clue.runs().get(j) {
                Some(block) => paint(&mut out, j, &format!("{block:2}")),
                None => paint(&mut out, j, "  "),
            }
        }
        out.push('|');
        for c in 0..grid.cols() {
            let text = match grid.cell(r, c) {
                Cell::Unknown => "<>",
                Cell::Empty => "  ",
                Cell::Filled => "##",
            };
            paint(&mut out, c, text);
        }
        out.push_str("|\n");
    }

    out.push_str(&" ".repeat(2 * lmax));
    out.push('+');
    out.push_str(&"--".repeat(grid.cols()));
    out.push_str("+\n\n");

    out
}

fn render_html(grid: &Grid, clues: &Clues, xhtml: bool) -> String {
    let lmax = margin(clues.rows());
    let tmax = margin(clues.cols());
    let mut out = String::new();

    if xhtml {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
             \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n",
        );
        out.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n");
    } else {
        out.push_str("<html>\n");
    }
    out.push_str(
        "<head>\n\
         <style type=\"text/css\">\n\
         \x20 td, th {font: 8pt Arial, sans-serif; width: 11pt; height: 11pt;}\n\
         \x20 td.full  {background-color: #000000; color: white; border-left: solid 1px #808080; border-top: solid 1px #808080;}\n\
         \x20 td.empty {background-color: #F0F0F0; color: red; border-left: solid 1px #808080; border-top: solid 1px #808080;}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <table border=\"0\" cellpadding=\"0\" cellspacing=\"0\">",
    );

    let th = |out: &mut String, block: Option<&u16>| match block {
        Some(block) => out.push_str(&format!("<th>{block}</th>")),
        None => out.push_str("<th>&nbsp;</th>"),
    };

    for i in 0..tmax {
        out.push_str("<tr>");
        for _ in 0..lmax {
            out.push_str("<th></th>");
        }
        for clue in clues.cols() {
            th(&mut out, clue.runs().get(i));
        }
        out.push_str("</tr>\n");
    }

    for (r, clue) in clues.rows().iter().enumerate() {
        out.push_str("<tr>");
        for j in 0..lmax {
            th(&mut out, clue.runs().get(j));
        }
        for c in 0..grid.cols() {
            out.push_str(match grid.cell(r, c) {
                Cell::Unknown => "<td class=\"empty\">?</td>",
                Cell::Empty => "<td class=\"empty\">&nbsp;</td>",
                Cell::Filled => "<td class=\"full\">&nbsp;</td>",
            });
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveOutcome, Solver};

    fn chessboard() -> (Grid, Clues) {
        let mut solver = Solver::new(2, 2, vec![vec![1]; 2], vec![vec![1]; 2]).unwrap();
        match solver.solve() {
            SolveOutcome::Solved(grid) => (grid, solver.clues().clone()),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_plain_layout() {
        let (grid, clues) = chessboard();
        let expected = "    1 1\n\
                        \x20 +----+\n\
                        \x201|  ##|\n\
                        \x201|##  |\n\
                        \x20 +----+\n\n";
        assert_eq!(render(&grid, &clues, Style::Plain), expected);
    }

    #[test]
    fn test_plain_renders_unknown_cells() {
        let clues = Clues::from_runs(vec![vec![1]; 2], vec![vec![1]; 2]);
        let grid = Grid::build(2, 2, &clues).unwrap();
        let text = render(&grid, &clues, Style::Plain);
        assert!(text.contains("<><>"));
    }

    #[test]
    fn test_color_wraps_cells() {
        let (grid, clues) = chessboard();
        let text = render(&grid, &clues, Style::Color);
        assert!(text.contains(LIGHT));
        assert!(text.contains(LIGHT2));
        assert!(text.contains(RESET));
        // Stripping the escapes recovers the plain rendering.
        let stripped = text
            .replace(LIGHT, "")
            .replace(LIGHT2, "")
            .replace(RESET, "");
        assert_eq!(stripped, render(&grid, &clues, Style::Plain));
    }

    #[test]
    fn test_html_table() {
        let (grid, clues) = chessboard();
        let html = render(&grid, &clues, Style::Html);
        assert!(html.starts_with("<html>\n"));
        assert_eq!(html.matches("<td class=\"full\">&nbsp;</td>").count(), 2);
        assert_eq!(html.matches("<td class=\"empty\">&nbsp;</td>").count(), 2);
        assert_eq!(html.matches("<th>1</th>").count(), 4);
        assert!(html.ends_with("</table>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_xhtml_prolog() {
        let (grid, clues) = chessboard();
        let xhtml = render(&grid, &clues, Style::Xhtml);
        assert!(xhtml.starts_with("<?xml version=\"1.0\""));
        assert!(xhtml.contains("<html xmlns=\"http://www.w3.org/1999/xhtml\">"));
    }

    #[test]
    fn test_wide_clue_margins() {
        // Three-block row clues widen the left margin to three fields.
        let clues = Clues::from_runs(
            vec![vec![1, 1, 1], vec![5]],
            vec![vec![2], vec![], vec![2], vec![], vec![2]],
        );
        let grid = Grid::build(2, 5, &clues).unwrap();
        let text = render(&grid, &clues, Style::Plain);
        let border = text
            .lines()
            .find(|l| l.contains('+'))
            .unwrap();
        assert_eq!(border, "      +----------+");
        assert!(text.contains(" 1 1 1|"));
        assert!(text.contains(" 5    |"));
    }
}
