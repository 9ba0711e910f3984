//! Plain-text dumps for inspecting a generation.
//!
//! Pure functions: they never touch the automaton, so they can be called
//! between generations without affecting development.

use crate::field::DiscriminatorField;
use crate::visited::VisitedMask;

/// One line per row, one two-character glyph per cell: `" +"` for a
/// positive discriminator, `" -"` for negative, `"  "` for zero.
///
/// ```
/// use pelt_core::GridBounds;
/// use pelt_engine::{render_discs, DiscriminatorField};
///
/// let mut f = DiscriminatorField::new(GridBounds::new(3, 1).unwrap());
/// f.set(0, 0, 1.0).unwrap();
/// f.set(2, 0, -1.0).unwrap();
/// assert_eq!(render_discs(&f), "[ +   -]\n");
/// ```
pub fn render_discs(field: &DiscriminatorField) -> String {
    let width = field.bounds().width() as usize;
    let mut out = String::new();
    for row in field.as_slice().chunks(width) {
        out.push('[');
        for &d in row {
            out.push_str(if d > 0.0 {
                " +"
            } else if d < 0.0 {
                " -"
            } else {
                "  "
            });
        }
        out.push_str("]\n");
    }
    out
}

/// One line per row: `1` for visited, `0` otherwise, space separated.
pub fn render_visited(mask: &VisitedMask) -> String {
    let width = mask.bounds().width() as usize;
    mask.as_slice()
        .chunks(width)
        .map(|row| {
            let cells: Vec<&str> = row.iter().map(|&v| if v { "1" } else { "0" }).collect();
            format!("[{}]\n", cells.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelt_core::GridBounds;

    #[test]
    fn discs_render_signs_per_row() {
        let mut f = DiscriminatorField::new(GridBounds::new(2, 2).unwrap());
        f.set(0, 0, 2.0).unwrap();
        f.set(1, 1, -0.5).unwrap();
        assert_eq!(render_discs(&f), "[ +  ]\n[   -]\n");
    }

    #[test]
    fn visited_render() {
        let mut m = VisitedMask::new(GridBounds::new(3, 2).unwrap());
        m.set(1, 0).unwrap();
        m.set(2, 1).unwrap();
        assert_eq!(render_visited(&m), "[0 1 0]\n[0 0 1]\n");
    }
}
