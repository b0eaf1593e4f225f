//! Diagnostic rendering for [`DisjointSets`].
//!
//! The layout lists the size, height and set count, one row of pipes per rank
//! level, the parent and entry rows, and finally the grouped membership:
//!
//! ```text
//! Size:           6
//! Height:         1
//! Number of Sets: 4
//!          |       |
//! Parent:  0 0 2 3 4 4
//! Entry:   0 1 2 3 4 5
//! Sets: {0*,1}, {2}, {3}, {4*,5}
//! ```

use std::fmt;

use super::DisjointSets;

impl DisjointSets {
    fn column_width(&self) -> usize {
        let mut largest = self.len().saturating_sub(1);
        let mut digits = 1;
        while largest >= 10 {
            largest /= 10;
            digits += 1;
        }
        digits + 1
    }

    fn members_by_root(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.len()];
        for element in 0..self.len() {
            groups[self.root_of(element)].push(element);
        }
        groups
    }
}

impl fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size:           {}", self.len())?;
        writeln!(f, "Height:         {}", self.max_height)?;
        writeln!(f, "Number of Sets: {}", self.set_count)?;

        let width = self.column_width();
        for level in (1..=self.max_height).rev() {
            f.write_str("        ")?;
            for &rank in &self.rank {
                let mark = if rank >= level { '|' } else { ' ' };
                write!(f, "{mark:>width$}")?;
            }
            writeln!(f)?;
        }

        f.write_str("Parent: ")?;
        for parent in &self.parent {
            write!(f, "{parent:>width$}")?;
        }
        f.write_str("\nEntry:  ")?;
        for entry in 0..self.len() {
            write!(f, "{entry:>width$}")?;
        }

        f.write_str("\nSets: ")?;
        let mut first_set = true;
        for (root, members) in self.members_by_root().into_iter().enumerate() {
            if members.is_empty() {
                continue;
            }
            if !first_set {
                f.write_str(", ")?;
            }
            first_set = false;

            f.write_str("{")?;
            for (position, member) in members.into_iter().enumerate() {
                if position > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{member}")?;
                if member == root && self.rank[root] != 0 {
                    f.write_str("*")?;
                }
            }
            f.write_str("}")?;
        }

        Ok(())
    }
}
