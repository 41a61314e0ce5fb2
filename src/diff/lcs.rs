// src/diff/lcs.rs
use super::DiffLine;

/// Suffix LCS lengths: `get(i, j)` is the LCS of `old[i..]` and `new[j..]`.
struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    // Indexing is safe: i <= old.len() and j <= new.len() at every call site,
    // and the table is (old.len() + 1) x (new.len() + 1).
    #[allow(clippy::indexing_slicing)]
    fn build(old: &[&str], new: &[&str]) -> Self {
        let cols = new.len() + 1;
        let mut table = Self {
            cols,
            cells: vec![0; (old.len() + 1) * cols],
        };

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                let value = if old[i] == new[j] {
                    table.get(i + 1, j + 1) + 1
                } else {
                    table.get(i + 1, j).max(table.get(i, j + 1))
                };
                table.cells[i * cols + j] = value;
            }
        }
        table
    }

    #[allow(clippy::indexing_slicing)]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}

/// Walks the table front to back. Ties prefer removing, so a replaced run
/// comes out as all its removals followed by all its additions.
#[allow(clippy::indexing_slicing)]
pub(super) fn diff(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    let table = LcsTable::build(old, new);
    let mut out = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            out.push(DiffLine::Unchanged {
                old_line: i + 1,
                new_line: j + 1,
                content: old[i].to_string(),
            });
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            out.push(removed(old, i));
            i += 1;
        } else {
            out.push(added(new, j));
            j += 1;
        }
    }

    out.extend((i..old.len()).map(|k| removed(old, k)));
    out.extend((j..new.len()).map(|k| added(new, k)));
    out
}

#[allow(clippy::indexing_slicing)]
fn removed(old: &[&str], i: usize) -> DiffLine {
    DiffLine::Removed {
        old_line: i + 1,
        content: old[i].to_string(),
    }
}

#[allow(clippy::indexing_slicing)]
fn added(new: &[&str], j: usize) -> DiffLine {
    DiffLine::Added {
        new_line: j + 1,
        content: new[j].to_string(),
    }
}
