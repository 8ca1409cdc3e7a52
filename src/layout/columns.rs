//! Splitting the fixed-order section list across two display columns.

/// Decides where the second display column opens.
///
/// Sections are walked in fixed order with a running entry count. The switch
/// happens at most once, before placing the next section, the first time the
/// running count reaches or exceeds half of the total entry count. Returns
/// the index of the first section belonging to the second column, or `None`
/// when every section stays in the first column (a late section holding most
/// of the deck never triggers the switch).
///
/// A section is never split; empty sections still advance the walk, so a
/// total of zero opens an (empty) second column immediately.
#[must_use]
pub fn column_split_index(section_sizes: &[usize]) -> Option<usize> {
    let total: usize = section_sizes.iter().sum();
    let mut placed = 0;

    for (index, size) in section_sizes.iter().enumerate() {
        // Halfway check uses the true half, not integer division.
        if placed * 2 >= total {
            return Some(index);
        }
        placed += size;
    }

    None
}
