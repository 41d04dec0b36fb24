//! Region filtering.
//!
//! A stable filter over each shape group: surviving faces keep their original
//! relative order, and an empty result is a valid outcome that flows through
//! the rest of the pipeline as zero-length arrays.

use surfgrid_core::RegionSelection;

use crate::model::Face;

/// Computes the keep flag for each face of one shape group.
///
/// The flags also drive filtering of the imported result rows, so per-cell
/// fields stay aligned with the surviving elements.
pub fn keep_flags<const N: usize>(faces: &[Face<N>], selection: &RegionSelection) -> Vec<bool> {
    faces.iter().map(|f| selection.keeps(f.region)).collect()
}

/// Returns the faces of one shape group that survive filtering, in order.
pub fn filter_faces<const N: usize>(
    faces: &[Face<N>],
    selection: &RegionSelection,
) -> Vec<Face<N>> {
    faces
        .iter()
        .filter(|f| selection.keeps(f.region))
        .copied()
        .collect()
}

/// Applies a keep mask to a parallel array.
pub fn apply_mask<T: Clone>(items: &[T], keep: &[bool]) -> Vec<T> {
    debug_assert_eq!(items.len(), keep.len());
    items
        .iter()
        .zip(keep)
        .filter(|(_, &k)| k)
        .map(|(item, _)| item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriFace;

    fn tri(element_id: u32, region: i32) -> TriFace {
        TriFace::new(element_id, region, [1, 2, 3])
    }

    /// A no-op filter returns all faces in original order.
    #[test]
    fn test_no_op_filter_keeps_everything() {
        let faces = vec![tri(1, 7), tri(2, 3), tri(3, 7)];
        let selection = RegionSelection::default();

        let kept = filter_faces(&faces, &selection);
        assert_eq!(kept, faces);
    }

    /// Include takes precedence over remove, which is ignored.
    #[test]
    fn test_include_precedence_over_remove() {
        let faces = vec![tri(1, 7), tri(2, 3), tri(3, 4), tri(4, 7)];
        let selection = RegionSelection {
            remove: vec![7],
            include: vec![7],
        };

        let kept = filter_faces(&faces, &selection);
        let ids: Vec<u32> = kept.iter().map(|f| f.element_id).collect();
        assert_eq!(ids, [1, 4]);
    }

    /// Remove drops only the listed regions.
    #[test]
    fn test_remove_filter() {
        let faces = vec![tri(1, 7), tri(2, 3), tri(3, 4)];
        let selection = RegionSelection {
            remove: vec![3],
            include: vec![],
        };

        let kept = filter_faces(&faces, &selection);
        let ids: Vec<u32> = kept.iter().map(|f| f.element_id).collect();
        assert_eq!(ids, [1, 3]);
    }

    /// Filtering everything out is valid and yields empty arrays.
    #[test]
    fn test_all_filtered_out_is_valid() {
        let faces = vec![tri(1, 7), tri(2, 7)];
        let selection = RegionSelection {
            remove: vec![],
            include: vec![99],
        };

        let kept = filter_faces(&faces, &selection);
        assert!(kept.is_empty());
    }

    /// Keep flags align with the face table and drive row masking.
    #[test]
    fn test_keep_flags_and_mask() {
        let faces = vec![tri(1, 7), tri(2, 3), tri(3, 7)];
        let selection = RegionSelection {
            remove: vec![3],
            include: vec![],
        };

        let keep = keep_flags(&faces, &selection);
        assert_eq!(keep, [true, false, true]);

        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        let kept_rows = apply_mask(&rows, &keep);
        assert_eq!(kept_rows, [vec![1.0], vec![3.0]]);
    }
}
