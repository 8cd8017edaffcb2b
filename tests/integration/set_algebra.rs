//! Set operations over junction frames with both grouping strategies

use snapframe::frame::{Frame, Grouping, Location, Strand};
use snapframe::ops::{bind, group_by, intersect, to_mapping, to_sequence, union};
use snapframe::AlgebraError;

fn frame(junction_id: u64, sample_id: u64, coverage: u64) -> Frame {
    Frame::new(
        junction_id,
        sample_id,
        Location::new("chr2", junction_id * 100, junction_id * 100 + 50, Strand::Forward),
        coverage,
    )
}

fn sorted_by_sample(mut frames: Vec<Frame>) -> Vec<Frame> {
    frames.sort_by_key(|f| f.sample_id);
    frames
}

fn sorted_by_junction(mut frames: Vec<Frame>) -> Vec<Frame> {
    frames.sort_by_key(|f| f.junction_id);
    frames
}

#[test]
fn test_group_by_sample_collects_junctions() {
    let frames = vec![frame(1, 10, 2), frame(2, 10, 3), frame(3, 11, 4)];
    let grouped = sorted_by_sample(group_by(&Grouping::BySample, frames).unwrap());

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].sample_id, 10);
    assert_eq!(grouped[0].coverage, 5);
    assert_eq!(grouped[0].counts, vec![2, 3]);
    assert_eq!(grouped[0].junction_ids.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(grouped[1].junction_ids.len(), 1);
}

#[test]
fn test_group_by_junction_collects_samples() {
    let frames = vec![frame(1, 10, 2), frame(1, 11, 3), frame(2, 10, 4)];
    let grouped = sorted_by_junction(group_by(&Grouping::ByJunction, frames).unwrap());

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].sample_ids.iter().copied().collect::<Vec<_>>(), vec![10, 11]);
    assert_eq!(grouped[0].coverage, 5);
    assert_eq!(grouped[1].sample_ids.len(), 1);
}

#[test]
fn test_samples_shared_by_two_genes() {
    let gene_a = vec![frame(1, 10, 1), frame(1, 11, 1), frame(2, 12, 1)];
    let gene_b = vec![frame(7, 11, 5), frame(8, 12, 6), frame(8, 13, 7)];

    let shared = sorted_by_sample(
        intersect(&Grouping::BySample, gene_a.clone(), vec![gene_b.clone()]).unwrap(),
    );
    let samples: Vec<u64> = shared.iter().map(|f| f.sample_id).collect();
    assert_eq!(samples, vec![11, 12]);
    assert_eq!(shared[0].junction_ids.iter().copied().collect::<Vec<_>>(), vec![1, 7]);

    let either = union(&Grouping::BySample, gene_a, vec![gene_b]).unwrap();
    assert_eq!(either.len(), 4);
}

#[test]
fn test_intersect_of_three_sequences_narrows() {
    let a = vec![frame(1, 1, 1), frame(1, 2, 1), frame(1, 3, 1)];
    let b = vec![frame(2, 2, 1), frame(2, 3, 1)];
    let c = vec![frame(3, 3, 1), frame(3, 4, 1)];

    let result = intersect(&Grouping::BySample, a, vec![b, c]).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].sample_id, 3);
    assert_eq!(result[0].coverage, 3);
    assert_eq!(result[0].junction_ids.len(), 3);
}

#[test]
fn test_intersect_with_empty_sequence_is_empty() {
    let a = vec![frame(1, 1, 1)];
    let result = intersect(&Grouping::ByJunction, a, vec![Vec::new()]).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_bind_then_group_matches_union() {
    let a = vec![frame(1, 1, 1), frame(2, 1, 2)];
    let b = vec![frame(1, 2, 3), frame(3, 2, 4)];

    let bound = bind(vec![a.clone(), b.clone()]);
    assert_eq!(bound.len(), 4);

    let grouped = sorted_by_junction(group_by(&Grouping::ByJunction, bound).unwrap());
    let unioned = sorted_by_junction(union(&Grouping::ByJunction, a, vec![b]).unwrap());
    assert_eq!(grouped, unioned);
}

#[test]
fn test_mapping_round_trip_keeps_one_frame_per_identity() {
    let frames = vec![frame(1, 1, 1), frame(1, 2, 1), frame(2, 1, 1)];
    let mapping = to_mapping(&Grouping::BySample, frames).unwrap();
    assert_eq!(mapping.len(), 2);
    assert!(mapping.contains_key(&1));
    assert_eq!(to_sequence(mapping).len(), 2);
}

#[test]
fn test_merge_of_different_identities_fails() {
    use snapframe::GroupingStrategy;

    let err = Grouping::ByJunction
        .merge(frame(1, 1, 1), frame(2, 1, 1))
        .unwrap_err();
    assert!(matches!(err, AlgebraError::IdentityMismatch { strategy: "by_junction", .. }));
}
