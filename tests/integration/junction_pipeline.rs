//! Parsed junction responses flowing through the frame pipeline

use snapframe::frame::{filters, stats, Grouping, SortDirection, SortKey};
use snapframe::query::parse_junctions;
use snapframe::Pipeline;

use crate::integration::test_utils::{junction_row, response_body};

fn gene_a() -> String {
    response_body(&[
        junction_row(101, "chr1", 1000, 1200, &[(1, 4), (2, 10), (3, 1)]),
        junction_row(102, "chr1", 1300, 1500, &[(2, 6), (4, 2)]),
    ])
}

fn gene_b() -> String {
    response_body(&[junction_row(201, "chr9", 5000, 5600, &[(2, 3), (3, 8), (5, 9)])])
}

#[test]
fn test_samples_with_both_genes_ranked_by_coverage() {
    let a = parse_junctions(&gene_a()).unwrap();
    let b = parse_junctions(&gene_b()).unwrap();
    assert_eq!(a.len(), 5);

    let stats = [stats::Summary::Mean.stat_fn(), stats::Summary::Junctions.stat_fn()];
    let frames = Pipeline::new(&Grouping::BySample, a)
        .intersect(vec![b])
        .unwrap()
        .order(&[SortKey::Coverage.to_order_key(SortDirection::Descending)])
        .summarize(&stats)
        .unwrap()
        .into_frames();

    let samples: Vec<u64> = frames.iter().map(|f| f.sample_id).collect();
    assert_eq!(samples, vec![2, 3]);
    assert_eq!(frames[0].coverage, 19);
    assert_eq!(frames[0].stat(stats::JUNCTION_COUNT), Some(3.0));
    assert_eq!(frames[1].stat(stats::COUNT_MEAN), Some(4.5));
}

#[test]
fn test_junctions_filtered_by_sample_support() {
    let a = parse_junctions(&gene_a()).unwrap();

    let frames = Pipeline::new(&Grouping::ByJunction, a)
        .group_by()
        .unwrap()
        .filter(&[filters::sample_count_at_least(3)])
        .into_frames();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].junction_id, 101);
    assert_eq!(frames[0].coverage, 15);
}

#[test]
fn test_union_across_regions_then_limit() {
    let a = parse_junctions(&gene_a()).unwrap();
    let b = parse_junctions(&gene_b()).unwrap();

    let pipeline = Pipeline::new(&Grouping::BySample, a)
        .union(vec![b])
        .unwrap()
        .filter(&[filters::coverage_above(5)])
        .order(&[SortKey::SampleId.to_order_key(SortDirection::Ascending)]);
    let all: Vec<u64> = pipeline.frames().iter().map(|f| f.sample_id).collect();
    assert_eq!(all, vec![2, 3, 5]);

    let limited = pipeline.limit(2).into_frames();
    assert_eq!(limited.len(), 2);
}
