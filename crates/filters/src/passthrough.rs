use pointfilter_core::PointAccessor;
use tracing::instrument;

use crate::classify::{classify, ClassificationResult};
use crate::config::FilterConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PassThroughOutput<A> {
    pub cloud: A,
    pub removed: Option<Vec<usize>>,
}

pub fn assemble<A: PointAccessor + Clone>(
    cloud: &A,
    classification: &ClassificationResult,
    config: &FilterConfig,
) -> A {
    if config.keep_organized {
        let mut out = cloud.clone();
        let fill = config.fill_value;
        for &idx in &classification.removed {
            out.set_position(idx, [fill; 3]);
        }
        if !fill.is_finite() {
            out.set_dense(false);
        }
        out
    } else {
        let mut out = cloud.select(&classification.kept);
        out.set_dense(true);
        out
    }
}

pub fn filter_indices<A: PointAccessor>(
    cloud: &A,
    indices: Option<&[usize]>,
    config: &FilterConfig,
) -> ClassificationResult {
    match indices {
        Some(indices) => classify(cloud, indices, config),
        None => {
            let all: Vec<usize> = (0..cloud.len()).collect();
            classify(cloud, &all, config)
        }
    }
}

/// Points outside `indices` pass through unmasked in organized mode.
#[instrument(skip_all, fields(field = %config.field_name, organized = config.keep_organized))]
pub fn run<A: PointAccessor + Clone>(
    cloud: &A,
    indices: Option<&[usize]>,
    config: &FilterConfig,
) -> PassThroughOutput<A> {
    let classification = if config.keep_organized && !config.extract_removed {
        let forced = config.clone().with_extract_removed(true);
        filter_indices(cloud, indices, &forced)
    } else {
        filter_indices(cloud, indices, config)
    };

    let out = assemble(cloud, &classification, config);
    let removed = config.extract_removed.then_some(classification.removed);

    PassThroughOutput {
        cloud: out,
        removed,
    }
}

pub fn passthrough_filter<A: PointAccessor + Clone>(
    cloud: &A,
    field: &str,
    min: f32,
    max: f32,
) -> A {
    run(cloud, None, &FilterConfig::range(field, min, max)).cloud
}
