#![forbid(unsafe_code)]

pub use pointfilter_core::{HasPosition, PointAccessor, PointCloud, PointField, PointRecord};
pub use pointfilter_filters::{
    filter_indices, passthrough_filter, run, ClassificationResult, FieldRead, FilterConfig,
    FilterError, PassThroughOutput,
};
