use pointfilter_core::field::read_typed;
use pointfilter_core::{PointAccessor, PointField};
use tracing::{debug, warn};

use crate::config::{FieldRead, FilterConfig};
use crate::error::FilterError;

/// `removed` stays empty unless the config asked for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub kept: Vec<usize>,
    pub removed: Vec<usize>,
}

/// `Ok(None)` for an empty name.
pub fn resolve_field<'a, A: PointAccessor>(
    cloud: &'a A,
    name: &str,
) -> Result<Option<&'a PointField>, FilterError> {
    if name.is_empty() {
        return Ok(None);
    }
    cloud
        .field(name)
        .map(Some)
        .ok_or_else(|| FilterError::FieldNotFound {
            field: name.to_string(),
        })
}

/// Splits `indices` into kept and removed in one pass, preserving order.
///
/// An unknown field logs a warning and returns both lists empty.
pub fn classify<A: PointAccessor>(
    cloud: &A,
    indices: &[usize],
    config: &FilterConfig,
) -> ClassificationResult {
    let field = match resolve_field(cloud, &config.field_name) {
        Ok(field) => field.copied(),
        Err(err) => {
            warn!(%err, "passthrough filter produced no output");
            return ClassificationResult::default();
        }
    };

    let mut kept = Vec::with_capacity(indices.len());
    let mut removed = if config.extract_removed {
        Vec::with_capacity(indices.len())
    } else {
        Vec::new()
    };

    for &idx in indices {
        if keeps_point(cloud, idx, field.as_ref(), config) {
            kept.push(idx);
        } else if config.extract_removed {
            removed.push(idx);
        }
    }

    kept.shrink_to_fit();
    removed.shrink_to_fit();

    debug!(
        input = indices.len(),
        kept = kept.len(),
        removed = removed.len(),
        "passthrough classification done"
    );

    ClassificationResult { kept, removed }
}

fn keeps_point<A: PointAccessor>(
    cloud: &A,
    idx: usize,
    field: Option<&PointField>,
    config: &FilterConfig,
) -> bool {
    if !cloud.position(idx).iter().all(|v| v.is_finite()) {
        return false;
    }

    let Some(field) = field else {
        return true;
    };

    let value = match config.field_read {
        FieldRead::Legacy => f64::from(cloud.read_legacy_f32(idx, field.offset)),
        FieldRead::Typed => read_typed(cloud.record_bytes(idx), field),
    };

    value.is_finite() && config.keeps_value(value)
}
