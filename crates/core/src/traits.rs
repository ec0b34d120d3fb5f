use bytemuck::Pod;

use crate::field::PointField;

pub trait HasPosition {
    fn position(&self) -> [f32; 3];

    fn set_position(&mut self, p: [f32; 3]);
}

/// A fixed-layout point record with a published field schema.
pub trait PointRecord: HasPosition + Pod {
    const FIELDS: &'static [PointField];
}

pub trait PointAccessor {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, i: usize) -> [f32; 3];

    fn set_position(&mut self, i: usize, p: [f32; 3]);

    fn field(&self, name: &str) -> Option<&PointField>;

    fn field_offset(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset)
    }

    fn record_bytes(&self, i: usize) -> &[u8];

    /// Legacy fixed-width field read: 4 bytes at `offset` as `f32`.
    fn read_legacy_f32(&self, i: usize, offset: usize) -> f32 {
        crate::field::read_legacy_f32(self.record_bytes(i), offset)
    }

    fn is_dense(&self) -> bool;

    fn set_dense(&mut self, dense: bool);

    fn select(&self, indices: &[usize]) -> Self
    where
        Self: Sized;
}
