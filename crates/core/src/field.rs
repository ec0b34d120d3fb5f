#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Float64,
}

impl FieldType {
    pub fn size(self) -> usize {
        match self {
            FieldType::Int8 | FieldType::UInt8 => 1,
            FieldType::Int16 | FieldType::UInt16 => 2,
            FieldType::Int32 | FieldType::UInt32 | FieldType::Float32 => 4,
            FieldType::Float64 => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointField {
    pub name: &'static str,
    pub offset: usize,
    pub datatype: FieldType,
    pub count: usize,
}

impl PointField {
    pub const fn new(name: &'static str, offset: usize, datatype: FieldType) -> Self {
        Self {
            name,
            offset,
            datatype,
            count: 1,
        }
    }
}

pub fn find_field<'a>(fields: &'a [PointField], name: &str) -> Option<&'a PointField> {
    fields.iter().find(|f| f.name == name)
}

/// Reads 4 bytes at `offset` as a native-endian `f32`, whatever the field's
/// declared type. Bytes past the end of `record` read as zero.
pub fn read_legacy_f32(record: &[u8], offset: usize) -> f32 {
    f32::from_ne_bytes(read_bytes::<4>(record, offset))
}

pub fn read_typed(record: &[u8], field: &PointField) -> f64 {
    let off = field.offset;
    match field.datatype {
        FieldType::Int8 => i8::from_ne_bytes(read_bytes::<1>(record, off)) as f64,
        FieldType::UInt8 => u8::from_ne_bytes(read_bytes::<1>(record, off)) as f64,
        FieldType::Int16 => i16::from_ne_bytes(read_bytes::<2>(record, off)) as f64,
        FieldType::UInt16 => u16::from_ne_bytes(read_bytes::<2>(record, off)) as f64,
        FieldType::Int32 => i32::from_ne_bytes(read_bytes::<4>(record, off)) as f64,
        FieldType::UInt32 => u32::from_ne_bytes(read_bytes::<4>(record, off)) as f64,
        FieldType::Float32 => f32::from_ne_bytes(read_bytes::<4>(record, off)) as f64,
        FieldType::Float64 => f64::from_ne_bytes(read_bytes::<8>(record, off)),
    }
}

fn read_bytes<const N: usize>(record: &[u8], offset: usize) -> [u8; N] {
    let mut buf = [0u8; N];
    if offset < record.len() {
        let end = record.len().min(offset + N);
        buf[..end - offset].copy_from_slice(&record[offset..end]);
    }
    buf
}
