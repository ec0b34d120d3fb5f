use bytemuck::{Pod, Zeroable};

use crate::field::{FieldType, PointField};
use crate::traits::{HasPosition, PointRecord};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointXYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointXYZRGBA {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointXYZI {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

/// Point carrying an integer label, e.g. a segment or class id.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointXYZL {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub label: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointXYZNormal {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub nx: f32,
    pub ny: f32,
    pub nz: f32,
}

macro_rules! impl_position {
    ($($ty:ty),*) => {
        $(
            impl HasPosition for $ty {
                fn position(&self) -> [f32; 3] {
                    [self.x, self.y, self.z]
                }

                fn set_position(&mut self, p: [f32; 3]) {
                    self.x = p[0];
                    self.y = p[1];
                    self.z = p[2];
                }
            }
        )*
    };
}

impl_position!(PointXYZ, PointXYZRGBA, PointXYZI, PointXYZL, PointXYZNormal);

const XYZ: [PointField; 3] = [
    PointField::new("x", 0, FieldType::Float32),
    PointField::new("y", 4, FieldType::Float32),
    PointField::new("z", 8, FieldType::Float32),
];

impl PointRecord for PointXYZ {
    const FIELDS: &'static [PointField] = &XYZ;
}

impl PointRecord for PointXYZRGBA {
    const FIELDS: &'static [PointField] = &[
        XYZ[0],
        XYZ[1],
        XYZ[2],
        PointField::new("r", 12, FieldType::UInt8),
        PointField::new("g", 13, FieldType::UInt8),
        PointField::new("b", 14, FieldType::UInt8),
        PointField::new("a", 15, FieldType::UInt8),
    ];
}

impl PointRecord for PointXYZI {
    const FIELDS: &'static [PointField] = &[
        XYZ[0],
        XYZ[1],
        XYZ[2],
        PointField::new("intensity", 12, FieldType::Float32),
    ];
}

impl PointRecord for PointXYZL {
    const FIELDS: &'static [PointField] = &[
        XYZ[0],
        XYZ[1],
        XYZ[2],
        PointField::new("label", 12, FieldType::UInt32),
    ];
}

impl PointRecord for PointXYZNormal {
    const FIELDS: &'static [PointField] = &[
        XYZ[0],
        XYZ[1],
        XYZ[2],
        PointField::new("normal_x", 12, FieldType::Float32),
        PointField::new("normal_y", 16, FieldType::Float32),
        PointField::new("normal_z", 20, FieldType::Float32),
    ];
}

impl From<[f32; 3]> for PointXYZ {
    fn from(p: [f32; 3]) -> Self {
        Self {
            x: p[0],
            y: p[1],
            z: p[2],
        }
    }
}
