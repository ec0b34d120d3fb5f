#![forbid(unsafe_code)]

pub mod cloud;
pub mod field;
pub mod point;
pub mod traits;

pub use cloud::PointCloud;
pub use field::{find_field, FieldType, PointField};
pub use point::{PointXYZ, PointXYZI, PointXYZL, PointXYZNormal, PointXYZRGBA};
pub use traits::{HasPosition, PointAccessor, PointRecord};
