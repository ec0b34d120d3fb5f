use pointfilter_core::{PointCloud, PointXYZI};
use pointfilter_filters::{passthrough_filter, run, FilterConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Synthetic cloud: 1000 random-ish points, every 50th one invalid
    let n = 1000;
    let points: Vec<PointXYZI> = (0..n)
        .map(|i| PointXYZI {
            x: (i as f32 * 0.731) % 10.0,
            y: (i as f32 * 0.419) % 10.0,
            z: if i % 50 == 0 {
                f32::NAN
            } else {
                (i as f32 * 0.257) % 10.0
            },
            intensity: (i % 10) as f32 / 10.0,
        })
        .collect();
    let cloud = PointCloud::from_points(points);
    println!("Original cloud: {} points (dense: {})", cloud.len(), cloud.is_dense);

    // Compact: keep points where x is in [2.0, 8.0]
    let filtered = passthrough_filter(&cloud, "x", 2.0, 8.0);
    println!("After passthrough (x in [2.0, 8.0]): {} points", filtered.len());

    // Negated intensity band, keeping removed indices
    let cfg = FilterConfig::range("intensity", 0.3, 0.6)
        .with_negate(true)
        .with_extract_removed(true);
    let out = run(&filtered, None, &cfg);
    let removed = out.removed.map_or(0, |r| r.len());
    println!(
        "After negated intensity band: {} kept, {} removed",
        out.cloud.len(),
        removed
    );

    // Organized: same size, filtered points masked with NaN
    let cfg = FilterConfig::range("z", 0.0, 5.0).with_keep_organized(true);
    let masked = run(&cloud, None, &cfg).cloud;
    println!(
        "Organized z in [0.0, 5.0]: {} points (dense: {})",
        masked.len(),
        masked.is_dense
    );

    // Unknown field: logged warning, empty result
    let empty = passthrough_filter(&cloud, "curvature", 0.0, 1.0);
    println!("Unknown field: {} points", empty.len());
}
