//! Compiled-in benchmark measurements
//!
//! Timings were recorded by hand from runs of the sequential, MPI and hybrid
//! MPI+OpenMP matrix-vector kernels on a 2000×2000 matrix. Nothing here is
//! measured at runtime.

use plotters::style::RGBColor;
use serde::{Serialize, Serializer};

/// Matrix dimension used for the [`CONFIGURATIONS`] measurements
pub const MATRIX_DIMENSION: u32 = 2000;

/// One benchmarked configuration
///
/// Serializes with the label as `configuration`, newlines replaced, and
/// without the colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Configuration {
    /// Chart label, may contain a newline used as an axis line break
    #[serde(rename = "configuration", serialize_with = "serialize_label")]
    pub label: &'static str,
    /// Total worker count (processes × threads)
    pub workers: u32,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Throughput in GFLOPS
    pub gflops: f64,
    /// Bar colour in the performance figure
    #[serde(skip)]
    pub color: RGBColor,
}

impl Configuration {
    /// Label with newlines replaced by spaces
    pub fn display_name(&self) -> String {
        self.label.replace('\n', " ")
    }

    /// Speedup of perfect linear scaling over the sequential run
    pub fn ideal_speedup(&self) -> f64 {
        f64::from(self.workers)
    }
}

fn serialize_label<S: Serializer>(
    label: &&'static str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&label.replace('\n', " "))
}

const SEQUENTIAL_BLUE: RGBColor = RGBColor(0x2E, 0x86, 0xAB);
const MPI_SINGLE_PURPLE: RGBColor = RGBColor(0xA2, 0x3B, 0x72);
const MPI_2P_ORANGE: RGBColor = RGBColor(0xF1, 0x8F, 0x01);
const MPI_4P_RED: RGBColor = RGBColor(0xC7, 0x3E, 0x1D);
const HYBRID_GREEN: RGBColor = RGBColor(0x06, 0xA7, 0x7D);

/// Benchmarked configurations; index 0 is the sequential baseline
pub const CONFIGURATIONS: [Configuration; 7] = [
    Configuration {
        label: "Sequential",
        workers: 1,
        time_ms: 4.322,
        gflops: 1.851,
        color: SEQUENTIAL_BLUE,
    },
    Configuration {
        label: "MPI 1p",
        workers: 1,
        time_ms: 4.336,
        gflops: 1.845,
        color: MPI_SINGLE_PURPLE,
    },
    Configuration {
        label: "MPI 2p",
        workers: 2,
        time_ms: 2.545,
        gflops: 3.144,
        color: MPI_2P_ORANGE,
    },
    Configuration {
        label: "MPI 4p",
        workers: 4,
        time_ms: 2.230,
        gflops: 3.587,
        color: MPI_4P_RED,
    },
    Configuration {
        label: "Hybrid\n2×2",
        workers: 4,
        time_ms: 4.102,
        gflops: 1.950,
        color: HYBRID_GREEN,
    },
    Configuration {
        label: "Hybrid\n2×4",
        workers: 8,
        time_ms: 2.785,
        gflops: 2.873,
        color: HYBRID_GREEN,
    },
    Configuration {
        label: "Hybrid\n4×2",
        workers: 8,
        time_ms: 3.547,
        gflops: 2.256,
        color: HYBRID_GREEN,
    },
];

/// Matrix sizes (N for an N×N matrix) of the scalability dataset
pub const MATRIX_SIZES: [u32; 4] = [500, 1000, 2000, 5000];

/// Execution times of one configuration across [`MATRIX_SIZES`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalabilitySeries {
    pub name: &'static str,
    pub workers: u32,
    /// Time in milliseconds, one entry per matrix size
    pub times_ms: [f64; 4],
    pub color: RGBColor,
}

impl ScalabilitySeries {
    /// `(matrix_size, time_ms)` pairs in ascending size order
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        MATRIX_SIZES.iter().copied().zip(self.times_ms.iter().copied())
    }
}

/// Time-versus-size series for the scalability figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalabilityDataset {
    pub series: [ScalabilitySeries; 3],
    /// Set when the values are extrapolated rather than measured
    pub estimated: bool,
}

/// Scalability dataset. Only the 2000×2000 column was measured; the other
/// sizes are estimates kept for illustration.
pub const SCALABILITY: ScalabilityDataset = ScalabilityDataset {
    series: [
        ScalabilitySeries {
            name: "Sequential",
            workers: 1,
            times_ms: [0.282, 0.936, 4.322, 45.0],
            color: SEQUENTIAL_BLUE,
        },
        ScalabilitySeries {
            name: "MPI 2 processes",
            workers: 2,
            times_ms: [0.150, 0.567, 2.545, 25.0],
            color: MPI_2P_ORANGE,
        },
        ScalabilitySeries {
            name: "MPI 4 processes",
            workers: 4,
            times_ms: [0.100, 0.490, 2.230, 20.0],
            color: MPI_4P_RED,
        },
    ],
    estimated: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        assert_eq!(CONFIGURATIONS.len(), 7);
        assert_eq!(MATRIX_SIZES, [500, 1000, 2000, 5000]);
        for series in &SCALABILITY.series {
            assert_eq!(series.points().count(), MATRIX_SIZES.len());
        }
    }

    #[test]
    fn test_baseline_is_single_worker() {
        assert_eq!(CONFIGURATIONS[0].label, "Sequential");
        assert_eq!(CONFIGURATIONS[0].workers, 1);
    }

    #[test]
    fn test_display_name_replaces_newlines() {
        assert_eq!(CONFIGURATIONS[4].display_name(), "Hybrid 2×2");
        assert_eq!(CONFIGURATIONS[3].display_name(), "MPI 4p");
        assert!(CONFIGURATIONS
            .iter()
            .all(|c| !c.display_name().contains('\n')));
    }

    #[test]
    fn test_measured_column_matches_configurations() {
        // The 2000×2000 column is the only measured one
        let idx = MATRIX_SIZES
            .iter()
            .position(|&n| n == MATRIX_DIMENSION)
            .unwrap();
        assert_eq!(SCALABILITY.series[0].times_ms[idx], CONFIGURATIONS[0].time_ms);
        assert_eq!(SCALABILITY.series[1].times_ms[idx], CONFIGURATIONS[2].time_ms);
        assert_eq!(SCALABILITY.series[2].times_ms[idx], CONFIGURATIONS[3].time_ms);
    }

    #[test]
    fn test_scalability_is_marked_estimated() {
        assert!(SCALABILITY.estimated);
    }

    #[test]
    fn test_points_are_ascending_in_size() {
        let sizes: Vec<u32> = SCALABILITY.series[0].points().map(|(n, _)| n).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
