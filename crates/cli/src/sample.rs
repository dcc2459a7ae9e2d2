//! Evenly spaced samples of a path, written as CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use smoothpath::{PositionUnits, SmoothPath};

/// Unit positions `count` evenly spaced over the path's range in `units`.
///
/// A looped path omits the end point, which coincides with the start.
pub fn sample_positions(path: &SmoothPath, units: PositionUnits, count: usize) -> Vec<f64> {
    let lo = path.min_unit(units);
    let hi = path.max_unit(units);
    let intervals = if path.looped() {
        count
    } else {
        count.saturating_sub(1)
    };
    if intervals == 0 {
        return vec![lo; count];
    }
    (0..count)
        .map(|i| lo + (hi - lo) * i as f64 / intervals as f64)
        .collect()
}

/// Evaluate `path` at every sample and collect the columns
/// `pos,x,y,z,tx,ty,tz,qw,qx,qy,qz`.
pub fn sample_frame(path: &SmoothPath, units: PositionUnits, count: usize) -> Result<DataFrame> {
    let pos = sample_positions(path, units, count);
    let mut cols: [Vec<f64>; 10] = Default::default();
    for &u in &pos {
        let native = path.to_native_path_units(u, units);
        let p = path.evaluate_local_position(native);
        let t = path.evaluate_local_tangent(native);
        let q = path.evaluate_local_orientation(native).into_inner();
        for (col, v) in cols
            .iter_mut()
            .zip([p.x, p.y, p.z, t.x, t.y, t.z, q.w, q.i, q.j, q.k])
        {
            col.push(v);
        }
    }
    let [x, y, z, tx, ty, tz, qw, qx, qy, qz] = cols;
    let df = df!(
        "pos" => pos,
        "x" => x,
        "y" => y,
        "z" => z,
        "tx" => tx,
        "ty" => ty,
        "tz" => tz,
        "qw" => qw,
        "qx" => qx,
        "qy" => qy,
        "qz" => qz
    )?;
    Ok(df)
}

pub fn write_csv(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn line() -> SmoothPath {
        SmoothPath::parse("0,0,0,1,0,0,2,0,0", false).unwrap()
    }

    #[test]
    fn positions_cover_open_range_inclusive() {
        let p = line();
        assert_eq!(
            sample_positions(&p, PositionUnits::PathUnits, 5),
            vec![0.0, 0.5, 1.0, 1.5, 2.0]
        );
        assert_eq!(sample_positions(&p, PositionUnits::Normalized, 1), vec![0.0]);
        assert!(sample_positions(&p, PositionUnits::Distance, 0).is_empty());
    }

    #[test]
    fn positions_skip_loop_end() {
        let p = SmoothPath::parse("1,0,1,1,0,-1,-1,0,-1,-1,0,1", true).unwrap();
        assert_eq!(
            sample_positions(&p, PositionUnits::PathUnits, 4),
            vec![0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn frame_has_expected_columns_and_values() {
        let p = line();
        let df = sample_frame(&p, PositionUnits::Normalized, 3).unwrap();
        assert_eq!(df.shape(), (3, 11));
        let x: Vec<f64> = df
            .column("x")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert!((x[1] - 1.0).abs() < 1e-6);
        assert!((x[2] - 2.0).abs() < 1e-9);
        // facing +X with +Y up
        let qw = df.column("qw").unwrap().f64().unwrap().get(0).unwrap();
        let qy = df.column("qy").unwrap().f64().unwrap().get(0).unwrap();
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert!((qw - half).abs() < 1e-9 && (qy - half).abs() < 1e-9);
    }

    #[test]
    fn csv_written_and_readable() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("samples.csv");
        let mut df = sample_frame(&line(), PositionUnits::Distance, 11).unwrap();
        write_csv(&mut df, &out).unwrap();
        let back = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.shape(), (11, 11));
        let names: Vec<String> = back
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            names,
            ["pos", "x", "y", "z", "tx", "ty", "tz", "qw", "qx", "qy", "qz"]
        );
    }
}
