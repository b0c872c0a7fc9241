// Naive row-major bilinear kernel used by `CpuBackend`.

use crate::error::{Result, TensorError};

pub(crate) fn check_len(
    op: &'static str,
    name: &'static str,
    data: &[f32],
    expected: usize,
) -> Result<()> {
    if data.len() != expected {
        return Err(TensorError::LengthMismatch {
            op,
            name,
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn bilinear(
    x1: &[f32],
    x2: &[f32],
    weight: &[f32],
    bias: Option<&[f32]>,
    n: usize,
    in1: usize,
    in2: usize,
    out: usize,
) -> Result<Vec<f32>> {
    check_len("bilinear", "x1", x1, n * in1)?;
    check_len("bilinear", "x2", x2, n * in2)?;
    check_len("bilinear", "weight", weight, out * in1 * in2)?;
    if let Some(b) = bias {
        check_len("bilinear", "bias", b, out)?;
    }

    let mut y = vec![0.0f32; n * out];
    for r in 0..n {
        let u = &x1[r * in1..(r + 1) * in1];
        let v = &x2[r * in2..(r + 1) * in2];
        for o in 0..out {
            let w_o = &weight[o * in1 * in2..(o + 1) * in1 * in2];
            let mut acc = 0.0f32;
            for (i, &u_i) in u.iter().enumerate() {
                let w_row = &w_o[i * in2..(i + 1) * in2];
                let dot: f32 = w_row.iter().zip(v).map(|(w, x)| w * x).sum();
                acc += u_i * dot;
            }
            y[r * out + o] = acc + bias.map_or(0.0, |b| b[o]);
        }
    }
    Ok(y)
}
