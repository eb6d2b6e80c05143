/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
#![forbid(unsafe_code)]
use crate::aoi_support::PlaneKind;
use crate::fixed_point::{binarize_alpha, blend, blend_weight, whole_steps, Q16_FRACTION_MASK};
use crate::images::{ImagePlane, ImagePlaneMut};
use crate::orientation::ScanOrder;

/// Input plane coordinates of the scan cursor.
///
/// Kept relative to the plane so it stays valid if the caller
/// hands a different buffer for the next stripe.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct ScanPosition {
    pub(crate) x: isize,
    pub(crate) y: isize,
}

impl ScanPosition {
    #[inline]
    pub(crate) const fn new(x: isize, y: isize) -> ScanPosition {
        ScanPosition { x, y }
    }
}

/// Resampling state of one plane, persists between stripes
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(crate) struct PlaneScan {
    pub(crate) x_inc: u32,
    pub(crate) y_inc: u32,
    pub(crate) x_accum_start: u32,
    pub(crate) y_accum_start: u32,
    pub(crate) x_accum: u32,
    pub(crate) y_accum: u32,
    pub(crate) saved: ScanPosition,
}

impl PlaneScan {
    #[inline]
    pub(crate) fn rewind(&mut self) {
        self.x_accum = self.x_accum_start;
        self.y_accum = self.y_accum_start;
    }
}

/// Fills every row of `dst` starting from `pos`, returns where the next stripe resumes
pub(crate) type ScanKernel = fn(
    src: &ImagePlane<'_, u8>,
    dst: &mut ImagePlaneMut<'_, u8>,
    scan: &mut PlaneScan,
    pos: ScanPosition,
    row_step: isize,
) -> ScanPosition;

#[inline(always)]
const fn column_step<const FLIP_X: bool>() -> isize {
    if FLIP_X {
        -1
    } else {
        1
    }
}

fn copy_rows<const FLIP_X: bool>(
    src: &ImagePlane<'_, u8>,
    dst: &mut ImagePlaneMut<'_, u8>,
    _: &mut PlaneScan,
    mut pos: ScanPosition,
    row_step: isize,
) -> ScanPosition {
    let width = dst.width as usize;
    for j in 0..dst.height as usize {
        let dst_row = dst.row_mut(j);
        let contiguous = !FLIP_X
            && pos.x >= 0
            && pos.y >= 0
            && pos.y < src.height as isize
            && pos.x as usize + width <= src.width as usize;
        if contiguous {
            let start = src.top_left + pos.y as usize * src.stride as usize + pos.x as usize;
            dst_row.copy_from_slice(&src.data[start..start + width]);
        } else {
            let dx = column_step::<FLIP_X>();
            for (k, px) in dst_row.iter_mut().enumerate() {
                *px = src.clamped(pos.x + dx * k as isize, pos.y);
            }
        }
        pos.y += row_step;
    }
    pos
}

fn copy_columns<const FLIP_X: bool>(
    src: &ImagePlane<'_, u8>,
    dst: &mut ImagePlaneMut<'_, u8>,
    _: &mut PlaneScan,
    mut pos: ScanPosition,
    row_step: isize,
) -> ScanPosition {
    for j in 0..dst.height as usize {
        let dst_row = dst.row_mut(j);
        for (k, px) in dst_row.iter_mut().enumerate() {
            *px = src.clamped(pos.x, pos.y + row_step * k as isize);
        }
        pos.x += column_step::<FLIP_X>();
    }
    pos
}

#[inline(always)]
fn sample_bilinear<const FLIP_X: bool, const BINARY_ALPHA: bool>(
    src: &ImagePlane<'_, u8>,
    x: isize,
    y: isize,
    row_step: isize,
    x_frac: u32,
    y_frac: u32,
) -> u8 {
    let dx = column_step::<FLIP_X>();
    let v = blend(
        src.clamped(x, y),
        src.clamped(x + dx, y),
        src.clamped(x, y + row_step),
        src.clamped(x + dx, y + row_step),
        x_frac,
        y_frac,
    );
    if BINARY_ALPHA {
        binarize_alpha(v)
    } else {
        v
    }
}

fn bilinear_rows<const FLIP_X: bool, const BINARY_ALPHA: bool>(
    src: &ImagePlane<'_, u8>,
    dst: &mut ImagePlaneMut<'_, u8>,
    scan: &mut PlaneScan,
    mut pos: ScanPosition,
    row_step: isize,
) -> ScanPosition {
    let dx = column_step::<FLIP_X>();
    for j in 0..dst.height as usize {
        let y_frac = blend_weight(scan.y_accum);
        let mut x = pos.x;
        let mut x_accum = scan.x_accum_start;

        let dst_row = dst.row_mut(j);
        for px in dst_row.iter_mut() {
            let x_frac = blend_weight(x_accum);
            let sx = x + dx * whole_steps(x_accum) as isize;
            *px = sample_bilinear::<FLIP_X, BINARY_ALPHA>(src, sx, pos.y, row_step, x_frac, y_frac);

            x_accum = x_accum.wrapping_add(scan.x_inc);
            let steps = whole_steps(x_accum);
            if steps != 0 {
                x += dx * steps as isize;
                x_accum &= Q16_FRACTION_MASK;
            }
        }

        scan.y_accum = scan.y_accum.wrapping_add(scan.y_inc);
        let steps = whole_steps(scan.y_accum);
        if steps != 0 {
            pos.y += row_step * steps as isize;
            scan.y_accum &= Q16_FRACTION_MASK;
        }
    }
    pos
}

fn bilinear_columns<const FLIP_X: bool, const BINARY_ALPHA: bool>(
    src: &ImagePlane<'_, u8>,
    dst: &mut ImagePlaneMut<'_, u8>,
    scan: &mut PlaneScan,
    mut pos: ScanPosition,
    row_step: isize,
) -> ScanPosition {
    let dx = column_step::<FLIP_X>();
    for j in 0..dst.height as usize {
        let x_frac = blend_weight(scan.x_accum);
        let x = pos.x + dx * whole_steps(scan.x_accum) as isize;
        let mut y = pos.y;
        let mut y_accum = scan.y_accum_start;

        let dst_row = dst.row_mut(j);
        for px in dst_row.iter_mut() {
            let y_frac = blend_weight(y_accum);
            *px = sample_bilinear::<FLIP_X, BINARY_ALPHA>(src, x, y, row_step, x_frac, y_frac);

            y_accum = y_accum.wrapping_add(scan.y_inc);
            let steps = whole_steps(y_accum);
            if steps != 0 {
                y += row_step * steps as isize;
                y_accum &= Q16_FRACTION_MASK;
            }
        }

        scan.x_accum = scan.x_accum.wrapping_add(scan.x_inc);
        let steps = whole_steps(scan.x_accum);
        if steps != 0 {
            pos.x += dx * steps as isize;
            scan.x_accum &= Q16_FRACTION_MASK;
        }
    }
    // Rows always restart from the cursor row, only the column advances
    pos
}

/// Picks the inner loop for one plane, selected once per `get`
pub(crate) fn select_kernel(only_copy: bool, order: ScanOrder, kind: PlaneKind) -> ScanKernel {
    let binary_alpha = kind == PlaneKind::Alpha;
    match (only_copy, order.transpose, order.flip_x, binary_alpha) {
        (true, false, false, _) => copy_rows::<false> as ScanKernel,
        (true, false, true, _) => copy_rows::<true>,
        (true, true, false, _) => copy_columns::<false>,
        (true, true, true, _) => copy_columns::<true>,
        (false, false, false, false) => bilinear_rows::<false, false>,
        (false, false, true, false) => bilinear_rows::<true, false>,
        (false, false, false, true) => bilinear_rows::<false, true>,
        (false, false, true, true) => bilinear_rows::<true, true>,
        (false, true, false, false) => bilinear_columns::<false, false>,
        (false, true, true, false) => bilinear_columns::<true, false>,
        (false, true, false, true) => bilinear_columns::<false, true>,
        (false, true, true, true) => bilinear_columns::<true, true>,
    }
}
