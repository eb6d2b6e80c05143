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
use crate::aoi_error::check_plane_count;
use crate::aoi_support::{PixelFormat, PlaneKind, ResizeParams};
use crate::fixed_point::{accumulator_start, scale_increment, Q16_HALF};
use crate::images::{ImagePlane, ImagePlaneMut};
use crate::orientation::ScanOrder;
use crate::scan_kernels::{select_kernel, PlaneScan, ScanPosition};
use crate::AoiError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator};
#[cfg(feature = "rayon")]
use rayon::iter::ParallelIterator;
use tracing::{debug, trace, warn};

const MAX_PLANES: usize = 4;

/// Lifecycle phase of [AreaOfInterestResizer]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ResizerPhase {
    /// Created, or last configuration was rejected
    Created,
    Configured,
}

/// Crops, resizes and reorients a region of interest of a planar YUV 4:2:0 image.
///
/// Resampling is fixed point bilinear, or a plain copy when the region of interest
/// and the output have the same size. Output may be requested in one call, or in
/// stripe mode band by band: each [AreaOfInterestResizer::get] call then fills as many
/// output rows as the output planes hold and continues where the previous call stopped.
/// Once the whole output was produced the next call starts over from the region origin.
///
/// # Example
///
/// ```
/// use yuv_aoi::{alloc_planes, planes_to_fixed, AreaOfInterestResizer, PixelFormat, Point, ResizeParams, Size};
///
/// let source = alloc_planes::<u8>(PixelFormat::Yuv420Planar, 64, 48);
/// let mut target = alloc_planes::<u8>(PixelFormat::Yuv420Planar, 32, 24);
///
/// let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
/// resizer
///     .configure(&ResizeParams::new(Point::new(0, 0), Size::new(64, 48), Size::new(32, 24)))
///     .unwrap();
/// resizer.get(&planes_to_fixed(&source), &mut target).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AreaOfInterestResizer {
    format: PixelFormat,
    phase: ResizerPhase,
    params: ResizeParams,
    scans: [PlaneScan; MAX_PLANES],
    processed_rows: u32,
    only_copy: bool,
    order: ScanOrder,
}

impl AreaOfInterestResizer {
    pub fn new(format: PixelFormat) -> AreaOfInterestResizer {
        AreaOfInterestResizer {
            format,
            phase: ResizerPhase::Created,
            params: ResizeParams::new(Default::default(), Default::default(), Default::default()),
            scans: [PlaneScan::default(); MAX_PLANES],
            processed_rows: 0,
            only_copy: false,
            order: ScanOrder::default(),
        }
    }

    /// Creates resizer from a raw pixel format code, see [PixelFormat]
    pub fn try_new(format: u32) -> Result<AreaOfInterestResizer, AoiError> {
        Ok(AreaOfInterestResizer::new(PixelFormat::try_from(format)?))
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn phase(&self) -> ResizerPhase {
        self.phase
    }

    /// Active parameters, only when configured
    pub fn params(&self) -> Option<&ResizeParams> {
        match self.phase {
            ResizerPhase::Configured => Some(&self.params),
            ResizerPhase::Created => None,
        }
    }

    /// Output rows already delivered in the current stripe pass
    pub fn processed_rows(&self) -> u32 {
        self.processed_rows
    }

    /// True when configured sizes match and no interpolation happens
    pub fn is_copy_only(&self) -> bool {
        self.only_copy
    }

    pub fn scan_order(&self) -> ScanOrder {
        self.order
    }

    /// Configures the resizer, may be called at any time.
    ///
    /// Any stripe pass in progress is abandoned, next [AreaOfInterestResizer::get]
    /// starts from the region origin. On error the resizer must be configured
    /// again before use.
    ///
    /// # Arguments
    ///
    /// * `params`: Region of interest, output size and orientation, see [ResizeParams]
    ///
    /// returns: Result<(), [AoiError]>
    ///
    pub fn configure(&mut self, params: &ResizeParams) -> Result<(), AoiError> {
        self.phase = ResizerPhase::Created;
        self.processed_rows = 0;

        let input_size = params.input_size;
        let output_size = params.output_size;
        if input_size.width == 0
            || input_size.height == 0
            || output_size.width == 0
            || output_size.height == 0
        {
            warn!(?input_size, ?output_size, "rejecting zero sized resize");
            return Err(AoiError::ZeroBaseSize);
        }
        if !input_size.is_even() {
            warn!(?input_size, "rejecting odd sized region of interest");
            return Err(AoiError::IllegalFrameSize(input_size));
        }

        self.params = *params;
        self.only_copy = input_size == output_size;
        self.order = params.output_orientation.scan_order();
        self.scans = [PlaneScan::default(); MAX_PLANES];

        if !self.only_copy {
            let origin = params.input_origin;
            for (i, scan) in self
                .scans
                .iter_mut()
                .take(self.format.planes_count())
                .enumerate()
            {
                let kind = PlaneKind::from_index(i);
                let width_in = kind.dimension(input_size.width);
                let height_in = kind.dimension(input_size.height);
                let width_out = kind.dimension(output_size.width);
                let height_out = kind.dimension(output_size.height);

                let increments = scale_increment(width_in, width_out)
                    .and_then(|x_inc| Ok((x_inc, scale_increment(height_in, height_out)?)));
                (scan.x_inc, scan.y_inc) = match increments {
                    Ok(increments) => increments,
                    Err(err) => {
                        warn!(?input_size, ?output_size, "scale ratio exceeds 16.16 range");
                        return Err(err);
                    }
                };
                scan.x_accum_start = accumulator_start(scan.x_inc);
                scan.y_accum_start = accumulator_start(scan.y_inc);

                // Odd luma origin lands between two chroma samples
                if kind == PlaneKind::Chroma {
                    if origin.x & 1 != 0 {
                        scan.x_accum_start += Q16_HALF;
                    }
                    if origin.y & 1 != 0 {
                        scan.y_accum_start += Q16_HALF;
                    }
                }
                scan.rewind();
            }
        }

        debug!(
            format = ?self.format,
            ?input_size,
            ?output_size,
            origin = ?params.input_origin,
            orientation = ?params.output_orientation,
            stripe_mode = params.stripe_mode,
            only_copy = self.only_copy,
            "configured area of interest resizer"
        );

        self.phase = ResizerPhase::Configured;
        Ok(())
    }

    /// Produces the configured area of interest into `output`.
    ///
    /// In normal mode output planes hold the whole output picture. In stripe mode only
    /// the width must match, the plane height is the height of the band delivered by
    /// this call. Output planes of transposing orientations are `output_size.height`
    /// wide and `output_size.width` tall.
    ///
    /// # Arguments
    ///
    /// * `input`: Source planes, Y, U, V and optionally A
    /// * `output`: Destination planes in the same order
    ///
    /// returns: Result<(), [AoiError]>
    ///
    pub fn get(
        &mut self,
        input: &[ImagePlane<'_, u8>],
        output: &mut [ImagePlaneMut<'_, u8>],
    ) -> Result<(), AoiError> {
        if self.phase != ResizerPhase::Configured {
            return Err(AoiError::BadState);
        }
        let planes_count = self.format.planes_count();
        check_plane_count(planes_count, input.len())?;
        check_plane_count(planes_count, output.len())?;
        for (i, (src, dst)) in input.iter().zip(output.iter()).enumerate() {
            src.check_constraints()?;
            dst.check_constraints()?;
            self.check_roi(src, PlaneKind::from_index(i))?;
        }

        let pass = PassSetup {
            params: self.params,
            order: self.order,
            only_copy: self.only_copy,
            pass_start: !self.params.stripe_mode || self.processed_rows == 0,
        };

        let iter;
        #[cfg(feature = "rayon")]
        {
            iter = self.scans[..planes_count]
                .par_iter_mut()
                .zip(input.par_iter())
                .zip(output.par_iter_mut())
                .enumerate();
        }
        #[cfg(not(feature = "rayon"))]
        {
            iter = self.scans[..planes_count]
                .iter_mut()
                .zip(input.iter())
                .zip(output.iter_mut())
                .enumerate();
        }
        iter.for_each(|(i, ((scan, src), dst))| pass.run(i, scan, src, dst));

        let total_rows = if pass.order.transpose {
            pass.params.output_size.width
        } else {
            pass.params.output_size.height
        };
        self.processed_rows = self.processed_rows.saturating_add(output[0].height);
        if self.processed_rows >= total_rows {
            trace!(total_rows, "output pass complete");
            self.processed_rows = 0;
        } else {
            trace!(
                processed_rows = self.processed_rows,
                total_rows,
                "stripe delivered"
            );
        }
        Ok(())
    }

    fn check_roi(&self, src: &ImagePlane<'_, u8>, kind: PlaneKind) -> Result<(), AoiError> {
        let shift = kind.shift();
        let origin = self.params.input_origin;
        let size = self.params.input_size;
        let right = (origin.x >> shift) as u64 + (size.width >> shift) as u64;
        let bottom = (origin.y >> shift) as u64 + (size.height >> shift) as u64;
        if right > src.width as u64 || bottom > src.height as u64 {
            return Err(AoiError::RoiOutOfBounds);
        }
        Ok(())
    }
}

/// Settings shared by every plane of one `get` call
#[derive(Debug, Copy, Clone)]
struct PassSetup {
    params: ResizeParams,
    order: ScanOrder,
    only_copy: bool,
    /// First stripe of a pass, or any call outside stripe mode
    pass_start: bool,
}

impl PassSetup {
    fn run(
        &self,
        index: usize,
        scan: &mut PlaneScan,
        src: &ImagePlane<'_, u8>,
        dst: &mut ImagePlaneMut<'_, u8>,
    ) {
        let kind = PlaneKind::from_index(index);
        let pos = if self.pass_start {
            let shift = kind.shift();
            let origin = self.params.input_origin;
            let size = self.params.input_size;
            let mut x = (origin.x >> shift) as isize;
            let mut y = (origin.y >> shift) as isize;
            if self.order.flip_x {
                x += (size.width >> shift) as isize - 1;
            }
            if self.order.flip_y {
                y += (size.height >> shift) as isize - 1;
            }
            if !self.only_copy {
                scan.rewind();
            }
            ScanPosition::new(x, y)
        } else {
            scan.saved
        };
        let row_step: isize = if self.order.flip_y { -1 } else { 1 };

        let kernel = select_kernel(self.only_copy, self.order, kind);
        let next = kernel(src, dst, scan, pos, row_step);
        if self.params.stripe_mode {
            scan.saved = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{alloc_planes, planes_to_fixed};
    use crate::{Orientation, Point, Size};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ORIENTATIONS: [Orientation; 8] = [
        Orientation::TopLeft,
        Orientation::TopRight,
        Orientation::BottomRight,
        Orientation::BottomLeft,
        Orientation::LeftTop,
        Orientation::RightTop,
        Orientation::RightBottom,
        Orientation::LeftBottom,
    ];

    fn random_planes(
        format: PixelFormat,
        width: u32,
        height: u32,
        seed: u64,
    ) -> Vec<ImagePlaneMut<'static, u8>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut planes = alloc_planes::<u8>(format, width, height);
        for plane in planes.iter_mut() {
            rng.fill(plane.data.as_mut());
        }
        planes
    }

    fn plane_rows(plane: &ImagePlaneMut<'_, u8>) -> Vec<Vec<u8>> {
        (0..plane.height as usize)
            .map(|y| plane.row(y).to_vec())
            .collect()
    }

    fn output_planes(format: PixelFormat, params: &ResizeParams) -> Vec<ImagePlaneMut<'static, u8>> {
        let size = if params.output_orientation.is_transposing() {
            params.output_size.transposed()
        } else {
            params.output_size
        };
        alloc_planes::<u8>(format, size.width, size.height)
    }

    fn resize_once(
        format: PixelFormat,
        source: &[ImagePlaneMut<'_, u8>],
        params: &ResizeParams,
    ) -> Vec<ImagePlaneMut<'static, u8>> {
        let mut resizer = AreaOfInterestResizer::new(format);
        resizer.configure(params).unwrap();
        let mut target = output_planes(format, params);
        resizer.get(&planes_to_fixed(source), &mut target).unwrap();
        target
    }

    #[test]
    fn test_unsupported_raw_format() {
        assert_eq!(
            AreaOfInterestResizer::try_new(2).unwrap_err(),
            AoiError::UnsupportedFormat(2)
        );
        let resizer = AreaOfInterestResizer::try_new(1).unwrap();
        assert_eq!(resizer.format(), PixelFormat::Yuv420PlanarAlpha);
        assert_eq!(resizer.phase(), ResizerPhase::Created);
        assert!(resizer.params().is_none());
    }

    #[test]
    fn test_get_before_configure() {
        let source = random_planes(PixelFormat::Yuv420Planar, 16, 16, 1);
        let mut target = alloc_planes::<u8>(PixelFormat::Yuv420Planar, 16, 16);
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        assert_eq!(
            resizer.get(&planes_to_fixed(&source), &mut target),
            Err(AoiError::BadState)
        );
    }

    #[test]
    fn test_odd_region_rejected() {
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        for (w, h) in [(15, 16), (16, 15), (15, 15), (1, 2), (2, 1)] {
            for output in [Size::new(8, 8), Size::new(w, h), Size::new(32, 30)] {
                for orientation in ORIENTATIONS {
                    for stripe_mode in [false, true] {
                        let params =
                            ResizeParams::new(Point::new(1, 3), Size::new(w, h), output)
                                .with_orientation(orientation)
                                .with_stripe_mode(stripe_mode);
                        assert_eq!(
                            resizer.configure(&params),
                            Err(AoiError::IllegalFrameSize(Size::new(w, h)))
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_failed_configure_invalidates_previous() {
        let source = random_planes(PixelFormat::Yuv420Planar, 16, 16, 2);
        let mut target = alloc_planes::<u8>(PixelFormat::Yuv420Planar, 16, 16);
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let good = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(16, 16));
        resizer.configure(&good).unwrap();
        assert_eq!(resizer.phase(), ResizerPhase::Configured);

        let bad = ResizeParams::new(Point::new(0, 0), Size::new(15, 16), Size::new(16, 16));
        assert!(resizer.configure(&bad).is_err());
        assert_eq!(resizer.phase(), ResizerPhase::Created);
        assert_eq!(
            resizer.get(&planes_to_fixed(&source), &mut target),
            Err(AoiError::BadState)
        );
    }

    #[test]
    fn test_zero_output_rejected() {
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(0, 16));
        assert_eq!(resizer.configure(&params), Err(AoiError::ZeroBaseSize));
    }

    #[test]
    fn test_huge_output_does_not_overflow() {
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(u32::MAX, 16));
        assert_eq!(resizer.configure(&params), Ok(()));
        assert_eq!(resizer.scans[1].x_inc, 0);

        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(16, u32::MAX));
        assert_eq!(resizer.configure(&params), Ok(()));
        assert_eq!(resizer.scans[1].y_inc, 0);
    }

    #[test]
    fn test_out_of_range_ratio_rejected() {
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(131072, 2), Size::new(1, 2));
        assert_eq!(resizer.configure(&params), Err(AoiError::PointerOverflow));
        assert_eq!(resizer.phase(), ResizerPhase::Created);
    }

    #[test]
    fn test_copy_identity() {
        let format = PixelFormat::Yuv420PlanarAlpha;
        let source = random_planes(format, 32, 24, 3);
        let params = ResizeParams::new(Point::new(4, 2), Size::new(16, 12), Size::new(16, 12));
        let target = resize_once(format, &source, &params);

        for (i, (src, dst)) in source.iter().zip(target.iter()).enumerate() {
            let shift = PlaneKind::from_index(i).shift();
            let (x0, y0) = ((4 >> shift) as usize, (2 >> shift) as usize);
            for y in 0..dst.height as usize {
                let expected = &src.row(y0 + y)[x0..x0 + dst.width as usize];
                assert_eq!(dst.row(y), expected, "plane {i}, row {y}");
            }
        }
    }

    #[test]
    fn test_copy_orientations_move_pixels() {
        let format = PixelFormat::Yuv420Planar;
        let source = random_planes(format, 24, 16, 4);
        let (w, h) = (12usize, 8usize);
        let (x0, y0) = (6usize, 4usize);
        for orientation in ORIENTATIONS {
            let params = ResizeParams::new(
                Point::new(x0 as u32, y0 as u32),
                Size::new(w as u32, h as u32),
                Size::new(w as u32, h as u32),
            )
            .with_orientation(orientation);
            let target = resize_once(format, &source, &params);
            let order = orientation.scan_order();
            let luma = &target[0];
            for r in 0..luma.height as usize {
                for c in 0..luma.width as usize {
                    let (mut sx, mut sy) = if order.transpose { (r, c) } else { (c, r) };
                    if order.flip_x {
                        sx = w - 1 - sx;
                    }
                    if order.flip_y {
                        sy = h - 1 - sy;
                    }
                    assert_eq!(
                        luma.row(r)[c],
                        source[0].row(y0 + sy)[x0 + sx],
                        "{orientation:?} at {r}x{c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rotate_180_twice_is_identity() {
        let format = PixelFormat::Yuv420Planar;
        let source = random_planes(format, 20, 14, 5);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(20, 14), Size::new(20, 14))
            .with_orientation(Orientation::BottomRight);
        let once = resize_once(format, &source, &params);
        let twice = resize_once(format, &once, &params);
        for (src, dst) in source.iter().zip(twice.iter()) {
            assert_eq!(plane_rows(src), plane_rows(dst));
        }
    }

    fn assert_stripes_match(format: PixelFormat, params: ResizeParams, stripe: u32) {
        let source = random_planes(format, 64, 48, 6);
        let whole = resize_once(format, &source, &params);

        let mut resizer = AreaOfInterestResizer::new(format);
        resizer.configure(&params.with_stripe_mode(true)).unwrap();
        let fixed = planes_to_fixed(&source);
        let luma_rows = whole[0].height;
        let mut striped: Vec<Vec<Vec<u8>>> = vec![Vec::new(); format.planes_count()];
        let mut done = 0u32;
        while done < luma_rows {
            let rows = stripe.min(luma_rows - done);
            let mut band: Vec<ImagePlaneMut<'static, u8>> = whole
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let kind = PlaneKind::from_index(i);
                    ImagePlaneMut::alloc(p.width, kind.dimension(rows))
                })
                .collect();
            resizer.get(&fixed, &mut band).unwrap();
            for (collected, plane) in striped.iter_mut().zip(band.iter()) {
                collected.extend(plane_rows(plane));
            }
            done += rows;
        }
        assert_eq!(resizer.processed_rows(), 0);
        for (i, plane) in whole.iter().enumerate() {
            assert_eq!(plane_rows(plane), striped[i], "plane {i} of {params:?}");
        }
    }

    #[test]
    fn test_stripes_match_single_call() {
        let origin = Point::new(3, 5);
        let roi = Size::new(50, 38);
        for format in [PixelFormat::Yuv420Planar, PixelFormat::Yuv420PlanarAlpha] {
            for output in [Size::new(40, 30), Size::new(80, 60), Size::new(50, 38)] {
                for orientation in ORIENTATIONS {
                    let params =
                        ResizeParams::new(origin, roi, output).with_orientation(orientation);
                    assert_stripes_match(format, params, 8);
                }
            }
        }
    }

    #[test]
    fn test_alpha_is_binarized() {
        let format = PixelFormat::Yuv420PlanarAlpha;
        let source = random_planes(format, 64, 64, 7);
        for orientation in [Orientation::TopLeft, Orientation::RightBottom] {
            for output in [Size::new(40, 40), Size::new(100, 90)] {
                let params = ResizeParams::new(Point::new(0, 0), Size::new(64, 64), output)
                    .with_orientation(orientation);
                let target = resize_once(format, &source, &params);
                let alpha = &target[3];
                for y in 0..alpha.height as usize {
                    assert!(alpha.row(y).iter().all(|&a| a == 0 || a == 0xff));
                }
                // Luma keeps intermediate values
                let luma = &target[0];
                let intermediate = (0..luma.height as usize)
                    .flat_map(|y| luma.row(y).to_vec())
                    .any(|v| v != 0 && v != 0xff);
                assert!(intermediate);
            }
        }
    }

    #[test]
    fn test_pass_resets_after_full_output() {
        let format = PixelFormat::Yuv420Planar;
        let source = random_planes(format, 64, 48, 8);
        let fixed = planes_to_fixed(&source);
        let params = ResizeParams::new(Point::new(2, 2), Size::new(60, 44), Size::new(40, 30))
            .with_stripe_mode(true);
        let mut resizer = AreaOfInterestResizer::new(format);
        resizer.configure(&params).unwrap();

        let mut first_band = Vec::new();
        for pass in 0..2 {
            let mut delivered = 0;
            for rows in [8u32, 8, 8, 6] {
                let mut band = alloc_planes::<u8>(format, 40, rows);
                resizer.get(&fixed, &mut band).unwrap();
                delivered += rows;
                let expected = if delivered == 30 { 0 } else { delivered };
                assert_eq!(resizer.processed_rows(), expected);
                if delivered == 8 {
                    if pass == 0 {
                        first_band = plane_rows(&band[0]);
                    } else {
                        assert_eq!(first_band, plane_rows(&band[0]));
                    }
                }
            }
        }
    }

    #[test]
    fn test_configure_restarts_stripe_pass() {
        let format = PixelFormat::Yuv420Planar;
        let source = random_planes(format, 32, 32, 9);
        let fixed = planes_to_fixed(&source);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(32, 32), Size::new(24, 24))
            .with_stripe_mode(true);
        let mut resizer = AreaOfInterestResizer::new(format);
        resizer.configure(&params).unwrap();

        let mut band = alloc_planes::<u8>(format, 24, 8);
        resizer.get(&fixed, &mut band).unwrap();
        let first = plane_rows(&band[1]);
        resizer.get(&fixed, &mut band).unwrap();
        assert_eq!(resizer.processed_rows(), 16);

        resizer.configure(&params).unwrap();
        assert_eq!(resizer.processed_rows(), 0);
        resizer.get(&fixed, &mut band).unwrap();
        assert_eq!(first, plane_rows(&band[1]));
    }

    #[test]
    fn test_upscale_anchors_first_and_last_columns() {
        // (16 - 1) * 2^16 is a multiple of (31 - 1), sample positions land exactly
        let format = PixelFormat::Yuv420Planar;
        let mut source = alloc_planes::<u8>(format, 16, 8);
        for y in 0..8 {
            for (x, v) in source[0].row_mut(y).iter_mut().enumerate() {
                *v = (x * 17) as u8;
            }
        }
        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 8), Size::new(31, 8));
        let target = resize_once(format, &source, &params);
        for y in 0..8 {
            let row = target[0].row(y);
            assert_eq!(row[0], 0);
            assert_eq!(row[30], 255);
            assert_eq!(row[2], 17);
        }
    }

    #[test]
    fn test_horizontal_gradient_upscale() {
        let format = PixelFormat::Yuv420Planar;
        let mut source = alloc_planes::<u8>(format, 64, 64);
        for y in 0..64 {
            for (x, v) in source[0].row_mut(y).iter_mut().enumerate() {
                *v = (x * 255 / 63) as u8;
            }
        }
        let params = ResizeParams::new(Point::new(0, 0), Size::new(64, 64), Size::new(128, 64));
        let target = resize_once(format, &source, &params);
        let row = target[0].row(0);
        assert_eq!(row.len(), 128);
        assert_eq!(row[0], 0);
        // truncated increment stops the last sample within 1/16 of the edge
        assert!(row[127] >= 254);
        assert!(row.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(target[0].row(63), row);
    }

    #[test]
    fn test_odd_origin_shifts_chroma_phase() {
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let params = ResizeParams::new(Point::new(1, 1), Size::new(32, 32), Size::new(16, 16));
        resizer.configure(&params).unwrap();
        assert_eq!(resizer.scans[0].x_accum_start, 0x8000);
        assert_eq!(resizer.scans[1].x_accum_start, 0x10000);
        assert_eq!(resizer.scans[2].y_accum_start, 0x10000);

        let params = ResizeParams::new(Point::new(2, 2), Size::new(32, 32), Size::new(16, 16));
        resizer.configure(&params).unwrap();
        assert_eq!(resizer.scans[1].x_accum_start, 0x8000);
    }

    #[test]
    fn test_odd_origin_chroma_samples_halfway() {
        let format = PixelFormat::Yuv420Planar;
        let mut source = alloc_planes::<u8>(format, 8, 4);
        for plane in source.iter_mut().skip(1) {
            for y in 0..plane.height as usize {
                plane.row_mut(y).copy_from_slice(&[0, 64, 128, 192]);
            }
        }

        // Chroma 2 -> 4 upscale, increment 0x5555, start shifted to 0x8000
        let params = ResizeParams::new(Point::new(1, 0), Size::new(4, 2), Size::new(8, 2));
        let target = resize_once(format, &source, &params);
        assert_eq!(target[1].row(0), &[32, 52, 72, 92]);
        assert_eq!(target[2].row(0), &[32, 52, 72, 92]);

        let params = ResizeParams::new(Point::new(0, 0), Size::new(4, 2), Size::new(8, 2));
        let target = resize_once(format, &source, &params);
        assert_eq!(target[1].row(0), &[0, 20, 40, 60]);
    }

    #[test]
    fn test_plane_count_checked() {
        let source = random_planes(PixelFormat::Yuv420Planar, 16, 16, 10);
        let mut target = alloc_planes::<u8>(PixelFormat::Yuv420PlanarAlpha, 16, 16);
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420PlanarAlpha);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(16, 16));
        resizer.configure(&params).unwrap();
        assert!(matches!(
            resizer.get(&planes_to_fixed(&source), &mut target),
            Err(AoiError::PlaneCountMismatch(_))
        ));
    }

    #[test]
    fn test_roi_outside_input() {
        let source = random_planes(PixelFormat::Yuv420Planar, 16, 16, 11);
        let mut target = alloc_planes::<u8>(PixelFormat::Yuv420Planar, 8, 8);
        let mut resizer = AreaOfInterestResizer::new(PixelFormat::Yuv420Planar);
        let params = ResizeParams::new(Point::new(10, 0), Size::new(8, 8), Size::new(8, 8));
        resizer.configure(&params).unwrap();
        assert_eq!(
            resizer.get(&planes_to_fixed(&source), &mut target),
            Err(AoiError::RoiOutOfBounds)
        );
    }

    #[test]
    fn test_padded_output_keeps_padding() {
        let format = PixelFormat::Yuv420Planar;
        let source = random_planes(format, 16, 16, 12);
        let mut luma = vec![0xAAu8; 24 * 10];
        let mut u = vec![0xAAu8; 12 * 5];
        let mut v = vec![0xAAu8; 12 * 5];
        let mut target = vec![
            ImagePlaneMut::borrowed(&mut luma, 8, 8, 24),
            ImagePlaneMut::borrowed(&mut u, 4, 4, 12),
            ImagePlaneMut::borrowed(&mut v, 4, 4, 12),
        ];
        target[0].top_left = 24 + 2;
        target[1].top_left = 12 + 1;
        target[2].top_left = 12 + 1;
        let mut resizer = AreaOfInterestResizer::new(format);
        let params = ResizeParams::new(Point::new(0, 0), Size::new(16, 16), Size::new(8, 8));
        resizer.configure(&params).unwrap();
        resizer.get(&planes_to_fixed(&source), &mut target).unwrap();
        drop(target);

        assert!(luma[..24 + 2].iter().all(|&p| p == 0xAA));
        for row in 1..9 {
            let line = &luma[row * 24..(row + 1) * 24];
            assert!(line[..2].iter().all(|&p| p == 0xAA));
            assert!(line[10..].iter().all(|&p| p == 0xAA));
        }
        assert!(luma[9 * 24..].iter().all(|&p| p == 0xAA));
    }
}
