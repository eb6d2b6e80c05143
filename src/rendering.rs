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
use crate::aoi_support::{PlaneKind, Point, ResizeParams, Size};
use crate::images::ImagePlaneMut;
use crate::orientation::Orientation;
use crate::AoiError;
use tracing::debug;

/// Declares how a picture is fitted into a target of another aspect ratio
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum MediaRendering {
    /// Whole picture is stretched to the target
    #[default]
    Resizing,
    /// Picture is cropped around its center to the target aspect ratio
    Cropping,
    /// Whole picture keeps its aspect ratio, remaining target area is black
    BlackBorders,
}

/// Resize parameters together with the part of the target they fill.
///
/// `placement` and `extent` are expressed in target (displayed) coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RenderPlan {
    pub params: ResizeParams,
    pub placement: Point,
    pub extent: Size,
}

#[inline]
const fn even(v: u32) -> u32 {
    v & !1
}

#[inline]
fn scaled(v: u32, num: u32, den: u32) -> u32 {
    ((v as u64 * num as u64) / den as u64) as u32
}

/// Computes resize parameters fitting a `source` picture into `target`.
///
/// # Arguments
///
/// * `source`: Decoded picture size
/// * `target`: Output size as displayed, after orientation is applied
/// * `orientation`: Output orientation, see [Orientation]
/// * `mode`: Refer to [MediaRendering] for mode info
///
/// returns: Result<[RenderPlan], [AoiError]>
///
pub fn plan_rendering(
    source: Size,
    target: Size,
    orientation: Orientation,
    mode: MediaRendering,
) -> Result<RenderPlan, AoiError> {
    let source = Size::new(even(source.width), even(source.height));
    let target = Size::new(even(target.width), even(target.height));
    if source.width == 0 || source.height == 0 || target.width == 0 || target.height == 0 {
        return Err(AoiError::ZeroBaseSize);
    }
    // Resize works in the source frame, the output is transposed afterwards
    let frame = if orientation.is_transposing() {
        target.transposed()
    } else {
        target
    };

    let mut input_origin = Point::new(0, 0);
    let mut input_size = source;
    let mut output_size = frame;

    match mode {
        MediaRendering::Resizing => {}
        MediaRendering::Cropping => {
            let fitted_height = scaled(frame.height, source.width, frame.width);
            if fitted_height < source.height {
                input_size.height = even(fitted_height);
                input_origin.y = (source.height - input_size.height) >> 1;
            } else {
                input_size.width = even(scaled(frame.width, source.height, frame.height));
                input_origin.x = (source.width - input_size.width) >> 1;
            }
        }
        MediaRendering::BlackBorders => {
            let source_is_wider = source.width as u64 * frame.height as u64
                > source.height as u64 * frame.width as u64;
            if source_is_wider {
                output_size.height = even(scaled(frame.width, source.height, source.width));
            } else {
                output_size.width = even(scaled(frame.height, source.width, source.height));
            }
        }
    }

    if input_size.width == 0
        || input_size.height == 0
        || output_size.width == 0
        || output_size.height == 0
    {
        return Err(AoiError::ZeroBaseSize);
    }

    let extent = if orientation.is_transposing() {
        output_size.transposed()
    } else {
        output_size
    };
    // Even placement keeps chroma samples aligned with luma
    let placement = Point::new(
        even((target.width - extent.width) >> 1),
        even((target.height - extent.height) >> 1),
    );

    debug!(?source, ?target, ?mode, ?input_size, ?output_size, ?placement, "planned rendering");

    Ok(RenderPlan {
        params: ResizeParams::new(input_origin, input_size, output_size)
            .with_orientation(orientation),
        placement,
        extent,
    })
}

impl RenderPlan {
    /// Narrows full target planes to the area this plan renders into
    pub fn place(&self, planes: &mut [ImagePlaneMut<'_, u8>]) -> Result<(), AoiError> {
        for (i, plane) in planes.iter_mut().enumerate() {
            let kind = PlaneKind::from_index(i);
            let shift = kind.shift();
            let x = (self.placement.x >> shift) as usize;
            let y = (self.placement.y >> shift) as usize;
            let width = kind.dimension(self.extent.width);
            let height = kind.dimension(self.extent.height);
            if x + width as usize > plane.width as usize
                || y + height as usize > plane.height as usize
            {
                return Err(AoiError::RoiOutOfBounds);
            }
            plane.top_left += y * plane.stride as usize + x;
            plane.width = width;
            plane.height = height;
        }
        Ok(())
    }
}

/// Paints planes black: luma and alpha 0, chroma neutral
pub fn fill_black(planes: &mut [ImagePlaneMut<'_, u8>]) {
    for (i, plane) in planes.iter_mut().enumerate() {
        let value = match PlaneKind::from_index(i) {
            PlaneKind::Chroma => 128,
            PlaneKind::Luma | PlaneKind::Alpha => 0,
        };
        plane.fill(value);
    }
}
