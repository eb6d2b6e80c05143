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
use crate::orientation::Orientation;
use crate::AoiError;

#[repr(u32)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Declares supported planar input layouts
pub enum PixelFormat {
    /// Y, U, V planes, chroma is 2 times subsampled on both axes
    Yuv420Planar = 0,
    /// Y, U, V planes as [PixelFormat::Yuv420Planar] followed by a full resolution alpha plane
    Yuv420PlanarAlpha = 1,
}

impl PixelFormat {
    #[inline]
    pub const fn planes_count(self) -> usize {
        match self {
            PixelFormat::Yuv420Planar => 3,
            PixelFormat::Yuv420PlanarAlpha => 4,
        }
    }

    #[inline]
    pub const fn has_alpha(self) -> bool {
        match self {
            PixelFormat::Yuv420Planar => false,
            PixelFormat::Yuv420PlanarAlpha => true,
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = AoiError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PixelFormat::Yuv420Planar),
            1 => Ok(PixelFormat::Yuv420PlanarAlpha),
            _ => Err(AoiError::UnsupportedFormat(value)),
        }
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) enum PlaneKind {
    Luma,
    Chroma,
    Alpha,
}

impl PlaneKind {
    #[inline]
    pub(crate) const fn from_index(index: usize) -> PlaneKind {
        match index {
            0 => PlaneKind::Luma,
            3 => PlaneKind::Alpha,
            _ => PlaneKind::Chroma,
        }
    }

    /// Shift applied to luma coordinates to land on this plane
    #[inline]
    pub(crate) const fn shift(self) -> u32 {
        match self {
            PlaneKind::Luma | PlaneKind::Alpha => 0,
            PlaneKind::Chroma => 1,
        }
    }

    /// Plane dimension for a luma dimension, chroma rounds up
    #[inline]
    pub(crate) const fn dimension(self, luma: u32) -> u32 {
        match self {
            PlaneKind::Luma | PlaneKind::Alpha => luma,
            PlaneKind::Chroma => (luma >> 1) + (luma & 1),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Point {
        Point { x, y }
    }
}

#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Size {
        Size { width, height }
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.width & 1 == 0 && self.height & 1 == 0
    }

    /// Same size with axes exchanged
    #[inline]
    pub const fn transposed(self) -> Size {
        Size {
            width: self.height,
            height: self.width,
        }
    }
}

/// Describes which part of the input is taken and how it lands in the output.
///
/// `output_size` is expressed in the input frame: for orientations that exchange
/// axes the output plane is `output_size.height` wide and `output_size.width` tall.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ResizeParams {
    /// First luma sample of the region of interest
    pub input_origin: Point,
    /// Region of interest size, both dimensions must be even
    pub input_size: Size,
    pub output_size: Size,
    /// When set, output is delivered over several `get` calls, one band each
    pub stripe_mode: bool,
    pub output_orientation: Orientation,
}

impl ResizeParams {
    pub const fn new(input_origin: Point, input_size: Size, output_size: Size) -> ResizeParams {
        ResizeParams {
            input_origin,
            input_size,
            output_size,
            stripe_mode: false,
            output_orientation: Orientation::TopLeft,
        }
    }

    pub const fn with_stripe_mode(mut self, stripe_mode: bool) -> ResizeParams {
        self.stripe_mode = stripe_mode;
        self
    }

    pub const fn with_orientation(mut self, orientation: Orientation) -> ResizeParams {
        self.output_orientation = orientation;
        self
    }
}
