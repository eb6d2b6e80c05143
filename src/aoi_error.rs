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
use crate::aoi_support::Size;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AoiError {
    /// Raw pixel format code is not one of the supported planar layouts
    UnsupportedFormat(u32),
    /// Raw orientation code is outside of 1..=8
    InvalidOrientation(u32),
    /// Region of interest must have even width and height
    IllegalFrameSize(Size),
    /// `get` was called before a successful `configure`
    BadState,
    ZeroBaseSize,
    PlaneCountMismatch(MismatchedSize),
    PlaneSizeMismatch(MismatchedSize),
    PlaneMinimumSizeMismatch(MismatchedSize),
    RoiOutOfBounds,
    PointerOverflow,
}

impl Display for AoiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AoiError::UnsupportedFormat(code) => {
                f.write_fmt(format_args!("Pixel format {code} is not supported"))
            }
            AoiError::InvalidOrientation(code) => {
                f.write_fmt(format_args!("Orientation {code} is not a valid orientation"))
            }
            AoiError::IllegalFrameSize(size) => f.write_fmt(format_args!(
                "Region of interest must have even dimensions, but it was {}x{}",
                size.width, size.height
            )),
            AoiError::BadState => f.write_str("Resizer must be configured before use"),
            AoiError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            AoiError::PlaneCountMismatch(size) => f.write_fmt(format_args!(
                "Plane count mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            AoiError::PlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            AoiError::PlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane stride is too small, row must hold at least {} but it holds {}",
                size.expected, size.received
            )),
            AoiError::RoiOutOfBounds => {
                f.write_str("Region of interest lies outside of the input planes")
            }
            AoiError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
        }
    }
}

impl Error for AoiError {}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, AoiError> {
    v0.checked_mul(v1)
        .and_then(|product| product.checked_add(v2))
        .ok_or(AoiError::PointerOverflow)
}

/// Checks that a plane buffer covers `height` rows of `width` samples
/// laid out with `stride` elements per row starting at `top_left`.
#[inline]
pub(crate) fn check_plane<V>(
    data: &[V],
    top_left: usize,
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), AoiError> {
    if width == 0 || height == 0 {
        return Err(AoiError::ZeroBaseSize);
    }
    if stride < width {
        return Err(AoiError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let last_row = check_overflow_v3(height as usize - 1, stride as usize, top_left)?;
    let required = last_row
        .checked_add(width as usize)
        .ok_or(AoiError::PointerOverflow)?;
    if data.len() < required {
        return Err(AoiError::PlaneSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_plane_count(expected: usize, received: usize) -> Result<(), AoiError> {
    if expected != received {
        return Err(AoiError::PlaneCountMismatch(MismatchedSize { expected, received }));
    }
    Ok(())
}
