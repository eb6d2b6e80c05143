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
use crate::aoi_error::check_plane;
use crate::aoi_support::{PixelFormat, PlaneKind};
use crate::AoiError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Non-mutable single image plane
pub struct ImagePlane<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    pub width: u32,
    pub height: u32,
    /// Stride here always means Elements per row.
    pub stride: u32,
    /// Offset in elements of the first sample of the plane
    pub top_left: usize,
}

impl<'a, T> ImagePlane<'a, T>
where
    T: Copy + Debug,
{
    pub fn new(data: &'a [T], width: u32, height: u32, stride: u32) -> Self {
        ImagePlane {
            data,
            width,
            height,
            stride,
            top_left: 0,
        }
    }

    pub fn check_constraints(&self) -> Result<(), AoiError> {
        check_plane(
            self.data,
            self.top_left,
            self.stride,
            self.width,
            self.height,
        )
    }

    /// Sample at `x`, `y`, coordinates are clamped to the plane
    #[inline(always)]
    pub(crate) fn clamped(&self, x: isize, y: isize) -> T {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.data[self.top_left + y * self.stride as usize + x]
    }
}

#[derive(Debug)]
/// Mutable single image plane
pub struct ImagePlaneMut<'a, T>
where
    T: Copy + Debug,
{
    pub data: BufferStoreMut<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Stride here always means Elements per row.
    pub stride: u32,
    /// Offset in elements of the first sample of the plane
    pub top_left: usize,
}

impl<'a, T> ImagePlaneMut<'a, T>
where
    T: Copy + Debug,
{
    pub fn borrowed(data: &'a mut [T], width: u32, height: u32, stride: u32) -> Self {
        ImagePlaneMut {
            data: BufferStoreMut::Borrowed(data),
            width,
            height,
            stride,
            top_left: 0,
        }
    }

    pub fn check_constraints(&self) -> Result<(), AoiError> {
        check_plane(
            self.data.borrow(),
            self.top_left,
            self.stride,
            self.width,
            self.height,
        )
    }

    pub fn to_fixed(&self) -> ImagePlane<'_, T> {
        ImagePlane {
            data: self.data.borrow(),
            width: self.width,
            height: self.height,
            stride: self.stride,
            top_left: self.top_left,
        }
    }

    /// Visible samples of row `y`
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = self.top_left + y * self.stride as usize;
        &self.data.borrow()[start..start + self.width as usize]
    }

    /// Visible samples of row `y`
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = self.top_left + y * self.stride as usize;
        let width = self.width as usize;
        &mut self.data.as_mut()[start..start + width]
    }

    /// Sets every visible sample to `value`
    pub fn fill(&mut self, value: T) {
        for y in 0..self.height as usize {
            self.row_mut(y).fill(value);
        }
    }
}

impl<T> ImagePlaneMut<'_, T>
where
    T: Copy + Debug + Clone + Default,
{
    /// Allocates tightly packed mutable plane
    pub fn alloc(width: u32, height: u32) -> Self {
        let target = vec![T::default(); width as usize * height as usize];
        ImagePlaneMut {
            data: BufferStoreMut::Owned(target),
            width,
            height,
            stride: width,
            top_left: 0,
        }
    }
}

/// Allocates the plane set of `format` for a `width`x`height` image,
/// chroma planes are 2 times subsampled and rounded up.
pub fn alloc_planes<T>(format: PixelFormat, width: u32, height: u32) -> Vec<ImagePlaneMut<'static, T>>
where
    T: Copy + Debug + Clone + Default,
{
    (0..format.planes_count())
        .map(|i| {
            let kind = PlaneKind::from_index(i);
            ImagePlaneMut::alloc(kind.dimension(width), kind.dimension(height))
        })
        .collect()
}

/// Non-mutable view of every plane in a set
pub fn planes_to_fixed<'a, T>(planes: &'a [ImagePlaneMut<'_, T>]) -> Vec<ImagePlane<'a, T>>
where
    T: Copy + Debug,
{
    planes.iter().map(|p| p.to_fixed()).collect()
}
