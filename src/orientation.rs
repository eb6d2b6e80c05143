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
use crate::AoiError;

/// Declares output orientation as the place where the top-left corner of the
/// input ends up, values follow the EXIF orientation tag.
///
/// ```text
/// TopLeft (1)     TopRight (2)    BottomRight (3) BottomLeft (4)
/// 1 2             2 1             4 3             3 4
/// 3 4             4 3             2 1             1 2
///
/// LeftTop (5)     RightTop (6)    RightBottom (7) LeftBottom (8)
/// 1 3             3 1             4 2             2 4
/// 2 4             4 2             3 1             1 3
/// ```
#[repr(u32)]
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

/// Order in which the input is scanned to produce output rows
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct ScanOrder {
    /// Columns are read right to left
    pub flip_x: bool,
    /// Rows are read bottom to top
    pub flip_y: bool,
    /// Output rows are input columns
    pub transpose: bool,
}

impl Orientation {
    pub const fn scan_order(self) -> ScanOrder {
        let (flip_x, flip_y, transpose) = match self {
            Orientation::TopLeft => (false, false, false),
            Orientation::TopRight => (true, false, false),
            Orientation::BottomRight => (true, true, false),
            Orientation::BottomLeft => (false, true, false),
            Orientation::LeftTop => (false, false, true),
            Orientation::RightTop => (false, true, true),
            Orientation::RightBottom => (true, true, true),
            Orientation::LeftBottom => (true, false, true),
        };
        ScanOrder {
            flip_x,
            flip_y,
            transpose,
        }
    }

    /// Returns true if output axes are exchanged against input
    #[inline]
    pub const fn is_transposing(self) -> bool {
        self.scan_order().transpose
    }
}

impl TryFrom<u32> for Orientation {
    type Error = AoiError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Orientation::TopLeft),
            2 => Ok(Orientation::TopRight),
            3 => Ok(Orientation::BottomRight),
            4 => Ok(Orientation::BottomLeft),
            5 => Ok(Orientation::LeftTop),
            6 => Ok(Orientation::RightTop),
            7 => Ok(Orientation::RightBottom),
            8 => Ok(Orientation::LeftBottom),
            _ => Err(AoiError::InvalidOrientation(value)),
        }
    }
}
