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
use crate::AoiError;

/// 1.0 in 16.16 fixed point
pub(crate) const Q16_ONE: u32 = 0x10000;
/// 0.5 in 16.16 fixed point
pub(crate) const Q16_HALF: u32 = 0x8000;
pub(crate) const Q16_FRACTION_MASK: u32 = 0xffff;

#[inline]
/// Ratio between input and output length in 16.16.
///
/// Upscaling maps first and last samples exactly onto each other,
/// downscaling uses the plain length ratio.
///
/// Fails when the ratio leaves no room for a whole step on top of an
/// accumulator fraction.
pub(crate) fn scale_increment(input_len: u32, output_len: u32) -> Result<u32, AoiError> {
    let increment = if output_len >= input_len && output_len > 1 {
        ((input_len as u64 - 1) * Q16_ONE as u64) / (output_len as u64 - 1)
    } else {
        (input_len as u64 * Q16_ONE as u64) / output_len.max(1) as u64
    };
    if increment > (u32::MAX - Q16_ONE) as u64 {
        return Err(AoiError::PointerOverflow);
    }
    Ok(increment as u32)
}

#[inline]
/// Initial accumulator value, lies in [0, 0.5] and centers the
/// sampling window when decimating.
pub(crate) fn accumulator_start(increment: u32) -> u32 {
    if increment >= Q16_ONE {
        let fraction = increment & Q16_FRACTION_MASK;
        if fraction == 0 {
            Q16_ONE >> 1
        } else {
            fraction >> 1
        }
    } else {
        0
    }
}

#[inline(always)]
/// 4 bit blend weight of an accumulator
pub(crate) const fn blend_weight(accum: u32) -> u32 {
    (accum >> 12) & 15
}

#[inline(always)]
/// Integer part of an accumulator
pub(crate) const fn whole_steps(accum: u32) -> usize {
    (accum >> 16) as usize
}

#[inline(always)]
/// Bilinear combination of `top_a`, `top_b` on the current row and
/// `bottom_a`, `bottom_b` one row step away, weights are 4 bit fractions.
pub(crate) const fn blend(
    top_a: u8,
    top_b: u8,
    bottom_a: u8,
    bottom_b: u8,
    x_frac: u32,
    y_frac: u32,
) -> u8 {
    let x_inv = 16 - x_frac;
    let top = top_a as u32 * x_inv + top_b as u32 * x_frac;
    let bottom = bottom_a as u32 * x_inv + bottom_b as u32 * x_frac;
    ((top * (16 - y_frac) + bottom * y_frac) >> 8) as u8
}

#[inline(always)]
/// Alpha is kept binary, anything at least half opaque becomes opaque
pub(crate) const fn binarize_alpha(v: u8) -> u8 {
    (v >> 7) * 0xff
}
