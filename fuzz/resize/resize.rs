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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yuv_aoi::{
    alloc_planes, planes_to_fixed, AreaOfInterestResizer, Orientation, PixelFormat, Point,
    ResizeParams, Size,
};

#[derive(Debug, Arbitrary)]
struct ResizeInput {
    width: u8,
    height: u8,
    origin_x: u8,
    origin_y: u8,
    roi_width: u8,
    roi_height: u8,
    out_width: u8,
    out_height: u8,
    orientation: u8,
    with_alpha: bool,
    stripe_height: u8,
}

fuzz_target!(|data: ResizeInput| {
    fuzz_resize(data);
});

fn fuzz_resize(data: ResizeInput) {
    if data.width == 0 || data.height == 0 {
        return;
    }
    let Ok(orientation) = Orientation::try_from(data.orientation as u32 % 9) else {
        return;
    };
    let format = if data.with_alpha {
        PixelFormat::Yuv420PlanarAlpha
    } else {
        PixelFormat::Yuv420Planar
    };

    let mut source = alloc_planes::<u8>(format, data.width as u32, data.height as u32);
    for (i, plane) in source.iter_mut().enumerate() {
        plane.fill(40 + i as u8 * 30);
    }
    let fixed = planes_to_fixed(&source);

    let stripe_mode = data.stripe_height != 0;
    let params = ResizeParams::new(
        Point::new(data.origin_x as u32, data.origin_y as u32),
        Size::new(data.roi_width as u32, data.roi_height as u32),
        Size::new(data.out_width as u32, data.out_height as u32),
    )
    .with_orientation(orientation)
    .with_stripe_mode(stripe_mode);

    let mut resizer = AreaOfInterestResizer::new(format);
    if resizer.configure(&params).is_err() {
        return;
    }

    let frame = if orientation.is_transposing() {
        params.output_size.transposed()
    } else {
        params.output_size
    };
    let band = if stripe_mode {
        ((data.stripe_height as u32) & !1).max(2).min(frame.height)
    } else {
        frame.height
    };

    let mut delivered = 0u32;
    while delivered < frame.height {
        let rows = band.min(frame.height - delivered);
        let mut target = alloc_planes::<u8>(format, frame.width, rows);
        if resizer.get(&fixed, &mut target).is_err() {
            return;
        }
        delivered += rows;
    }
    assert_eq!(resizer.processed_rows(), 0);
}
