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
use image::{GrayImage, ImageReader};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use yuv_aoi::{
    alloc_planes, fill_black, plan_rendering, planes_to_fixed, AreaOfInterestResizer,
    ImagePlaneMut, MediaRendering, Orientation, PixelFormat, Size,
};

const STRIPE_HEIGHT: u32 = 16;

fn load_luma(path: Option<String>) -> GrayImage {
    match path {
        Some(path) => ImageReader::open(path)
            .unwrap()
            .decode()
            .unwrap()
            .to_luma8(),
        None => GrayImage::from_fn(640, 480, |x, y| image::Luma([((x + y) & 0xff) as u8])),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let img = load_luma(std::env::args().nth(1));
    let width = img.width() & !1;
    let height = img.height() & !1;

    let format = PixelFormat::Yuv420Planar;
    let mut source = alloc_planes::<u8>(format, width, height);
    for y in 0..height as usize {
        let src_row = &img.as_raw()[y * img.width() as usize..][..width as usize];
        source[0].row_mut(y).copy_from_slice(src_row);
    }
    source[1].fill(128);
    source[2].fill(128);
    let fixed = planes_to_fixed(&source);

    let target = Size::new(480, 480);
    let orientations = [
        Orientation::TopLeft,
        Orientation::BottomRight,
        Orientation::RightTop,
        Orientation::LeftBottom,
    ];
    let modes = [
        MediaRendering::Resizing,
        MediaRendering::Cropping,
        MediaRendering::BlackBorders,
    ];

    let mut resizer = AreaOfInterestResizer::new(format);
    for mode in modes {
        for orientation in orientations {
            let plan =
                plan_rendering(Size::new(width, height), target, orientation, mode).unwrap();
            let mut frame = alloc_planes::<u8>(format, target.width, target.height);
            fill_black(&mut frame);

            resizer
                .configure(&plan.params.with_stripe_mode(true))
                .unwrap();

            let start_time = Instant::now();
            let mut delivered = 0u32;
            while delivered < plan.extent.height {
                let rows = STRIPE_HEIGHT.min(plan.extent.height - delivered);
                let mut band: Vec<ImagePlaneMut<'_, u8>> = frame
                    .iter_mut()
                    .map(|p| ImagePlaneMut::borrowed(p.data.as_mut(), p.width, p.height, p.stride))
                    .collect();
                plan.place(&mut band).unwrap();
                for (i, plane) in band.iter_mut().enumerate() {
                    let shift = if i == 0 { 0 } else { 1 };
                    plane.top_left += (delivered >> shift) as usize * plane.stride as usize;
                    plane.height = if i == 0 { rows } else { (rows + 1) >> 1 };
                }
                resizer.get(&fixed, &mut band).unwrap();
                delivered += rows;
            }
            println!(
                "{:?} {:?}: {:?} -> {:?} in {:?}",
                mode,
                orientation,
                plan.params.input_size,
                plan.extent,
                start_time.elapsed()
            );

            let luma = frame.swap_remove(0);
            let out = GrayImage::from_raw(target.width, target.height, luma.data.borrow().to_vec())
                .unwrap();
            out.save(format!("aoi_{:?}_{:?}.png", mode, orientation))
                .unwrap();
        }
    }
}
