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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv_aoi::{
    alloc_planes, planes_to_fixed, AreaOfInterestResizer, ImagePlaneMut, Orientation,
    PixelFormat, Point, ResizeParams, Size,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn bench_params(c: &mut Criterion, name: &str, format: PixelFormat, params: ResizeParams) {
    let mut source = alloc_planes::<u8>(format, WIDTH, HEIGHT);
    let mut rng = rand::rng();
    for plane in source.iter_mut() {
        rng.fill(plane.data.as_mut());
    }
    let fixed = planes_to_fixed(&source);
    let out = if params.output_orientation.is_transposing() {
        params.output_size.transposed()
    } else {
        params.output_size
    };
    let mut target: Vec<ImagePlaneMut<'static, u8>> = alloc_planes(format, out.width, out.height);
    let mut resizer = AreaOfInterestResizer::new(format);
    resizer.configure(&params).unwrap();

    c.bench_function(name, |b| {
        b.iter(|| {
            resizer.get(&fixed, &mut target).unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let full = Size::new(WIDTH, HEIGHT);
    let origin = Point::new(0, 0);

    bench_params(
        c,
        "yuv-aoi: Copy 1080p",
        PixelFormat::Yuv420Planar,
        ResizeParams::new(origin, full, full),
    );
    bench_params(
        c,
        "yuv-aoi: Copy rotate 90 1080p",
        PixelFormat::Yuv420Planar,
        ResizeParams::new(origin, full, full).with_orientation(Orientation::RightTop),
    );
    bench_params(
        c,
        "yuv-aoi: Bilinear 1080p -> 720p",
        PixelFormat::Yuv420Planar,
        ResizeParams::new(origin, full, Size::new(1280, 720)),
    );
    bench_params(
        c,
        "yuv-aoi: Bilinear rotate 270 1080p -> 720p",
        PixelFormat::Yuv420Planar,
        ResizeParams::new(origin, full, Size::new(1280, 720))
            .with_orientation(Orientation::LeftBottom),
    );
    bench_params(
        c,
        "yuv-aoi: Bilinear with alpha 1080p -> 720p",
        PixelFormat::Yuv420PlanarAlpha,
        ResizeParams::new(origin, full, Size::new(1280, 720)),
    );
    bench_params(
        c,
        "yuv-aoi: Bilinear crop 960x540 -> 1080p",
        PixelFormat::Yuv420Planar,
        ResizeParams::new(Point::new(480, 270), Size::new(960, 540), full),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
