use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use bayer_ccm::colour_correction::{CfaPattern, ColourMatrix, CorrectionEngine, Rect};

fn generate_mock_mosaic(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

fn warm_matrix() -> ColourMatrix {
    ColourMatrix::new([[1.25, -0.15, -0.1], [-0.05, 1.1, -0.05], [-0.1, -0.2, 1.3]])
}

fn benchmark_frame_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction_by_size");
    let engine = CorrectionEngine::default();
    let matrix = warm_matrix();

    let sizes = vec![
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
        (4096, 3000, "4096x3000"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_mock_mosaic(width, height);
        let rect = Rect::sized(width as i32, height as i32);

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            let mut buf = frame.clone();
            b.iter(|| {
                buf.copy_from_slice(frame);
                engine
                    .apply(black_box(&mut buf), rect, &matrix, CfaPattern::Rggb)
                    .ok();
            });
        });
    }

    group.finish();
}

fn benchmark_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction_by_pattern");
    let engine = CorrectionEngine::default();
    let matrix = warm_matrix();
    let frame = generate_mock_mosaic(1280, 960);
    let rect = Rect::sized(1280, 960);

    for pattern in CfaPattern::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &pattern, |b, &pattern| {
            let mut buf = frame.clone();
            b.iter(|| {
                buf.copy_from_slice(&frame);
                engine.apply(black_box(&mut buf), rect, &matrix, pattern).ok();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_frame_sizes, benchmark_patterns);
criterion_main!(benches);
