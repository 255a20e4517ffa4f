use std::hint::black_box;

use audio_spectrum::decode::DecodedAudioBuffer;
use audio_spectrum::spectrum::SpectralAnalyzer;
use criterion::{criterion_group, criterion_main, Criterion};

fn spectrum_benchmark(c: &mut Criterion) {
    let sample_rate = 44100;
    let samples: Vec<f32> = (0..65536)
        .map(|n| (2.0 * std::f32::consts::PI * 1000.0 * n as f32 / sample_rate as f32).sin())
        .collect();
    let buffer = DecodedAudioBuffer::new(samples, sample_rate, 1);
    let analyzer = SpectralAnalyzer::new();

    c.bench_function("magnitude spectrum, 16k window", |b| {
        b.iter(|| analyzer.analyze(black_box(&buffer), 16384).unwrap())
    });
}

criterion_group!(benches, spectrum_benchmark);
criterion_main!(benches);
