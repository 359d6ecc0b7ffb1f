use pwgen_generator::GenerationRequest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a mix of requests with varying lengths and character classes.
/// Uses a fixed seed so every run benchmarks the same workload.
pub fn mixed_requests(count: usize) -> Vec<GenerationRequest> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            let mut request = GenerationRequest::new(length, 1).with_classes(
                rng.r#gen(),
                rng.r#gen(),
                rng.r#gen(),
                rng.r#gen(),
            );
            // An all-off draw would be rejected; keep every request valid.
            request.include_lower_case |= !(request.include_upper_case
                || request.include_numbers
                || request.include_special_characters);
            request
        })
        .collect()
}
