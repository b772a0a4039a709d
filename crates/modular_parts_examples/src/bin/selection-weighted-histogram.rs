use modular_parts::prelude::*;
use modular_parts_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Relative weights; "cursed" is authored but disabled with weight 0.
    let weights = WeightTable::new()
        .with_entry("common", 60)
        .with_entry("uncommon", 30)
        .with_entry("rare", 9)
        .with_entry("legendary", 1)
        .with_entry("cursed", 0);

    let sum = weights.total_weight()?;
    let mut rng = StdRng::seed_from_u64(2025);
    let randomizer = WeightedRandomizer::new(&weights);

    let trials = 100_000usize;
    let mut counts = vec![0usize; weights.len()];
    for _ in 0..trials {
        let picked = randomizer.take_one(&mut rng)?;
        if let Some(slot) = weights.entries().iter().position(|(k, _)| k == picked) {
            counts[slot] += 1;
        }
    }

    for ((key, weight), count) in weights.iter().zip(counts) {
        let observed = count as f64 / trials as f64;
        let expected = weight as f64 / sum as f64;
        tracing::info!("{key:>10}: observed {observed:.4}, expected {expected:.4}");
    }

    Ok(())
}
