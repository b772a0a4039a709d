use glam::Vec3;
use modular_parts::prelude::*;
use modular_parts_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let catalog = Catalog::new()
        .with_set(PartSet::new("helmet", "head_socket").with_parts([
            Part::new("horned", "prefabs/helmet_horned").with_weight(2),
            Part::new("visor", "prefabs/helmet_visor").with_weight(5),
            Part::new("crown", "prefabs/crown")
                .with_weight(1)
                .with_transform(Transform::from_position(Vec3::new(0.0, 0.1, 0.0))),
        ]))
        .with_set(PartSet::new("shoulders", "torso_socket").with_parts([
            Part::new("pauldrons", "prefabs/pauldrons").with_weight(3),
            Part::new("fur", "prefabs/fur_mantle").with_weight(3),
        ]))
        .with_set(
            PartSet::new("cape", "back_socket")
                .with_active(false)
                .with_part(Part::new("banner", "prefabs/cape_banner")),
        );

    let config = ModularConfig::new()
        .with_starting_method(StartingMethod::OnCall)
        .with_manual_seed(7);
    let assembler = Assembler::try_new(config)?;

    // Manual seed mode: the host seeds the generator it injects.
    let seed = assembler.config.manual_seed.unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sink = FnSink::new(|event| {
        if let AssemblyEvent::PartSelected { selection, .. } = event {
            tracing::info!(
                "{} @ {} -> {} ({})",
                selection.set_name,
                selection.attach_point,
                selection.part_name,
                selection.prototype
            );
        }
    });
    let result = assembler.assemble_with_events(&catalog, &mut rng, &mut sink);
    tracing::info!(
        "{} selections, {} sets skipped",
        result.selections.len(),
        result.sets_skipped
    );

    let cape = assembler.assemble_set(&catalog, "cape", &mut rng)?;
    tracing::info!("explicit draw for inactive set: {}", cape.part_name);

    Ok(())
}
