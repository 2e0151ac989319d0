// ============================================
// treegen demo - Выращивает одно дерево и печатает срез
// ============================================
// treegen [preset|default|apple_default] [seed]
// Свои ассеты: TREEGEN_BLOCKS, TREEGEN_TREES, TREEGEN_CONFIG (пути к JSON)

use treegen::blocks::{BlockRegistry, Node, AIR, APPLE, GRASS};
use treegen::treegen::{seed_for_position, TreeKind, TreePresets, TreeSpawner, TreegenConfig};
use treegen::voxel::{BlockPos, VoxelArea, VoxelBuffer};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "apple".to_string());
    let world_seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut registry = BlockRegistry::with_defaults();
    let mut presets = TreePresets::embedded();
    let mut config = TreegenConfig::embedded();

    if let Ok(path) = std::env::var("TREEGEN_BLOCKS") {
        match registry.load_from_file(&path) {
            Ok(count) => log::info!("Loaded {} blocks from {}", count, path),
            Err(e) => log::warn!("{}: {}", path, e),
        }
    }
    if let Ok(path) = std::env::var("TREEGEN_TREES") {
        match presets.load_from_file(&path) {
            Ok(count) => log::info!("Loaded {} tree presets from {}", count, path),
            Err(e) => log::warn!("{}: {}", path, e),
        }
    }
    if let Ok(path) = std::env::var("TREEGEN_CONFIG") {
        match TreegenConfig::load_from_file(&path) {
            Ok(loaded) => config = loaded,
            Err(e) => log::warn!("{}: {}", path, e),
        }
    }
    log::info!("{} blocks registered", registry.count());
    let spawner = TreeSpawner::new(config);

    let kind = match name.as_str() {
        "default" => TreeKind::Default { apple: false },
        "apple_default" => TreeKind::Default { apple: true },
        preset => match presets.get(preset) {
            Some(def) => TreeKind::LSystem(def.clone()),
            None => {
                let known: Vec<_> = presets.names().collect();
                eprintln!("Unknown tree '{}'. Presets: {}, default, apple_default", preset, known.join(", "));
                std::process::exit(2);
            }
        },
    };

    let origin = BlockPos::new(0, 0, 0);
    let mut area = VoxelArea::around(origin, 24, 2, 64);
    area.fill_layer(origin.y - 1, Node::new(GRASS));
    let report = match spawner.spawn_immediate(&mut area, origin, &kind, &registry, seed_for_position(world_seed, origin)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "{}: {} symbols, {} iterations, {} trunk / {} leaves / {} fruit",
        name, report.derived_len, report.iterations,
        report.trunk_writes, report.leaf_writes, report.fruit_writes,
    );
    log::debug!("{} solid nodes in area", area.iter_solid().count());
    for warning in &report.warnings {
        log::warn!("{}", warning);
    }

    // Срез X/Y через z = 0
    let (min, max) = (area.min(), area.max());
    for y in (min.y..=max.y).rev() {
        let row: String = (min.x..=max.x)
            .map(|x| match area.get(BlockPos::new(x, y, 0)).map(|n| n.block) {
                Some(AIR) | None => ' ',
                Some(APPLE) => 'o',
                Some(b) => match registry.get_by_numeric(b).map(|d| d.category) {
                    Some(treegen::blocks::BlockCategory::Wood) => '#',
                    Some(treegen::blocks::BlockCategory::Nature) => '*',
                    _ => '=',
                },
            })
            .collect();
        if !row.trim().is_empty() {
            println!("{}", row);
        }
    }
}
