mod common;

use biome_locator::adapters::outbound::{InMemoryBiomeRegistry, NoiseBiomeSource, DEFAULT_CLIMATE_SCALE};
use biome_locator::config::SearchConfig;
use biome_locator::domains::biome_search::*;
use common::{desert, service, PaintedBiomeSource};
use std::collections::HashSet;
use std::sync::Arc;

fn g(x: i32, z: i32) -> GridCoordinate {
    GridCoordinate::new(x, z)
}

fn probe_over(cells: &[(GridCoordinate, &str)], radius: u32, seed: u64) -> BiomeSourceProbe {
    BiomeSourceProbe::new(Arc::new(PaintedBiomeSource::new(cells)), radius, seed).unwrap()
}

#[test]
fn test_probe_widens_to_neighbouring_cell() {
    let probe = probe_over(&[(g(5, 5), "desert")], 1, 0);
    let targets = [desert()];

    // radius 1 around corner (20,20) covers cells 4..=5
    assert_eq!(probe.probe(g(5, 5), &targets), Some(WorldPosition::new(20, 20)));
    // corner (24,24) covers cells 5..=6
    assert_eq!(probe.probe(g(6, 6), &targets), Some(WorldPosition::new(20, 20)));
    // corner (16,16) covers cells 3..=4
    assert_eq!(probe.probe(g(4, 4), &targets), None);
}

#[test]
fn test_zero_radius_checks_only_the_cell() {
    let probe = probe_over(&[(g(5, 5), "desert")], 0, 0);
    let targets = [desert()];
    assert_eq!(probe.probe(g(5, 5), &targets), Some(WorldPosition::new(20, 20)));
    assert_eq!(probe.probe(g(6, 6), &targets), None);
}

#[test]
fn test_non_target_biome_is_ignored() {
    let probe = probe_over(&[(g(0, 0), "jungle")], 1, 0);
    assert_eq!(probe.probe(g(0, 0), &[desert()]), None);
}

#[test]
fn test_tie_break_picks_among_all_matches() {
    let painted = [
        (g(-1, -1), "desert"),
        (g(0, -1), "desert"),
        (g(-1, 0), "desert"),
        (g(0, 0), "desert"),
    ];
    let probe = probe_over(&painted, 1, 1234);
    let targets = [desert()];

    let mut seen = HashSet::new();
    for _ in 0..400 {
        let pos = probe.probe(g(0, 0), &targets).unwrap();
        assert!([-4, 0].contains(&pos.x) && [-4, 0].contains(&pos.z));
        seen.insert(pos);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_same_seed_same_tie_breaks() {
    let painted = [(g(-1, 0), "desert"), (g(0, 0), "desert")];
    let a = probe_over(&painted, 1, 99);
    let b = probe_over(&painted, 1, 99);
    let targets = [desert()];
    for _ in 0..50 {
        assert_eq!(a.probe(g(0, 0), &targets), b.probe(g(0, 0), &targets));
    }
}

#[test]
fn test_service_over_painted_world() {
    // (40,0) lies on the stride-8 lattice, ring 40
    let probe = Arc::new(probe_over(&[(g(40, 0), "desert")], 1, 0));
    let svc = service(&[desert()], probe, SearchConfig::default());

    let located = svc
        .locate(WorldPosition::new(0, 0), &"minecraft:desert".parse().unwrap())
        .unwrap();
    assert_eq!(located.position, WorldPosition::new(160, 0));
    assert_eq!(located.distance, 160);
}

#[test]
fn test_noise_world_hit_has_target_biome() {
    let registry = InMemoryBiomeRegistry::vanilla();
    let source = Arc::new(NoiseBiomeSource::new(2024, DEFAULT_CLIMATE_SCALE, registry.biomes()).unwrap());
    let probe = BiomeSourceProbe::new(source.clone(), 1, 2024).unwrap();

    // Whatever biome sits at the origin must be found immediately.
    let here = source.biome_at(g(0, 0)).clone();
    let target = registry.resolve(&here).unwrap();
    let request = SearchRequest::new(g(0, 0), 6400, 8, vec![target]).unwrap();

    let found = search(&request, &probe).unwrap();
    assert_eq!(source.biome_at(found.to_grid()), &here);
    assert!(g(0, 0).chebyshev_distance(found.to_grid()) <= 1);
}

#[test]
fn test_locate_from_the_negative_world_edge() {
    // origin cell corner is i32::MIN, so its radius-1 window wraps and is empty
    let target = g(-536_870_904, 0);
    let probe = Arc::new(probe_over(&[(g(-536_870_912, 0), "desert"), (target, "desert")], 1, 0));
    let svc = service(&[desert()], probe, SearchConfig::default());

    let located = svc
        .locate(WorldPosition::new(i32::MIN, 0), &"minecraft:desert".parse().unwrap())
        .unwrap();
    assert_eq!(located.position, WorldPosition::new(-2_147_483_616, 0));
    assert_eq!(located.distance, 32);
}

#[test]
fn test_window_near_the_positive_world_edge() {
    let probe = probe_over(&[(g(536_870_911, 0), "desert")], 3, 0);
    // corner 2147483644 + 3 stays in range
    assert_eq!(
        probe.probe(g(536_870_911, 0), &[desert()]),
        Some(WorldPosition::new(2_147_483_644, 0))
    );
    let wide = probe_over(&[(g(536_870_911, 0), "desert")], 4, 0);
    assert_eq!(wide.probe(g(536_870_911, 0), &[desert()]), None);
}

#[test]
fn test_radius_beyond_i32_is_rejected() {
    let source = Arc::new(PaintedBiomeSource::new(&[]));
    assert!(BiomeSourceProbe::new(source.clone(), i32::MAX as u32, 0).is_ok());
    let err = BiomeSourceProbe::new(source, i32::MAX as u32 + 1, 0).err().unwrap();
    assert!(err.to_string().contains("probe radius"));
}
