use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use glam::DVec2;
use proptest::prelude::*;
use scatter_config::{Config, Dimension, ItemKind, ItemTemplate};

use super::*;

fn template(kind: ItemKind, width: f64, height: f64) -> ItemTemplate {
    ItemTemplate {
        label: kind.as_str().to_owned(),
        kind,
        width: Dimension::new(width).unwrap(),
        height: Dimension::new(height).unwrap(),
        source: String::new(),
    }
}

/// Signed difference between two angles, in `(-π, π]`.
fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI {
        d - TAU
    } else {
        d
    }
}

fn check_placement(generator: &LayoutGenerator, catalog: &[ItemTemplate], items: &[Item]) {
    assert_eq!(items.len(), catalog.len());

    let ids: HashSet<_> = items.iter().map(Item::id).collect();
    assert_eq!(ids.len(), items.len(), "item ids must be unique");

    for (idx, (item, template)) in items.iter().zip(catalog).enumerate() {
        assert!(item.x().is_finite() && item.y().is_finite());
        assert_eq!(item.id(), ItemId(idx as u32 + 1));
        assert_eq!(item.width(), template.width.get());
        assert_eq!(item.height(), template.height.get());
        assert_eq!(item.kind(), template.kind);

        let offset = item.center() - generator.center();
        let radius = offset.length();
        assert!(radius >= generator.radius - generator.radius_jitter - 1e-9);
        assert!(radius <= generator.radius + generator.radius_jitter + 1e-9);

        let base = LayoutGenerator::base_angle(idx, items.len());
        let angle = offset.y.atan2(offset.x);
        assert!(
            angle_diff(angle, base).abs() <= generator.angle_jitter + 1e-9,
            "item {idx}: angle {angle} too far from {base}"
        );
    }
}

#[test]
fn single_item_scenario() {
    let generator = LayoutGenerator::new(DVec2::new(800., 600.), 350.);
    let catalog = [template(ItemKind::Button, 100., 40.)];
    let mut rng = fastrand::Rng::with_seed(1);

    let items = generator.generate(&catalog, &mut rng);
    check_placement(&generator, &catalog, &items);

    let dist = items[0].center().distance(DVec2::new(400., 300.));
    assert!((300. ..=400.).contains(&dist));

    // The first item starts at the top.
    assert!(items[0].center().y < 300.);
}

#[test]
fn empty_catalog_gives_empty_layout() {
    let generator = LayoutGenerator::new(DVec2::new(800., 600.), 350.);
    let mut rng = fastrand::Rng::with_seed(0);
    assert!(generator.generate(&[], &mut rng).is_empty());
}

#[test]
fn zero_viewport_centers_on_origin() {
    let mut generator = LayoutGenerator::new(DVec2::ZERO, 0.);
    generator.radius_jitter = 0.;
    generator.angle_jitter = 0.;

    let catalog = [template(ItemKind::Badge, 80., 28.)];
    let mut rng = fastrand::Rng::with_seed(0);
    let items = generator.generate(&catalog, &mut rng);

    assert_abs_diff_eq!(items[0].x(), -40., epsilon = 1e-9);
    assert_abs_diff_eq!(items[0].y(), -14., epsilon = 1e-9);
}

#[test]
fn without_jitter_items_sit_on_the_circle() {
    let mut generator = LayoutGenerator::new(DVec2::new(1000., 1000.), 200.);
    generator.radius_jitter = 0.;
    generator.angle_jitter = 0.;

    let catalog: Vec<_> = (0..4).map(|_| template(ItemKind::Card, 20., 10.)).collect();
    let mut rng = fastrand::Rng::with_seed(0);
    let items = generator.generate(&catalog, &mut rng);

    // Top, right, bottom, left.
    let expected = [(500., 300.), (700., 500.), (500., 700.), (300., 500.)];
    for (item, (x, y)) in items.iter().zip(expected) {
        assert_abs_diff_eq!(item.center().x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(item.center().y, y, epsilon = 1e-9);
    }
}

#[test]
fn jitter_is_drawn_per_item() {
    let mut generator = LayoutGenerator::new(DVec2::new(800., 600.), 300.);
    generator.angle_jitter = 0.;

    let catalog: Vec<_> = (0..6).map(|_| template(ItemKind::Input, 10., 10.)).collect();
    let mut rng = fastrand::Rng::with_seed(42);
    let items = generator.generate(&catalog, &mut rng);

    let radii: Vec<f64> = items
        .iter()
        .map(|item| item.center().distance(generator.center()))
        .collect();
    assert!(
        radii.windows(2).any(|w| (w[0] - w[1]).abs() > 1e-6),
        "radius jitter must not be shared between items: {radii:?}"
    );
}

#[test]
fn same_seed_same_layout() {
    let config = Config::load_default();
    let generator = LayoutGenerator::from_config(&config.viewport, &config.placement);

    let a = generator.generate(&config.catalog, &mut fastrand::Rng::with_seed(9));
    let b = generator.generate(&config.catalog, &mut fastrand::Rng::with_seed(9));
    let c = generator.generate(&config.catalog, &mut fastrand::Rng::with_seed(10));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn default_config_layout() {
    let mut config = Config::load_default();
    config.placement.seed = Some(5);

    let items = generate_from_config(&config);
    let generator = LayoutGenerator::from_config(&config.viewport, &config.placement);
    check_placement(&generator, &config.catalog, &items);

    assert_eq!(items[1].label(), "Card Component");
    assert_eq!(items[1].source(), "Card.tsx");
}

#[test]
fn item_under_prefers_topmost() {
    let a = Item::new(
        ItemId(1),
        DVec2::new(0., 0.),
        &template(ItemKind::Card, 100., 100.),
    );
    let b = Item::new(
        ItemId(2),
        DVec2::new(50., 50.),
        &template(ItemKind::Badge, 100., 100.),
    );
    let items = [a, b];

    assert_eq!(item_under(&items, DVec2::new(10., 10.)).map(Item::id), Some(ItemId(1)));
    assert_eq!(item_under(&items, DVec2::new(60., 60.)).map(Item::id), Some(ItemId(2)));
    assert_eq!(item_under(&items, DVec2::new(149., 149.)).map(Item::id), Some(ItemId(2)));
    assert_eq!(item_under(&items, DVec2::new(150., 150.)), None);
    assert_eq!(item_under(&items, DVec2::new(-1., 10.)), None);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn random_placement(
        count in 1usize..24,
        seed in any::<u64>(),
        radius in 60f64..1000.,
        viewport_w in 0f64..4000.,
        viewport_h in 0f64..4000.,
        sizes in prop::collection::vec((1f64..400., 1f64..400.), 24),
    ) {
        let generator = LayoutGenerator::new(DVec2::new(viewport_w, viewport_h), radius);
        let catalog: Vec<_> = sizes[..count]
            .iter()
            .map(|&(w, h)| template(ItemKind::Toggle, w, h))
            .collect();

        let mut rng = fastrand::Rng::with_seed(seed);
        let items = generator.generate(&catalog, &mut rng);
        check_placement(&generator, &catalog, &items);
    }
}
