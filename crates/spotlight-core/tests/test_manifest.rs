use spotlight_core::consts::DEFAULT_VIEWPORT_MAX_HEIGHT;
use spotlight_core::manifest::RegionManifest;
use spotlight_core::region::CoordinateSystem;

#[test]
fn test_parse_manifest_with_both_coordinate_systems() {
    let manifest: RegionManifest = toml::from_str(
        r#"
        src = "page-004.png"
        viewport_max_height = 480.0

        [[region]]
        x = 0.12
        y = 0.40
        width = 0.30
        height = 0.05
        coordinate_system = "normalized"

        [[region]]
        x = 100.0
        y = 200.0
        width = 200.0
        height = 50.0
        coordinate_system = "source_pixel"
        "#,
    )
    .expect("valid manifest");

    assert_eq!(manifest.src, "page-004.png");
    assert_eq!(manifest.viewport_max_height(), 480.0);

    let regions = manifest.validated_regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].coordinate_system, CoordinateSystem::Normalized);
    assert_eq!(regions[1].coordinate_system, CoordinateSystem::SourcePixel);
    assert_eq!(regions[1].x, 100.0);
}

#[test]
fn test_unrecognized_coordinate_system_skips_only_that_region() {
    let manifest: RegionManifest = toml::from_str(
        r#"
        src = "page-004.png"

        [[region]]
        x = 0.1
        y = 0.1
        width = 0.2
        height = 0.1
        coordinate_system = "polar"

        [[region]]
        x = 0.5
        y = 0.5
        width = 0.1
        height = 0.1
        coordinate_system = "normalized"
        "#,
    )
    .expect("manifest itself still parses");

    let regions = manifest.validated_regions();
    assert_eq!(regions.len(), 1, "misconfigured region is not fatal");
    assert_eq!(regions[0].x, 0.5);
}

#[test]
fn test_empty_region_list_and_default_height_budget() {
    let manifest: RegionManifest = toml::from_str(r#"src = "page-004.png""#).expect("valid");
    assert!(manifest.validated_regions().is_empty());
    assert_eq!(manifest.viewport_max_height(), DEFAULT_VIEWPORT_MAX_HEIGHT);
}

#[test]
fn test_region_order_is_preserved() {
    let manifest: RegionManifest = toml::from_str(
        r#"
        src = "page.png"

        [[region]]
        x = 1.0
        y = 0.0
        width = 1.0
        height = 1.0
        coordinate_system = "source_pixel"

        [[region]]
        x = 2.0
        y = 0.0
        width = 1.0
        height = 1.0
        coordinate_system = "source_pixel"
        "#,
    )
    .expect("valid");

    let regions = manifest.validated_regions();
    assert_eq!(regions[0].x, 1.0);
    assert_eq!(regions[1].x, 2.0);
}
