use pointmorph::{
    DeviceClass, MorphDriver, MorphVariant, RenderSurface, SpriteSurface, SurfaceKind, SurfaceProbe,
    SurfaceSettings, Viewport, choose_surface, create_surface,
};

struct Probe(bool);

impl SurfaceProbe for Probe {
    fn supports_point_sprites(&self) -> bool {
        self.0
    }
}

fn settings() -> SurfaceSettings {
    SurfaceSettings {
        viewport: Viewport::new(160, 120, 1.0).unwrap(),
        clear_rgba: None,
    }
}

#[test]
fn mounted_hero_lights_the_sprite_surface() {
    let mut driver = MorphDriver::mount(&MorphVariant::hero(), DeviceClass::Mobile).unwrap();
    let mut surface = SpriteSurface::new(settings()).unwrap();

    let packet = driver.advance(0.0, 0.0).unwrap();
    surface.present(&packet).unwrap();

    let frame = surface.frame();
    assert!(frame.premultiplied);
    let lit = frame
        .data
        .chunks_exact(4)
        .filter(|px| px.iter().any(|&b| b != 0))
        .count();
    assert!(lit > 50, "expected a visible orb, lit {lit} pixels");
}

#[test]
fn probe_failure_degrades_to_the_ambient_surface() {
    assert_eq!(choose_surface(&Probe(false)), SurfaceKind::Ambient);

    let mut surface = create_surface(SurfaceKind::Ambient, &settings()).unwrap();
    let mut driver =
        MorphDriver::mount(&MorphVariant::pain_points(), DeviceClass::Mobile).unwrap();
    let packet = driver.advance(0.3, 1.0).unwrap();
    surface.present(&packet).unwrap();
}

#[test]
fn probe_success_yields_point_sprites() {
    assert_eq!(choose_surface(&Probe(true)), SurfaceKind::PointSprite);
    let surface = create_surface(SurfaceKind::PointSprite, &settings());
    assert!(surface.is_ok());
}

#[test]
fn boxed_surface_renders_through_the_trait_object() {
    let mut surface = create_surface(SurfaceKind::PointSprite, &settings()).unwrap();
    let mut driver = MorphDriver::mount(&MorphVariant::hero(), DeviceClass::Mobile).unwrap();
    for (frame_no, progress) in [(0u32, 0.0f32), (1, 0.25), (2, 0.5), (3, 1.0)] {
        let packet = driver
            .advance(progress, frame_no as f32 / 60.0)
            .unwrap();
        surface.present(&packet).unwrap();
    }
}
