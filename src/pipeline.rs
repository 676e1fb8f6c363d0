use crate::{
    error::PointmorphResult,
    model::{DeviceClass, MorphVariant},
    morph::{MorphConfig, MorphEngine, MorphState},
    render::FramePacket,
    sequence::ShapeSequence,
};

/// A mounted morph: the generated sequence plus the stateful engine.
///
/// `mount` once (generation is synchronous and a one-time cost), then
/// `advance` every animation frame with the latest scroll progress and the
/// elapsed clock. Tear-down is dropping the driver.
pub struct MorphDriver {
    sequence: ShapeSequence,
    engine: MorphEngine,
}

impl MorphDriver {
    pub fn mount(variant: &MorphVariant, class: DeviceClass) -> PointmorphResult<Self> {
        let sequence = ShapeSequence::instantiate(variant, class)?;
        let engine = MorphEngine::new(&sequence, MorphConfig::from_variant(variant))?;
        Ok(Self { sequence, engine })
    }

    pub fn sequence(&self) -> &ShapeSequence {
        &self.sequence
    }

    pub fn state(&self) -> MorphState {
        self.engine.state()
    }

    /// Step the engine and hand back this frame's packet. `elapsed_secs` is
    /// passed through untouched for surface-side animation.
    pub fn advance(
        &mut self,
        progress: f32,
        elapsed_secs: f32,
    ) -> PointmorphResult<FramePacket<'_>> {
        self.engine.step(&self.sequence, progress)?;
        Ok(FramePacket {
            positions: self.engine.positions().as_slice(),
            sizes: self.sequence.sizes(),
            seeds: self.sequence.seeds(),
            time_secs: elapsed_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MorphVariant;

    #[test]
    fn mounted_driver_hands_out_consistent_packets() {
        let mut driver = MorphDriver::mount(&MorphVariant::hero(), DeviceClass::Mobile).unwrap();
        let packet = driver.advance(0.0, 0.0).unwrap();
        let n = packet.positions.len();
        assert_eq!(n, 1200);
        assert_eq!(packet.sizes.len(), n);
        assert_eq!(packet.seeds.len(), n);
        assert_eq!(packet.time_secs, 0.0);
    }

    #[test]
    fn time_is_passed_through_untouched() {
        let mut driver =
            MorphDriver::mount(&MorphVariant::pain_points(), DeviceClass::Mobile).unwrap();
        let packet = driver.advance(0.5, 12.75).unwrap();
        assert_eq!(packet.time_secs, 12.75);
    }

    #[test]
    fn advancing_moves_the_morph_state() {
        let mut driver = MorphDriver::mount(&MorphVariant::hero(), DeviceClass::Mobile).unwrap();
        driver.advance(0.0, 0.0).unwrap();
        assert_eq!(driver.state().segment_index, 0);
        driver.advance(0.95, 0.016).unwrap();
        assert_eq!(driver.state().segment_index, 4);
    }
}
