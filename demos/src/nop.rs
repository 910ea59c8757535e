mod tests;

use anyhow::Result;

use slmkit::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let slm = Nop::new(DeviceClass::Phase, (600, 800));
    let dmd = Nop::new(
        DeviceClass::Amplitude,
        RotationPack::Deg45.packed_size(CanvasSize::new(512, 512)),
    );

    tests::run(slm, dmd)
}
