use slmkit::prelude::*;

pub fn amplitude(dmd: &mut Nop) -> anyhow::Result<()> {
    let size = CanvasSize::new(512, 512);

    let phase = LensesAndPrisms::new([
        TargetBeam::grating(0.1, 0.1),
        TargetBeam::grating(-0.1, 0.1),
    ])
    .compute(size)?;
    let amplitude = Pattern::from_element(size.rows(), size.cols(), 1.);

    let option = FinalizeOption::from_named("amplitude", [("colormap", "bin")])?;
    dmd.show_with(Some(&phase), Some(&amplitude), &option)?;

    Ok(())
}
