use slmkit::prelude::*;

pub fn checker(slm: &mut Nop) -> anyhow::Result<()> {
    let size = Showable::size(slm);

    let phase = LensesAndPrisms::new([TargetBeam::grating(0.02, 0.)]).compute(size)?;

    // Gaussian spot of twice the peak, which is normalized with a warning.
    let grid = Grid::new(size);
    let rr = grid.radial_squared();
    let sigma2 = (size.rows().min(size.cols()) as f64 / 4.).powi(2);
    let amplitude = rr.map(|r| 2. * (-r / (2. * sigma2)).exp());

    slm.show(Some(&phase), Some(&amplitude))?;

    Ok(())
}
