use radcube_lib::{
    decode_grouped, decode_interleaved, read_adc_samples, save, ConversionError, CubeFile,
    RadarCube, RadarParams,
};

use crate::cli::ConvertArgs;

/// Capture layout selected on the command line.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    Interleaved,
    Grouped,
}

/// Run one offline conversion: resolve parameters, read the capture, decode
/// it with the selected layout and save the cube.
pub fn run_conversion(args: ConvertArgs, layout: Layout) -> Result<(), ConversionError> {
    let params = RadarParams::from_file(&args.params)?;
    log::info!(
        "Converting {} ({} frames, {} chirps/frame, {} samples/chirp, {} real channels)",
        args.input.display(),
        params.num_frames,
        params.chirps_per_frame,
        params.samples_per_chirp,
        params.real_channels
    );

    let samples = read_adc_samples(&args.input)?;

    let cube: RadarCube = match layout {
        Layout::Interleaved => decode_interleaved(&samples, &params)?,
        Layout::Grouped => decode_grouped(&samples, &params)?,
    };

    let file = CubeFile {
        file_path: args.output,
        file_type: args.format,
    };
    save(&file, &cube)?;

    log::info!(
        "Saved cube of shape {:?} to {}",
        cube.dim(),
        file.file_path.display()
    );
    Ok(())
}
